//! Holdings enrichment.
//!
//! Joins each holding against security reference data and the latest price
//! index. Unmatched tickers and blank fields degrade to defaults; nothing here
//! can fail.

use std::collections::HashMap;
use tracing::trace;

use crate::prices::LatestPriceIndex;
use crate::types::{or_unknown, EnrichedHolding, HoldingInput, SecurityRecord, Table, UNKNOWN};

/// Security reference data keyed by trimmed ticker.
///
/// When a ticker appears more than once, the first record wins and later
/// duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct SecurityIndex {
    records: Vec<SecurityRecord>,
    by_ticker: HashMap<String, usize>,
}

impl SecurityIndex {
    /// Builds the index from records.
    #[must_use]
    pub fn new(records: Vec<SecurityRecord>) -> Self {
        let mut by_ticker = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            by_ticker.entry(record.ticker.trim().to_string()).or_insert(i);
        }
        Self { records, by_ticker }
    }

    /// Builds the index from a securities table.
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        Self::new(table.iter().map(SecurityRecord::from_row).collect())
    }

    /// Returns the first record with this ticker.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<&SecurityRecord> {
        self.by_ticker.get(ticker).map(|&i| &self.records[i])
    }

    /// Number of records, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Enriches holdings in input order.
///
/// # Examples
///
/// ```
/// use lookthrough_portfolio::enrichment::{enrich_holdings, SecurityIndex};
/// use lookthrough_portfolio::prices::LatestPriceIndex;
/// use lookthrough_portfolio::types::{HoldingInput, PriceQuote, SecurityRecord};
///
/// let securities = SecurityIndex::new(vec![SecurityRecord::new("AAPL", "Stock", "USA", "Technology")]);
/// let prices = LatestPriceIndex::build(&[PriceQuote::new("AAPL", "2025-09-01", 210.0)]);
///
/// let enriched = enrich_holdings(&[HoldingInput::new("AAPL", 10.0)], &securities, &prices);
/// assert_eq!(enriched[0].market_value, 2100.0);
/// assert_eq!(enriched[0].country, "USA");
/// ```
#[must_use]
pub fn enrich_holdings(
    holdings: &[HoldingInput],
    securities: &SecurityIndex,
    prices: &LatestPriceIndex,
) -> Vec<EnrichedHolding> {
    holdings
        .iter()
        .map(|h| enrich_holding(h, securities, prices))
        .collect()
}

/// Enriches a single holding.
#[must_use]
pub fn enrich_holding(
    holding: &HoldingInput,
    securities: &SecurityIndex,
    prices: &LatestPriceIndex,
) -> EnrichedHolding {
    let ticker = holding.ticker.trim();
    let security = securities.get(ticker);

    // An indexed price wins even if it is zero.
    let resolved = prices.price(ticker).unwrap_or(holding.last_price);
    let last_price = (resolved != 0.0).then_some(resolved);

    let market_value = if holding.market_value > 0.0 {
        holding.market_value
    } else {
        holding.quantity * last_price.unwrap_or(0.0)
    };

    if security.is_none() {
        trace!(ticker, "no security record for holding");
    }
    if last_price.is_none() {
        trace!(ticker, "no price resolved for holding");
    }

    let field = |pick: fn(&SecurityRecord) -> &str| {
        security.map_or(UNKNOWN, |s| or_unknown(pick(s))).to_string()
    };

    EnrichedHolding {
        ticker: ticker.to_string(),
        quantity: holding.quantity,
        last_price,
        market_value,
        security_type: field(|s| s.security_type.as_str()),
        country: field(|s| s.country.as_str()),
        sector: field(|s| s.sector.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceQuote;

    fn securities() -> SecurityIndex {
        SecurityIndex::new(vec![
            SecurityRecord::new("AAPL", "Stock", "USA", "Technology"),
            SecurityRecord::new("ETF1", "ETF", "USA", ""),
            SecurityRecord::new("AAPL", "Stock", "Ireland", "Other"),
        ])
    }

    fn prices() -> LatestPriceIndex {
        LatestPriceIndex::build(&[
            PriceQuote::new("AAPL", "2025-09-01", 210.0),
            PriceQuote::new("ZERO", "2025-09-01", 0.0),
        ])
    }

    #[test]
    fn test_computed_market_value() {
        let h = enrich_holding(&HoldingInput::new("AAPL", 10.0), &securities(), &prices());
        assert_eq!(h.last_price, Some(210.0));
        assert_eq!(h.market_value, 2100.0);
        assert_eq!(h.security_type, "Stock");
        assert_eq!(h.sector, "Technology");
    }

    #[test]
    fn test_first_security_wins() {
        let h = enrich_holding(&HoldingInput::new("AAPL", 1.0), &securities(), &prices());
        assert_eq!(h.country, "USA");
        assert_eq!(securities().len(), 3);
    }

    #[test]
    fn test_explicit_market_value_overrides() {
        let input = HoldingInput::new("AAPL", 10.0).with_market_value(5000.0);
        let h = enrich_holding(&input, &securities(), &prices());
        assert_eq!(h.market_value, 5000.0);
        assert_eq!(h.last_price, Some(210.0));
    }

    #[test]
    fn test_non_positive_market_value_ignored() {
        let input = HoldingInput::new("AAPL", 10.0).with_market_value(-5.0);
        let h = enrich_holding(&input, &securities(), &prices());
        assert_eq!(h.market_value, 2100.0);
    }

    #[test]
    fn test_fallback_last_price() {
        let input = HoldingInput::new("ETF1", 20.0).with_last_price(95.5);
        let h = enrich_holding(&input, &securities(), &prices());
        assert_eq!(h.last_price, Some(95.5));
        assert_eq!(h.market_value, 1910.0);
    }

    #[test]
    fn test_indexed_zero_price_beats_fallback() {
        let input = HoldingInput::new("ZERO", 5.0).with_last_price(10.0);
        let h = enrich_holding(&input, &securities(), &prices());
        assert_eq!(h.last_price, None);
        assert_eq!(h.market_value, 0.0);
    }

    #[test]
    fn test_unresolved_price_is_none() {
        let h = enrich_holding(&HoldingInput::new("ETF1", 20.0), &securities(), &prices());
        assert_eq!(h.last_price, None);
        assert_eq!(h.market_value, 0.0);
        assert_eq!(h.sector, UNKNOWN);
        assert_eq!(h.country, "USA");
    }

    #[test]
    fn test_unmatched_ticker_defaults() {
        let h = enrich_holding(&HoldingInput::new(" XYZ ", 3.0), &securities(), &prices());
        assert_eq!(h.ticker, "XYZ");
        assert_eq!(h.security_type, UNKNOWN);
        assert_eq!(h.country, UNKNOWN);
        assert_eq!(h.sector, UNKNOWN);
    }

    #[test]
    fn test_ticker_match_is_case_sensitive() {
        let h = enrich_holding(&HoldingInput::new("aapl", 1.0), &securities(), &prices());
        assert_eq!(h.security_type, UNKNOWN);
        assert_eq!(h.last_price, None);
    }

    #[test]
    fn test_preserves_order() {
        let inputs = vec![
            HoldingInput::new("ETF1", 1.0),
            HoldingInput::new("AAPL", 1.0),
            HoldingInput::new("ETF1", 2.0),
        ];
        let out = enrich_holdings(&inputs, &securities(), &prices());
        let tickers: Vec<_> = out.iter().map(|h| h.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["ETF1", "AAPL", "ETF1"]);
    }
}
