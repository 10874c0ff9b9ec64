//! Look-through aggregation by country and sector.
//!
//! Each holding's market value goes to its own classification, except for ETF
//! holdings that have allocation rows: their value is split across the rows'
//! categories by weight. Weights are applied as given. If an ETF's weights sum
//! to 90, only 90% of its value appears in the breakdown.

use std::collections::HashMap;

use super::Breakdown;
use crate::types::{or_unknown, AllocationRow, Dimension, EnrichedHolding, Table};

/// Allocation rows grouped by trimmed ETF ticker, row order preserved.
#[derive(Debug, Clone, Default)]
pub struct AllocationIndex {
    by_ticker: HashMap<String, Vec<AllocationRow>>,
}

impl AllocationIndex {
    /// Groups allocation rows by ticker.
    #[must_use]
    pub fn new(rows: impl IntoIterator<Item = AllocationRow>) -> Self {
        let mut by_ticker: HashMap<String, Vec<AllocationRow>> = HashMap::new();
        for row in rows {
            by_ticker
                .entry(row.ticker.trim().to_string())
                .or_default()
                .push(row);
        }
        Self { by_ticker }
    }

    /// Decodes and groups an allocation table for a dimension.
    #[must_use]
    pub fn from_table(table: &Table, dimension: Dimension) -> Self {
        Self::new(table.iter().map(|row| AllocationRow::from_row(row, dimension)))
    }

    /// Returns the allocation rows for a ticker (empty if none).
    #[must_use]
    pub fn rows(&self, ticker: &str) -> &[AllocationRow] {
        self.by_ticker.get(ticker).map_or(&[][..], Vec::as_slice)
    }

    /// Number of distinct tickers with allocations.
    #[must_use]
    pub fn ticker_count(&self) -> usize {
        self.by_ticker.len()
    }
}

/// Aggregates holdings along a dimension with ETF look-through.
///
/// - Holdings with zero (or non-finite) market value are skipped entirely.
/// - ETF holdings with allocation rows contribute `value * weight / 100` to
///   each row's category (blank categories become "Unknown").
/// - Everything else contributes its full value to its own classification.
///
/// # Examples
///
/// ```
/// use lookthrough_portfolio::bucketing::{look_through, AllocationIndex};
/// use lookthrough_portfolio::types::{AllocationRow, Dimension, EnrichedHolding};
///
/// let etf = EnrichedHolding {
///     ticker: "ETF1".into(),
///     quantity: 20.0,
///     last_price: Some(100.0),
///     market_value: 2000.0,
///     security_type: "ETF".into(),
///     country: "USA".into(),
///     sector: "Unknown".into(),
/// };
/// let allocations = AllocationIndex::new(vec![
///     AllocationRow::new("ETF1", "USA", 60.0),
///     AllocationRow::new("ETF1", "Finland", 40.0),
/// ]);
///
/// let by_country = look_through(&[etf], &allocations, Dimension::Country);
/// assert_eq!(by_country.get("Finland"), Some(800.0));
/// ```
#[must_use]
pub fn look_through(
    holdings: &[EnrichedHolding],
    allocations: &AllocationIndex,
    dimension: Dimension,
) -> Breakdown {
    let mut out = Breakdown::new(dimension);

    for holding in holdings {
        let weight = holding.market_value;
        if weight == 0.0 || !weight.is_finite() {
            continue;
        }

        if holding.is_etf() {
            let rows = allocations.rows(&holding.ticker);
            if !rows.is_empty() {
                for row in rows {
                    out.add(or_unknown(&row.category), weight * row.fraction());
                }
                continue;
            }
        }

        out.add(or_unknown(holding.classification(dimension)), weight);
    }

    out
}

/// Country breakdown with ETF look-through.
#[must_use]
pub fn look_through_by_country(
    holdings: &[EnrichedHolding],
    allocations: &AllocationIndex,
) -> Breakdown {
    look_through(holdings, allocations, Dimension::Country)
}

/// Sector breakdown with ETF look-through.
#[must_use]
pub fn look_through_by_sector(
    holdings: &[EnrichedHolding],
    allocations: &AllocationIndex,
) -> Breakdown {
    look_through(holdings, allocations, Dimension::Sector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Row, UNKNOWN};
    use approx::assert_relative_eq;

    fn holding(ticker: &str, kind: &str, country: &str, sector: &str, mv: f64) -> EnrichedHolding {
        EnrichedHolding {
            ticker: ticker.into(),
            quantity: 1.0,
            last_price: Some(mv),
            market_value: mv,
            security_type: kind.into(),
            country: country.into(),
            sector: sector.into(),
        }
    }

    fn etf_countries() -> AllocationIndex {
        AllocationIndex::new(vec![
            AllocationRow::new("ETF1", "USA", 60.0),
            AllocationRow::new("ETF1", "Finland", 25.0),
            AllocationRow::new("ETF1", "Germany", 15.0),
        ])
    }

    #[test]
    fn test_non_etf_uses_own_classification() {
        let holdings = vec![
            holding("AAPL", "Stock", "USA", "Technology", 2100.0),
            holding("NOKIA", "Stock", "Finland", "Technology", 35.0),
        ];
        let b = look_through(&holdings, &etf_countries(), Dimension::Country);
        assert_eq!(b.get("USA"), Some(2100.0));
        assert_eq!(b.get("Finland"), Some(35.0));
    }

    #[test]
    fn test_etf_redistributed() {
        let holdings = vec![
            holding("AAPL", "Stock", "USA", "Technology", 2100.0),
            holding("ETF1", "ETF", "USA", UNKNOWN, 2000.0),
        ];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert_relative_eq!(b.get("USA").unwrap(), 3300.0);
        assert_relative_eq!(b.get("Finland").unwrap(), 500.0);
        assert_relative_eq!(b.get("Germany").unwrap(), 300.0);
        assert_eq!(b.categories().collect::<Vec<_>>(), vec!["USA", "Finland", "Germany"]);
    }

    #[test]
    fn test_etf_type_case_insensitive() {
        let holdings = vec![holding("ETF1", "etf", "USA", UNKNOWN, 1000.0)];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert_relative_eq!(b.get("Germany").unwrap(), 150.0);
    }

    #[test]
    fn test_etf_without_allocations_falls_through() {
        let holdings = vec![holding("ETF2", "ETF", "Ireland", "Blend", 500.0)];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert_eq!(b.get("Ireland"), Some(500.0));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_allocations_ignored_for_non_etf() {
        let holdings = vec![holding("ETF1", "Stock", "Sweden", "X", 1000.0)];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert_eq!(b.get("Sweden"), Some(1000.0));
        assert_eq!(b.get("USA"), None);
    }

    #[test]
    fn test_zero_value_skipped_entirely() {
        let holdings = vec![
            holding("ETF1", "ETF", "USA", UNKNOWN, 0.0),
            holding("XYZ", UNKNOWN, UNKNOWN, UNKNOWN, 0.0),
        ];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert!(b.is_empty());
    }

    #[test]
    fn test_non_finite_value_skipped() {
        let mut overflow = holding("BIG", "Stock", "USA", "Technology", 0.0);
        overflow.market_value = 1e200 * 1e200;
        assert!(overflow.market_value.is_infinite());

        let holdings = vec![overflow, holding("AAPL", "Stock", "USA", "Technology", 2100.0)];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert_eq!(b.len(), 1);
        assert_eq!(b.get("USA"), Some(2100.0));
        assert!(b.total().is_finite());
    }

    #[test]
    fn test_weights_not_normalized() {
        let allocations = AllocationIndex::new(vec![
            AllocationRow::new("ETF1", "USA", 50.0),
            AllocationRow::new("ETF1", "Japan", 30.0),
        ]);
        let holdings = vec![holding("ETF1", "ETF", "USA", UNKNOWN, 1000.0)];
        let b = look_through_by_country(&holdings, &allocations);
        assert_relative_eq!(b.total(), 800.0);
    }

    #[test]
    fn test_blank_category_is_unknown() {
        let allocations = AllocationIndex::new(vec![
            AllocationRow::new("ETF1", "", 40.0),
            AllocationRow::new("ETF1", " Health Care ", 60.0),
        ]);
        let holdings = vec![
            holding("ETF1", "ETF", "USA", UNKNOWN, 100.0),
            holding("MSFT", "Stock", "USA", " ", 10.0),
        ];
        let b = look_through_by_sector(&holdings, &allocations);
        assert_relative_eq!(b.get(UNKNOWN).unwrap(), 50.0);
        assert_relative_eq!(b.get("Health Care").unwrap(), 60.0);
    }

    #[test]
    fn test_negative_value_contributes() {
        let holdings = vec![holding("SHORT", "Stock", "USA", "Technology", -50.0)];
        let b = look_through_by_country(&holdings, &etf_countries());
        assert_eq!(b.get("USA"), Some(-50.0));
    }

    #[test]
    fn test_allocation_index_from_table() {
        let table: Table = vec![
            Row::new()
                .with("ticker", " ETF1")
                .with("sector", "Technology")
                .with("weight", "50"),
            Row::new()
                .with("ticker", "ETF1")
                .with("sector", "Industrials")
                .with("weight", "30,5"),
        ]
        .into_iter()
        .collect();
        let index = AllocationIndex::from_table(&table, Dimension::Sector);
        assert_eq!(index.ticker_count(), 1);
        assert_eq!(index.rows("ETF1").len(), 2);
        assert_eq!(index.rows("ETF1")[1].weight, 30.5);
        assert!(index.rows("ETF2").is_empty());
    }
}
