//! Report output surface.

use serde::Serialize;

use crate::bucketing::Breakdown;
use crate::types::{Dimension, EnrichedHolding};

/// Everything the presentation layer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    /// Enriched holdings in input order.
    pub holdings: Vec<EnrichedHolding>,

    /// Sum of all holdings' market values.
    pub total_market_value: f64,

    /// Country breakdown with ETF look-through.
    pub by_country: Breakdown,

    /// Sector breakdown with ETF look-through.
    pub by_sector: Breakdown,
}

impl PortfolioReport {
    /// Assembles a report; the total is summed from the holdings.
    #[must_use]
    pub fn new(holdings: Vec<EnrichedHolding>, by_country: Breakdown, by_sector: Breakdown) -> Self {
        let total_market_value = holdings.iter().fold(0.0, |acc, h| acc + h.market_value);
        Self {
            holdings,
            total_market_value,
            by_country,
            by_sector,
        }
    }

    /// Returns the breakdown for a dimension.
    #[must_use]
    pub fn breakdown(&self, dimension: Dimension) -> &Breakdown {
        match dimension {
            Dimension::Country => &self.by_country,
            Dimension::Sector => &self.by_sector,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_includes_all_holdings() {
        let holding = |mv: f64| EnrichedHolding {
            ticker: "X".into(),
            quantity: 1.0,
            last_price: None,
            market_value: mv,
            security_type: "Stock".into(),
            country: "USA".into(),
            sector: "Technology".into(),
        };
        let report = PortfolioReport::new(
            vec![holding(100.0), holding(0.0), holding(-20.0)],
            Breakdown::new(Dimension::Country),
            Breakdown::new(Dimension::Sector),
        );
        assert_eq!(report.total_market_value, 80.0);
        assert_eq!(report.breakdown(Dimension::Sector).dimension, Dimension::Sector);
    }

    #[test]
    fn test_to_json() {
        let report = PortfolioReport::new(
            vec![],
            Breakdown::new(Dimension::Country),
            Breakdown::new(Dimension::Sector),
        );
        assert!(report.total_market_value.is_sign_positive());
        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("\"total_market_value\": 0.0"));
        assert!(!json.contains("-0.0"));
        assert!(json.contains("\"by_sector\""));
    }
}
