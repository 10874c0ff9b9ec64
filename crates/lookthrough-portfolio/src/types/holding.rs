//! Enriched holding type.

use serde::{Deserialize, Serialize};

use super::classification::{Dimension, ETF_TYPE};

/// A holding joined with its price and classification.
///
/// Produced by [`enrich_holdings`](crate::enrichment::enrich_holdings); never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedHolding {
    /// Ticker (trimmed).
    pub ticker: String,

    /// Quantity held.
    pub quantity: f64,

    /// Resolved price, or `None` when no non-zero price was found.
    pub last_price: Option<f64>,

    /// Explicit market value, or quantity times resolved price.
    pub market_value: f64,

    /// Security type, "Unknown" when unmatched.
    #[serde(rename = "type")]
    pub security_type: String,

    /// Country, "Unknown" when unmatched or blank.
    pub country: String,

    /// Sector, "Unknown" when unmatched or blank.
    pub sector: String,
}

impl EnrichedHolding {
    /// Returns the holding's own classification for a dimension.
    #[must_use]
    pub fn classification(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Country => &self.country,
            Dimension::Sector => &self.sector,
        }
    }

    /// Returns true if the holding is typed as an ETF (case-insensitive).
    #[must_use]
    pub fn is_etf(&self) -> bool {
        self.security_type.trim().eq_ignore_ascii_case(ETF_TYPE)
    }

    /// Price used for computation: the resolved price or zero.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.last_price.unwrap_or(0.0)
    }
}
