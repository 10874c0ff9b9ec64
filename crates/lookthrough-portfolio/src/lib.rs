//! # Lookthrough Portfolio
//!
//! Holdings enrichment and ETF look-through breakdowns.
//!
//! This crate turns five small input tables (securities, prices, holdings,
//! country allocations, sector allocations) into an enriched holdings list and
//! two allocation breakdowns, decomposing ETF holdings into their underlying
//! country and sector weights.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every computation is a function of the current tables
//! - **Total**: malformed numbers become zero, missing classifications become "Unknown"
//! - **Snapshots**: [`PortfolioState`] is replaced, never mutated, on each load
//!
//! ## Quick Start
//!
//! ```rust
//! use lookthrough_portfolio::prelude::*;
//!
//! let securities: Table = vec![
//!     Row::new().with("ticker", "AAPL").with("type", "Stock").with("country", "USA").with("sector", "Technology"),
//! ].into_iter().collect();
//! let prices: Table = vec![
//!     Row::new().with("ticker", "AAPL").with("date", "2025-09-01").with("price", "210"),
//! ].into_iter().collect();
//! let holdings: Table = vec![
//!     Row::new().with("ticker", "AAPL").with("quantity", "10"),
//! ].into_iter().collect();
//!
//! let state = PortfolioState::builder()
//!     .securities(securities)
//!     .prices(prices)
//!     .holdings(holdings)
//!     .build();
//!
//! let report = state.report();
//! assert_eq!(report.total_market_value, 2100.0);
//! assert_eq!(report.by_country.get("USA"), Some(2100.0));
//! ```
//!
//! ## Module Overview
//!
//! - [`numeric`] - Lenient numeric coercion of text cells
//! - [`prices`] - Latest price index
//! - [`enrichment`] - Holdings enrichment against security data and prices
//! - [`bucketing`] - Country and sector look-through breakdowns
//! - [`portfolio`] - State snapshots and reports
//! - [`types`] - Tables, typed rows, classification enums

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bucketing;
pub mod enrichment;
pub mod error;
pub mod numeric;
pub mod portfolio;
pub mod prices;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{
    AllocationRow, Dimension, EnrichedHolding, HoldingInput, PriceQuote, Row, SecurityRecord,
    Table, TableKind, UNKNOWN,
};

pub use bucketing::{
    look_through, look_through_by_country, look_through_by_sector, AllocationIndex, Breakdown,
    BreakdownEntry,
};
pub use enrichment::{enrich_holding, enrich_holdings, SecurityIndex};
pub use numeric::{coerce_number, coerce_str};
pub use portfolio::{PortfolioReport, PortfolioState, PortfolioStateBuilder};
pub use prices::{LatestPrice, LatestPriceIndex};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lookthrough_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};

    pub use crate::types::{
        AllocationRow, Dimension, EnrichedHolding, HoldingInput, PriceQuote, Row, SecurityRecord,
        Table, TableKind, UNKNOWN,
    };

    pub use crate::bucketing::{
        look_through, look_through_by_country, look_through_by_sector, AllocationIndex,
        Breakdown, BreakdownEntry,
    };
    pub use crate::enrichment::{enrich_holdings, SecurityIndex};
    pub use crate::numeric::coerce_number;
    pub use crate::portfolio::{PortfolioReport, PortfolioState};
    pub use crate::prices::LatestPriceIndex;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        let err = PortfolioError::unknown_dimension("region");
        assert!(err.to_string().contains("region"));
    }
}
