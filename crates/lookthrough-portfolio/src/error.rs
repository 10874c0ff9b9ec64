//! Error types for portfolio analytics.
//!
//! The enrichment and look-through functions are total and never fail.
//! Errors only arise when parsing the crate's public enums from text.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur when interpreting portfolio inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// Unrecognized table name.
    #[error("Unknown table '{name}': expected one of securities, prices, holdings, country_allocations, sector_allocations")]
    UnknownTable {
        /// The name that failed to parse.
        name: String,
    },

    /// Unrecognized look-through dimension.
    #[error("Unknown dimension '{name}': expected country or sector")]
    UnknownDimension {
        /// The name that failed to parse.
        name: String,
    },
}

impl PortfolioError {
    /// Create an unknown table error.
    #[must_use]
    pub fn unknown_table(name: impl Into<String>) -> Self {
        Self::UnknownTable { name: name.into() }
    }

    /// Create an unknown dimension error.
    #[must_use]
    pub fn unknown_dimension(name: impl Into<String>) -> Self {
        Self::UnknownDimension { name: name.into() }
    }
}
