//! Typed views over input rows.
//!
//! Decoding never fails: absent cells become empty strings or zero, exactly
//! as [`coerce_number`](crate::numeric::coerce_number) prescribes.

use serde::{Deserialize, Serialize};

use super::classification::{Dimension, ETF_TYPE};
use super::table::Row;
use crate::numeric::coerce_number;

/// Columns read for a holding's quantity, in priority order.
pub const QUANTITY_COLUMNS: [&str; 3] = ["quantity", "units", "qty"];

// =============================================================================
// SECURITY RECORD
// =============================================================================

/// Reference data for one security.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityRecord {
    /// Ticker (trimmed).
    pub ticker: String,
    /// Security type, e.g. "Stock" or "ETF" (trimmed, may be empty).
    #[serde(rename = "type")]
    pub security_type: String,
    /// Country (trimmed, may be empty).
    pub country: String,
    /// Sector (trimmed, may be empty).
    pub sector: String,
}

impl SecurityRecord {
    /// Creates a security record.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        security_type: impl Into<String>,
        country: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            security_type: security_type.into(),
            country: country.into(),
            sector: sector.into(),
        }
    }

    /// Decodes a securities table row.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self::new(
            row.trimmed("ticker"),
            row.trimmed("type"),
            row.trimmed("country"),
            row.trimmed("sector"),
        )
    }

    /// Returns the classification for a dimension.
    #[must_use]
    pub fn classification(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Country => &self.country,
            Dimension::Sector => &self.sector,
        }
    }

    /// Returns true if the security is an ETF.
    #[must_use]
    pub fn is_etf(&self) -> bool {
        self.security_type.eq_ignore_ascii_case(ETF_TYPE)
    }
}

// =============================================================================
// PRICE QUOTE
// =============================================================================

/// A dated price for a ticker.
///
/// Dates are compared as plain strings, so they must be zero-padded ISO dates
/// (`2025-09-01`) for "latest" to mean the most recent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Ticker (trimmed).
    pub ticker: String,
    /// Quote date (trimmed).
    pub date: String,
    /// Price, coerced.
    pub price: f64,
}

impl PriceQuote {
    /// Creates a price quote.
    #[must_use]
    pub fn new(ticker: impl Into<String>, date: impl Into<String>, price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            date: date.into(),
            price,
        }
    }

    /// Decodes a prices table row.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self::new(
            row.trimmed("ticker"),
            row.trimmed("date"),
            coerce_number(row.get("price")),
        )
    }
}

// =============================================================================
// HOLDING INPUT
// =============================================================================

/// One position as supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingInput {
    /// Ticker (trimmed).
    pub ticker: String,
    /// Quantity from the first present of `quantity`, `units`, `qty`.
    pub quantity: f64,
    /// Explicit market value; used only when greater than zero.
    pub market_value: f64,
    /// Fallback price when the price table has no quote for the ticker.
    pub last_price: f64,
}

impl HoldingInput {
    /// Creates a holding with only a ticker and quantity.
    #[must_use]
    pub fn new(ticker: impl Into<String>, quantity: f64) -> Self {
        Self {
            ticker: ticker.into(),
            quantity,
            ..Self::default()
        }
    }

    /// Sets an explicit market value.
    #[must_use]
    pub fn with_market_value(mut self, market_value: f64) -> Self {
        self.market_value = market_value;
        self
    }

    /// Sets a fallback last price.
    #[must_use]
    pub fn with_last_price(mut self, last_price: f64) -> Self {
        self.last_price = last_price;
        self
    }

    /// Decodes a holdings table row.
    ///
    /// The first *present* quantity column wins even when its cell is blank,
    /// so a blank `quantity` shadows a filled `units`.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        Self {
            ticker: row.trimmed("ticker").to_string(),
            quantity: coerce_number(row.first_present(&QUANTITY_COLUMNS)),
            market_value: coerce_number(row.get("market_value")),
            last_price: coerce_number(row.get("last_price")),
        }
    }
}

// =============================================================================
// ALLOCATION ROW
// =============================================================================

/// One ETF look-through weight along a dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// ETF ticker (trimmed).
    pub ticker: String,
    /// Underlying category (trimmed, may be empty).
    pub category: String,
    /// Weight in percent (0-100). Never normalized.
    pub weight: f64,
}

impl AllocationRow {
    /// Creates an allocation row.
    #[must_use]
    pub fn new(ticker: impl Into<String>, category: impl Into<String>, weight: f64) -> Self {
        Self {
            ticker: ticker.into(),
            category: category.into(),
            weight,
        }
    }

    /// Decodes an allocation table row; the category column is the dimension's.
    #[must_use]
    pub fn from_row(row: &Row, dimension: Dimension) -> Self {
        Self::new(
            row.trimmed("ticker"),
            row.trimmed(dimension.column()),
            coerce_number(row.get("weight")),
        )
    }

    /// Weight as a fraction (`weight / 100`).
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.weight / 100.0
    }
}
