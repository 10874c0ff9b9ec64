//! Classification dimensions and input table kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;

/// Category used whenever a classification is missing or blank.
pub const UNKNOWN: &str = "Unknown";

/// Security type that triggers look-through decomposition (case-insensitive).
pub const ETF_TYPE: &str = "ETF";

/// Returns the trimmed text, or [`UNKNOWN`] if it is blank.
#[must_use]
pub fn or_unknown(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        UNKNOWN
    } else {
        trimmed
    }
}

// =============================================================================
// DIMENSION
// =============================================================================

/// A classification axis for look-through breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Country of the issuer (or of the fund's underlying exposure).
    Country,
    /// Economic sector.
    Sector,
}

impl Dimension {
    /// All dimensions, in report order.
    pub const ALL: [Dimension; 2] = [Dimension::Country, Dimension::Sector];

    /// The column carrying this dimension in securities and allocation tables.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Country => "country",
            Dimension::Sector => "sector",
        }
    }

    /// The allocation table that decomposes ETFs along this dimension.
    #[must_use]
    pub fn allocation_table(self) -> TableKind {
        match self {
            Dimension::Country => TableKind::CountryAllocations,
            Dimension::Sector => TableKind::SectorAllocations,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Dimension {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "country" => Ok(Dimension::Country),
            "sector" => Ok(Dimension::Sector),
            _ => Err(PortfolioError::unknown_dimension(s)),
        }
    }
}

// =============================================================================
// TABLE KIND
// =============================================================================

/// The five independent input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Security reference data.
    Securities,
    /// Dated price quotes.
    Prices,
    /// Portfolio holdings.
    Holdings,
    /// ETF country look-through weights.
    CountryAllocations,
    /// ETF sector look-through weights.
    SectorAllocations,
}

impl TableKind {
    /// All table kinds, in load order.
    pub const ALL: [TableKind; 5] = [
        TableKind::Securities,
        TableKind::Prices,
        TableKind::Holdings,
        TableKind::CountryAllocations,
        TableKind::SectorAllocations,
    ];

    /// Canonical name, also used as the file stem for sample data.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TableKind::Securities => "securities",
            TableKind::Prices => "prices",
            TableKind::Holdings => "holdings",
            TableKind::CountryAllocations => "country_allocations",
            TableKind::SectorAllocations => "sector_allocations",
        }
    }

    /// Columns each row is expected to carry.
    ///
    /// Holdings accept `units` or `qty` in place of `quantity`; only the
    /// ticker is listed as strictly expected there.
    #[must_use]
    pub fn expected_columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Securities => &["ticker", "type", "country", "sector"],
            TableKind::Prices => &["ticker", "date", "price"],
            TableKind::Holdings => &["ticker"],
            TableKind::CountryAllocations => &["ticker", "country", "weight"],
            TableKind::SectorAllocations => &["ticker", "sector", "weight"],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| PortfolioError::unknown_table(s))
    }
}
