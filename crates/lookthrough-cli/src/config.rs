//! Report configuration file.
//!
//! ```toml
//! delimiter = ";"
//! currency = "EUR"
//! locale = "fi"
//! sort = "value"
//!
//! [tables]
//! securities = "securities.csv"
//! prices = "prices.csv"
//! holdings = "holdings.csv"
//! country_allocations = "country_allocations.csv"
//! sector_allocations = "sector_allocations.csv"
//! ```
//!
//! Relative table paths are resolved against the configuration file's
//! directory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lookthrough_ext_file::TablePaths;

use crate::error::{CliError, CliResult};
use crate::output::{Locale, SortOrder};

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Input table locations
    #[serde(default)]
    pub tables: TablePaths,

    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Currency code for market values
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Number formatting style
    #[serde(default)]
    pub locale: Locale,

    /// Breakdown category order
    #[serde(default)]
    pub sort: SortOrder,
}

fn default_delimiter() -> char {
    ','
}

fn default_currency() -> String {
    "EUR".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tables: TablePaths::default(),
            delimiter: default_delimiter(),
            currency: default_currency(),
            locale: Locale::default(),
            sort: SortOrder::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::config(path, e))?;
        let config: Self = toml::from_str(&content).map_err(|e| CliError::config(path, e))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self {
            tables: config.tables.relative_to(base),
            ..config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookthrough_portfolio::TableKind;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.locale, Locale::Fi);
        assert_eq!(config.sort, SortOrder::Input);
    }

    #[test]
    fn test_parse_full_document() {
        let config: ReportConfig = toml::from_str(
            r#"
            delimiter = ";"
            currency = "USD"
            locale = "en"
            sort = "value"

            [tables]
            prices = "px.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.delimiter, ';');
        assert_eq!(config.currency, "USD");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.sort, SortOrder::Value);
        assert_eq!(
            config.tables.get(TableKind::Prices),
            Some(Path::new("px.csv"))
        );
        assert_eq!(config.tables.get(TableKind::Holdings), None);
    }

    #[test]
    fn test_rejects_unknown_locale() {
        assert!(toml::from_str::<ReportConfig>(r#"locale = "de""#).is_err());
    }
}
