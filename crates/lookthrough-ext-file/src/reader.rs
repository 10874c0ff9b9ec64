//! Delimited-text table reader.
//!
//! The header row names the columns. Every cell is kept as raw text; numeric
//! interpretation happens later in `lookthrough-portfolio`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use lookthrough_portfolio::{Row, Table, TableKind};

use crate::error::{LoadError, LoadResult};

// =============================================================================
// LOAD OPTIONS
// =============================================================================

/// Options for reading delimited tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,

    /// Trim whitespace around header names.
    pub trim_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim_headers: true,
        }
    }
}

impl LoadOptions {
    /// Creates options with default settings (comma, trimmed headers).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter. Only single-byte ASCII characters are accepted.
    pub fn with_delimiter(mut self, delimiter: char) -> LoadResult<Self> {
        if !delimiter.is_ascii() {
            return Err(LoadError::InvalidDelimiter(delimiter));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Sets whether header names are trimmed.
    #[must_use]
    pub fn with_trim_headers(mut self, trim: bool) -> Self {
        self.trim_headers = trim;
        self
    }
}

// =============================================================================
// READING
// =============================================================================

/// Reads a table from any reader.
///
/// Empty lines are skipped. A line holding only separators or whitespace is
/// still a row. Rows shorter than the header lack the
/// trailing columns; cells beyond the header are dropped.
pub fn read_table<R: Read>(reader: R, options: &LoadOptions, origin: &str) -> LoadResult<Table> {
    read_with_headers(reader, options, origin).map(|(_, table)| table)
}

/// Parses a table from in-memory text.
pub fn parse_table(text: &str, options: &LoadOptions, origin: &str) -> LoadResult<Table> {
    read_table(text.as_bytes(), options, origin)
}

/// Loads one of the five input tables from a file.
///
/// Missing expected columns are logged as warnings, not rejected: absent
/// cells simply coerce to defaults downstream.
pub fn load_table(kind: TableKind, path: &Path, options: &LoadOptions) -> LoadResult<Table> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let origin = path.display().to_string();
    let (headers, table) = read_with_headers(file, options, &origin)?;

    check_columns(kind, &headers, &origin);
    debug!(table = %kind, rows = table.len(), path = %origin, "loaded table");

    Ok(table)
}

/// Parses one of the five input tables from in-memory text.
pub fn parse_kind(
    kind: TableKind,
    text: &str,
    options: &LoadOptions,
    origin: &str,
) -> LoadResult<Table> {
    let (headers, table) = read_with_headers(text.as_bytes(), options, origin)?;
    check_columns(kind, &headers, origin);
    Ok(table)
}

fn read_with_headers<R: Read>(
    reader: R,
    options: &LoadOptions,
    origin: &str,
) -> LoadResult<(Vec<String>, Table)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::parse(origin, e))?
        .iter()
        .map(|h| if options.trim_headers { h.trim() } else { h }.to_string())
        .collect();

    let mut table = Table::new();
    for result in reader.records() {
        let record = result.map_err(|e| LoadError::parse(origin, e))?;
        // csv already drops bare empty lines; this catches a lone `""`.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, cell)| (h.as_str(), cell))
            .collect();
        table.push(row);
    }

    Ok((headers, table))
}

fn check_columns(kind: TableKind, headers: &[String], origin: &str) {
    for column in kind.expected_columns() {
        if !headers.iter().any(|h| h == column) {
            warn!(table = %kind, column, origin, "expected column missing");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let table = parse_table(
            "ticker,date,price\nAAPL,2025-09-01,210\nMSFT,2025-09-01,420\n",
            &LoadOptions::default(),
            "inline",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].get("price"), Some("420"));
    }

    #[test]
    fn test_only_empty_lines_skipped() {
        let table = parse_table(
            "ticker,quantity\n\nAAPL,10\n\"\"\n\n,\n  \nMSFT,5\n",
            &LoadOptions::default(),
            "inline",
        )
        .unwrap();
        let tickers: Vec<_> = table.iter().map(|r| r.trimmed("ticker")).collect();
        assert_eq!(tickers, vec!["AAPL", "", "", "MSFT"]);

        // Separator-only row: both columns present and empty.
        let separators = &table.rows()[1];
        assert_eq!(separators.get("ticker"), Some(""));
        assert_eq!(separators.get("quantity"), Some(""));

        // Whitespace-only row: a single raw cell, no quantity column.
        let spaces = &table.rows()[2];
        assert_eq!(spaces.get("ticker"), Some("  "));
        assert!(!spaces.contains("quantity"));
    }

    #[test]
    fn test_short_and_long_rows() {
        let table = parse_table(
            "ticker,type,country,sector\nETF1,ETF\nAAPL,Stock,USA,Technology,extra\n",
            &LoadOptions::default(),
            "inline",
        )
        .unwrap();
        let etf = &table.rows()[0];
        assert_eq!(etf.get("type"), Some("ETF"));
        assert!(!etf.contains("country"));
        assert_eq!(table.rows()[1].len(), 4);
    }

    #[test]
    fn test_empty_cell_is_present() {
        let table = parse_table(
            "ticker,quantity,units\nAAPL,,7\n",
            &LoadOptions::default(),
            "inline",
        )
        .unwrap();
        let row = &table.rows()[0];
        assert!(row.contains("quantity"));
        assert_eq!(row.first_present(&["quantity", "units"]), Some(""));
    }

    #[test]
    fn test_headers_trimmed_cells_raw() {
        let table = parse_table(
            " ticker , price \n AAPL , 3,5\n",
            &LoadOptions::new().with_delimiter(';').unwrap(),
            "inline",
        );
        // With ';' the whole line is one column.
        let table = table.unwrap();
        assert!(table.rows()[0].contains("ticker , price"));

        let table = parse_table(
            " ticker ; price \n AAPL ; 3,5\n",
            &LoadOptions::new().with_delimiter(';').unwrap(),
            "inline",
        )
        .unwrap();
        let row = &table.rows()[0];
        assert_eq!(row.get("ticker"), Some(" AAPL "));
        assert_eq!(row.get("price"), Some(" 3,5"));
    }

    #[test]
    fn test_untrimmed_headers() {
        let table = parse_table(
            " ticker,price\nAAPL,1\n",
            &LoadOptions::new().with_trim_headers(false),
            "inline",
        )
        .unwrap();
        assert!(table.rows()[0].contains(" ticker"));
        assert!(!table.rows()[0].contains("ticker"));
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse_table(
            "ticker,sector,weight\nETF1,\"Health Care, Services\",20\n",
            &LoadOptions::default(),
            "inline",
        )
        .unwrap();
        assert_eq!(table.rows()[0].get("sector"), Some("Health Care, Services"));
    }

    #[test]
    fn test_header_only_and_empty_input() {
        let options = LoadOptions::default();
        assert!(parse_table("ticker,price\n", &options, "inline").unwrap().is_empty());
        assert!(parse_table("", &options, "inline").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_delimiter() {
        assert!(matches!(
            LoadOptions::new().with_delimiter('§'),
            Err(LoadError::InvalidDelimiter('§'))
        ));
    }

    #[test]
    fn test_parse_kind_tolerates_missing_columns() {
        let table = parse_kind(
            TableKind::Prices,
            "ticker,price\nAAPL,210\n",
            &LoadOptions::default(),
            "inline",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.rows()[0].contains("date"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table(
            TableKind::Holdings,
            Path::new("/definitely/not/here.csv"),
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
