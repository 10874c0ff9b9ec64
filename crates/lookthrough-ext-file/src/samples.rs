//! Built-in demonstration data.
//!
//! One ETF (`ETF1`) with country and sector look-through weights, plus three
//! directly held stocks.

use std::fs;
use std::path::Path;

use tracing::info;

use lookthrough_portfolio::{PortfolioState, TableKind};

use crate::error::{LoadError, LoadResult};
use crate::paths::TablePaths;
use crate::reader::{parse_kind, LoadOptions};

/// Sample securities table.
pub const SAMPLE_SECURITIES: &str = "\
ticker,type,country,sector
AAPL,Stock,USA,Technology
MSFT,Stock,USA,Technology
NOKIA,Stock,Finland,Technology
ETF1,ETF,USA,
";

/// Sample price table.
pub const SAMPLE_PRICES: &str = "\
ticker,date,price
AAPL,2025-09-01,210
MSFT,2025-09-01,420
NOKIA,2025-09-01,3.5
ETF1,2025-09-01,100
";

/// Sample holdings table.
pub const SAMPLE_HOLDINGS: &str = "\
ticker,quantity
AAPL,10
MSFT,5
ETF1,20
";

/// Sample ETF country allocations.
pub const SAMPLE_COUNTRY_ALLOCATIONS: &str = "\
ticker,country,weight
ETF1,USA,60
ETF1,Finland,25
ETF1,Germany,15
";

/// Sample ETF sector allocations.
pub const SAMPLE_SECTOR_ALLOCATIONS: &str = "\
ticker,sector,weight
ETF1,Technology,50
ETF1,Health Care,20
ETF1,Industrials,30
";

/// Returns the sample text for a table.
#[must_use]
pub fn sample_text(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Securities => SAMPLE_SECURITIES,
        TableKind::Prices => SAMPLE_PRICES,
        TableKind::Holdings => SAMPLE_HOLDINGS,
        TableKind::CountryAllocations => SAMPLE_COUNTRY_ALLOCATIONS,
        TableKind::SectorAllocations => SAMPLE_SECTOR_ALLOCATIONS,
    }
}

/// Parses the sample tables into a portfolio snapshot.
pub fn sample_state() -> LoadResult<PortfolioState> {
    let options = LoadOptions::default();
    let mut state = PortfolioState::new();
    for kind in TableKind::ALL {
        let origin = format!("sample {kind}");
        let table = parse_kind(kind, sample_text(kind), &options, &origin)?;
        state = state.with_table(kind, table);
    }
    Ok(state)
}

/// Writes the sample tables as `<table>.csv` files into `dir`.
///
/// The directory is created if missing; existing files are overwritten.
pub fn write_samples(dir: &Path) -> LoadResult<TablePaths> {
    fs::create_dir_all(dir).map_err(|e| LoadError::io(dir, e))?;

    let mut paths = TablePaths::new();
    for kind in TableKind::ALL {
        let path = dir.join(format!("{}.csv", kind.name()));
        fs::write(&path, sample_text(kind)).map_err(|e| LoadError::io(&path, e))?;
        paths.set(kind, path);
    }

    info!(dir = %dir.display(), "wrote sample tables");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookthrough_portfolio::Dimension;

    #[test]
    fn test_sample_report() {
        let report = sample_state().unwrap().report();

        assert_eq!(report.holdings.len(), 3);
        assert_eq!(report.total_market_value, 6200.0);

        let country = &report.by_country;
        assert_eq!(country.get("USA"), Some(5400.0));
        assert_eq!(country.get("Finland"), Some(500.0));
        assert_eq!(country.get("Germany"), Some(300.0));

        let sector = report.breakdown(Dimension::Sector);
        assert_eq!(sector.get("Technology"), Some(5200.0));
        assert_eq!(sector.get("Health Care"), Some(400.0));
        assert_eq!(sector.get("Industrials"), Some(600.0));
    }

    #[test]
    fn test_nokia_priced_but_not_held() {
        let state = sample_state().unwrap();
        assert_eq!(state.latest_prices().price("NOKIA"), Some(3.5));
        assert!(state
            .enriched_holdings()
            .iter()
            .all(|h| h.ticker != "NOKIA"));
    }
}
