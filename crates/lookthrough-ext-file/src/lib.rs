//! # Lookthrough Ext File
//!
//! File-based table loading for the lookthrough portfolio engine.
//!
//! This crate turns delimited text into [`Table`](lookthrough_portfolio::Table)s
//! and snapshots:
//! - CSV reading with a configurable delimiter and lenient row shapes
//! - [`TablePaths`] mapping each input table to an optional file
//! - Built-in sample data, loadable in memory or written to disk
//!
//! ```rust,no_run
//! use std::path::Path;
//! use lookthrough_ext_file::{load_portfolio, LoadOptions, TablePaths};
//!
//! let paths = TablePaths::from_dir(Path::new("data"));
//! let state = load_portfolio(&paths, &LoadOptions::default())?;
//! println!("{}", state.report().total_market_value);
//! # Ok::<(), lookthrough_ext_file::LoadError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod paths;
mod reader;
mod samples;

pub use error::{LoadError, LoadResult};
pub use paths::TablePaths;
pub use reader::{load_table, parse_kind, parse_table, read_table, LoadOptions};
pub use samples::{
    sample_state, sample_text, write_samples, SAMPLE_COUNTRY_ALLOCATIONS, SAMPLE_HOLDINGS,
    SAMPLE_PRICES, SAMPLE_SECTOR_ALLOCATIONS, SAMPLE_SECURITIES,
};

use lookthrough_portfolio::PortfolioState;

/// Load a portfolio snapshot from files.
///
/// Tables without a path are empty. A path that cannot be read is an error.
pub fn load_portfolio(paths: &TablePaths, options: &LoadOptions) -> LoadResult<PortfolioState> {
    paths.load(options)
}
