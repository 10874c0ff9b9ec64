//! CLI command implementations.

pub mod breakdown;
pub mod holdings;
pub mod prices;
pub mod report;
pub mod samples;

pub use breakdown::BreakdownArgs;
pub use samples::SamplesArgs;

use tracing::{debug, warn};

use lookthrough_ext_file::{load_portfolio, sample_state, LoadOptions, TablePaths};
use lookthrough_portfolio::{PortfolioState, TableKind};

use crate::cli::{Cli, OutputFormat, TableArgs};
use crate::config::ReportConfig;
use crate::error::{CliError, CliResult};
use crate::output::Presentation;

/// Settings resolved from command-line flags and the configuration file.
///
/// Flags win over the file; the file wins over defaults.
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub samples: bool,
    pub tables: TablePaths,
    pub options: LoadOptions,
    pub presentation: Presentation,
}

impl Context {
    /// Merges flags over the configuration file named by `--config`.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let config = match &cli.config {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };

        let tables = flag_paths(&cli.tables).or(&config.tables);
        let delimiter = cli.tables.delimiter.unwrap_or(config.delimiter);
        let options = LoadOptions::new().with_delimiter(delimiter)?;

        let display = &cli.display;
        let presentation = Presentation {
            currency: display.currency.clone().unwrap_or(config.currency),
            locale: display.locale.unwrap_or(config.locale),
            sort: display.sort.unwrap_or(config.sort),
        };

        if cli.tables.samples && !tables.is_empty() {
            warn!("--samples given; ignoring table files");
        }
        debug!(?tables, ?presentation, "resolved settings");

        Ok(Self {
            format: cli.format,
            quiet: cli.quiet,
            samples: cli.tables.samples,
            tables,
            options,
            presentation,
        })
    }

    /// Loads a fresh portfolio snapshot from the resolved source.
    pub fn load_state(&self) -> CliResult<PortfolioState> {
        if self.samples {
            return Ok(sample_state()?);
        }
        if self.tables.is_empty() {
            return Err(CliError::NoInput);
        }
        Ok(load_portfolio(&self.tables, &self.options)?)
    }
}

/// Explicit file flags, then `--dir` for tables not named explicitly.
fn flag_paths(args: &TableArgs) -> TablePaths {
    let mut paths = TablePaths::new();
    let explicit = [
        (TableKind::Securities, &args.securities),
        (TableKind::Prices, &args.prices),
        (TableKind::Holdings, &args.holdings),
        (TableKind::CountryAllocations, &args.country_allocations),
        (TableKind::SectorAllocations, &args.sector_allocations),
    ];
    for (kind, path) in explicit {
        if let Some(path) = path {
            paths.set(kind, path);
        }
    }

    match &args.dir {
        Some(dir) => paths.or(&TablePaths::from_dir(dir)),
        None => paths,
    }
}
