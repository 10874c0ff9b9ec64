//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::{BreakdownArgs, SamplesArgs};
use crate::output::{Locale, SortOrder};

/// Lookthrough - Portfolio holdings enrichment and ETF look-through breakdowns
#[derive(Parser)]
#[command(name = "lookthrough")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "LOOKTHROUGH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub tables: TableArgs,

    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Holdings, total market value, and both look-through breakdowns
    Report,

    /// Enriched holdings and total market value
    Holdings,

    /// One look-through breakdown with category shares
    Breakdown(BreakdownArgs),

    /// Latest price per ticker
    Prices,

    /// Write the built-in sample tables to a directory
    Samples(SamplesArgs),
}

/// Input table locations.
#[derive(Args, Debug, Default, Clone)]
pub struct TableArgs {
    /// Securities table (ticker, type, country, sector)
    #[arg(long, global = true, value_name = "FILE")]
    pub securities: Option<PathBuf>,

    /// Price history table (ticker, date, price)
    #[arg(long, global = true, value_name = "FILE")]
    pub prices: Option<PathBuf>,

    /// Holdings table (ticker, quantity|units|qty, market_value, last_price)
    #[arg(long, global = true, value_name = "FILE")]
    pub holdings: Option<PathBuf>,

    /// ETF country allocations (ticker, country, weight)
    #[arg(long, global = true, value_name = "FILE")]
    pub country_allocations: Option<PathBuf>,

    /// ETF sector allocations (ticker, sector, weight)
    #[arg(long, global = true, value_name = "FILE")]
    pub sector_allocations: Option<PathBuf>,

    /// Directory containing <table>.csv files
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Field delimiter
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    /// Use the built-in sample data instead of files
    #[arg(long, global = true)]
    pub samples: bool,
}

/// Presentation options.
#[derive(Args, Debug, Default, Clone)]
pub struct DisplayArgs {
    /// Currency code for market values
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Number formatting style
    #[arg(long, value_enum, global = true)]
    pub locale: Option<Locale>,

    /// Breakdown category order
    #[arg(long, value_enum, global = true)]
    pub sort: Option<SortOrder>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
