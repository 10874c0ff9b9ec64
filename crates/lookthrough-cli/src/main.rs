//! Lookthrough CLI - Portfolio holdings enrichment and ETF look-through.
//!
//! # Usage
//!
//! ```bash
//! # Full report on the built-in sample portfolio
//! lookthrough report --samples
//!
//! # Report from files
//! lookthrough report --securities sec.csv --prices px.csv --holdings pos.csv \
//!     --country-allocations cty.csv --sector-allocations sec_alloc.csv
//!
//! # Sector breakdown as CSV from a directory of <table>.csv files
//! lookthrough breakdown --by sector --dir data --format csv
//!
//! # Write the sample tables for editing
//! lookthrough samples --out data
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let ctx = Context::resolve(&cli)?;

    match cli.command {
        Commands::Report => commands::report::execute(&ctx)?,
        Commands::Holdings => commands::holdings::execute(&ctx)?,
        Commands::Breakdown(args) => commands::breakdown::execute(args, &ctx)?,
        Commands::Prices => commands::prices::execute(&ctx)?,
        Commands::Samples(args) => commands::samples::execute(args, &ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so that report output on stdout stays machine-readable.
fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn,lookthrough=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
