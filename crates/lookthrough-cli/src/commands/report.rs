//! Report command implementation.
//!
//! Prints enriched holdings, the total market value, and both look-through
//! breakdowns.

use anyhow::Result;

use lookthrough_portfolio::Dimension;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_breakdown, print_csv, print_header, print_holdings, print_json};

/// Execute the report command.
pub fn execute(ctx: &Context) -> Result<()> {
    let report = ctx.load_state()?.report();
    let display = &ctx.presentation;

    match ctx.format {
        OutputFormat::Table => {
            print_header("Holdings");
            print_holdings(&report.holdings, report.total_market_value, display);

            for dimension in Dimension::ALL {
                print_header(&format!("By {dimension}"));
                print_breakdown(report.breakdown(dimension), display);
            }
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_csv(&report.holdings)?,
    }

    Ok(())
}
