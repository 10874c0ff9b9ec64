//! Breakdown command implementation.
//!
//! Shows one look-through dimension with each category's share of the
//! breakdown total. With partial ETF weights that total can be below the
//! portfolio's market value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lookthrough_portfolio::Dimension;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_breakdown, print_csv, print_header, print_json, share_rows, ShareRow};

/// Arguments for the breakdown command.
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Dimension to classify by: country or sector
    #[arg(short, long, default_value = "country")]
    pub by: Dimension,
}

#[derive(Serialize)]
struct BreakdownOutput {
    dimension: Dimension,
    total: f64,
    entries: Vec<ShareRow>,
}

/// Execute the breakdown command.
pub fn execute(args: BreakdownArgs, ctx: &Context) -> Result<()> {
    let breakdown = ctx.load_state()?.breakdown(args.by);
    let display = &ctx.presentation;

    match ctx.format {
        OutputFormat::Table => {
            print_header(&format!("By {}", args.by));
            print_breakdown(&breakdown, display);
            println!("Total: {}", display.money(breakdown.total()));
        }
        OutputFormat::Json => print_json(&BreakdownOutput {
            dimension: args.by,
            total: breakdown.total(),
            entries: share_rows(&breakdown, display),
        })?,
        OutputFormat::Csv => print_csv(&share_rows(&breakdown, display))?,
    }

    Ok(())
}
