//! Holdings command implementation.

use anyhow::Result;
use serde::Serialize;

use lookthrough_portfolio::EnrichedHolding;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_csv, print_holdings, print_json};

#[derive(Serialize)]
struct HoldingsOutput<'a> {
    holdings: &'a [EnrichedHolding],
    total_market_value: f64,
}

/// Execute the holdings command.
pub fn execute(ctx: &Context) -> Result<()> {
    let holdings = ctx.load_state()?.enriched_holdings();
    let total = holdings.iter().fold(0.0, |acc, h| acc + h.market_value);

    match ctx.format {
        OutputFormat::Table => print_holdings(&holdings, total, &ctx.presentation),
        OutputFormat::Json => print_json(&HoldingsOutput {
            holdings: &holdings,
            total_market_value: total,
        })?,
        OutputFormat::Csv => print_csv(&holdings)?,
    }

    Ok(())
}
