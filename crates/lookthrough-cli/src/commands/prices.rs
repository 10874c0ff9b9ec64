//! Prices command implementation.

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_csv, print_json, print_table, PriceRow};

/// Execute the prices command.
pub fn execute(ctx: &Context) -> Result<()> {
    let index = ctx.load_state()?.latest_prices();
    let latest: Vec<_> = index.iter().cloned().collect();

    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<PriceRow> = latest
                .iter()
                .map(|p| PriceRow::new(p, &ctx.presentation))
                .collect();
            print_table(&rows, 2..3);
        }
        OutputFormat::Json => print_json(&latest)?,
        OutputFormat::Csv => print_csv(&latest)?,
    }

    Ok(())
}
