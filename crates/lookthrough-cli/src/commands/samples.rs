//! Samples command implementation.
//!
//! Writes the built-in sample tables so they can be edited and reloaded
//! with `--dir`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use lookthrough_ext_file::write_samples;
use lookthrough_portfolio::TableKind;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_csv, print_json, print_success};

/// Arguments for the samples command.
#[derive(Args, Debug)]
pub struct SamplesArgs {
    /// Output directory (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub out: PathBuf,
}

#[derive(Serialize)]
struct WrittenFile {
    table: TableKind,
    path: PathBuf,
}

/// Execute the samples command.
pub fn execute(args: SamplesArgs, ctx: &Context) -> Result<()> {
    let paths = write_samples(&args.out)?;
    let written: Vec<WrittenFile> = TableKind::ALL
        .iter()
        .filter_map(|&kind| {
            paths.get(kind).map(|p| WrittenFile {
                table: kind,
                path: p.to_path_buf(),
            })
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                for file in &written {
                    print_success(&format!("{} -> {}", file.table, file.path.display()));
                }
            }
        }
        OutputFormat::Json => print_json(&written)?,
        OutputFormat::Csv => print_csv(&written)?,
    }

    Ok(())
}
