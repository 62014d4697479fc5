//! # List Subcommand
//!
//! Phantom years for every century start in `[start, end)`, stepping by 100.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use phantom_core::{list_phantom_years, Year};

use crate::config::{CliConfig, OutputFormat};
use crate::output::write_json;

/// Arguments for the `phantomyear list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// First century start (inclusive).
    #[arg(long, value_parser = phantom_core::parse_century, allow_negative_numbers = true)]
    pub start: Year,

    /// Last century bound (exclusive).
    #[arg(long, value_parser = phantom_core::parse_century, allow_negative_numbers = true)]
    pub end: Year,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    if args.start >= args.end {
        tracing::warn!(start = args.start, end = args.end, "empty century range");
    }
    let found = list_phantom_years(args.start, args.end);

    match config.format {
        OutputFormat::Json => write_json(out, &found)?,
        OutputFormat::Text if found.is_empty() => {
            writeln!(out, "No phantom years in [{}, {})", args.start, args.end)?;
        }
        OutputFormat::Text => {
            for entry in &found {
                writeln!(out, "{entry}")?;
            }
        }
    }

    Ok(0)
}
