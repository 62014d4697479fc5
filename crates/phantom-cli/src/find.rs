//! # Find Subcommand
//!
//! Scans each requested century for its phantom year.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use phantom_core::{find_phantom_year, Year};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{write_century_block, write_century_missing, write_json, CenturyReport};

/// Arguments for the `phantomyear find` subcommand.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Century starts, e.g. `1900` or `1900s`.
    #[arg(
        required = true,
        value_parser = phantom_core::parse_century,
        allow_negative_numbers = true
    )]
    pub centuries: Vec<Year>,
}

/// Execute the find subcommand. Exits 1 if any century has no phantom year.
pub fn run_find(args: &FindArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<CenturyReport> = args
        .centuries
        .iter()
        .map(|&century| CenturyReport::new(century, find_phantom_year(century)))
        .collect();

    match config.format {
        OutputFormat::Json => write_json(out, &reports)?,
        OutputFormat::Text => {
            for report in &reports {
                match &report.phantom_year {
                    Some(found) => write_century_block(out, report.century, found)?,
                    None => write_century_missing(out, report.century)?,
                }
            }
        }
    }

    let missing = reports.iter().filter(|r| r.phantom_year.is_none()).count();
    if missing > 0 {
        tracing::warn!(missing, "some centuries have no phantom year");
        return Ok(1);
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(centuries: Vec<Year>, format: OutputFormat) -> (u8, String) {
        let config = CliConfig {
            format,
            ..CliConfig::default()
        };
        let mut buf = Vec::new();
        let code = run_find(&FindArgs { centuries }, &config, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn find_single_century_text() {
        let (code, text) = run(vec![1900], OutputFormat::Text);
        assert_eq!(code, 0);
        assert!(text.starts_with("Century 1900s:\n  Phantom Year: 1901\n"), "{text}");
    }

    #[test]
    fn missing_century_reported_with_exit_1() {
        let (code, text) = run(vec![1900, i32::MIN], OutputFormat::Text);
        assert_eq!(code, 1);
        assert!(text.contains(&format!("Century {}s: no phantom year found", i32::MIN)));
    }

    #[test]
    fn find_json() {
        let (code, text) = run(vec![2000], OutputFormat::Json);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["century"], 2000);
        assert_eq!(value[0]["phantom_year"]["day"], 1);
        assert_eq!(value[0]["phantom_year"]["date"], "2001-01-01");
    }
}
