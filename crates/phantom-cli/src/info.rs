//! # Info Subcommand
//!
//! Describes one year as a phantom year.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use phantom_core::{phantom_year_info, target_day, Year};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{write_info, write_json};

/// Arguments for the `phantomyear info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// The year to inspect.
    #[arg(value_parser = phantom_core::parse_year, allow_negative_numbers = true)]
    pub year: Year,
}

/// Execute the info subcommand. Exits 1 when the year is not applicable.
pub fn run_info(args: &InfoArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let info = phantom_year_info(args.year);

    match (config.format, &info) {
        (OutputFormat::Json, _) => write_json(out, &info)?,
        (OutputFormat::Text, Some(info)) => write_info(out, info)?,
        (OutputFormat::Text, None) => {
            let day = target_day(args.year);
            if day == 0 {
                writeln!(out, "Year {}: not applicable (day of year would be 0)", args.year)?;
            } else {
                writeln!(
                    out,
                    "Year {}: not applicable (outside the supported calendar range)",
                    args.year
                )?;
            }
        }
    }

    Ok(if info.is_some() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(year: Year, format: OutputFormat) -> (u8, String) {
        let config = CliConfig {
            format,
            ..CliConfig::default()
        };
        let mut buf = Vec::new();
        let code = run_info(&InfoArgs { year }, &config, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn info_1965_text() {
        let (code, text) = run(1965, OutputFormat::Text);
        assert_eq!(code, 0);
        assert!(text.contains("  Date: March 06, 1965\n"));
        assert!(text.contains("  Leap Year: no\n"));
    }

    #[test]
    fn info_century_boundary_not_applicable() {
        let (code, text) = run(2000, OutputFormat::Text);
        assert_eq!(code, 1);
        assert!(text.contains("day of year would be 0"));
    }

    #[test]
    fn info_out_of_range() {
        let (code, text) = run(i32::MAX, OutputFormat::Text);
        assert_eq!(code, 1);
        assert!(text.contains("outside the supported calendar range"));
    }

    #[test]
    fn info_json_null_when_absent() {
        let (code, text) = run(1900, OutputFormat::Json);
        assert_eq!(code, 1);
        assert_eq!(text.trim(), "null");
    }

    #[test]
    fn info_json_fields() {
        let (_, text) = run(1996, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["formatted"], "April 05, 1996");
        assert_eq!(value["is_leap_year"], true);
    }
}
