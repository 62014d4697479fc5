//! # Demo Subcommand
//!
//! The illustrative run: a banner, then the phantom year of each configured
//! century. Centuries without a match are left out of the text output.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use phantom_core::{find_phantom_year, Year};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{write_banner, write_century_block, write_json, CenturyReport};

/// Arguments for the `phantomyear demo` subcommand.
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Century starts to show instead of the configured list.
    #[arg(value_parser = phantom_core::parse_century, allow_negative_numbers = true)]
    pub centuries: Vec<Year>,
}

/// Execute the demo subcommand.
pub fn run_demo(args: &DemoArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let centuries = if args.centuries.is_empty() {
        &config.centuries
    } else {
        &args.centuries
    };
    tracing::debug!(?centuries, "running demo");

    let reports: Vec<CenturyReport> = centuries
        .iter()
        .map(|&century| CenturyReport::new(century, find_phantom_year(century)))
        .collect();

    match config.format {
        OutputFormat::Json => write_json(out, &reports)?,
        OutputFormat::Text => {
            write_banner(out)?;
            for report in &reports {
                if let Some(found) = &report.phantom_year {
                    write_century_block(out, report.century, found)?;
                }
            }
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: DemoArgs, config: CliConfig) -> (u8, String) {
        let mut buf = Vec::new();
        let code = run_demo(&args, &config, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn default_demo_prints_four_centuries() {
        let (code, text) = run(DemoArgs::default(), CliConfig::default());
        assert_eq!(code, 0);
        assert!(text.starts_with("Phantom Year Calculator\n"));
        for century in [1900, 2000, 2100, 2200] {
            assert!(text.contains(&format!("Century {century}s:\n")), "{text}");
        }
        assert!(text.contains("  Date: January 01, 1901\n"));
    }

    #[test]
    fn explicit_centuries_override_config() {
        let args = DemoArgs {
            centuries: vec![1600],
        };
        let (_, text) = run(args, CliConfig::default());
        assert!(text.contains("Century 1600s:"));
        assert!(!text.contains("Century 1900s:"));
    }

    #[test]
    fn unrepresentable_century_is_skipped_in_text() {
        let args = DemoArgs {
            centuries: vec![i32::MIN, 1900],
        };
        let (code, text) = run(args, CliConfig::default());
        assert_eq!(code, 0);
        assert_eq!(text.matches("Century ").count(), 1);
    }

    #[test]
    fn json_demo_lists_reports() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let (_, text) = run(DemoArgs::default(), config);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let reports = value.as_array().unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0]["century"], 1900);
        assert_eq!(reports[0]["phantom_year"]["year"], 1901);
    }
}
