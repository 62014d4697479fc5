//! # phantomyear CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use phantom_cli::config::{CliConfig, OutputFormat};
use phantom_cli::demo::{run_demo, DemoArgs};
use phantom_cli::find::{run_find, FindArgs};
use phantom_cli::info::{run_info, InfoArgs};
use phantom_cli::list::{run_list, ListArgs};

/// Phantom Year Calculator
///
/// Finds the year in each century whose day of the year equals the last
/// two digits of the year itself.
#[derive(Parser, Debug)]
#[command(name = "phantomyear", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the configuration file and PHANTOM_FORMAT.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the phantom year of each configured century (default).
    Demo(DemoArgs),

    /// Find the phantom year of one or more centuries.
    Find(FindArgs),

    /// Describe a single year: day number, date, and leap-year status.
    Info(InfoArgs),

    /// List phantom years for every century in a range.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("phantomyear v{} starting", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let mut config =
        CliConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    tracing::debug!(?config, "resolved configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command.unwrap_or_else(|| Commands::Demo(DemoArgs::default())) {
        Commands::Demo(args) => run_demo(&args, &config, &mut out),
        Commands::Find(args) => run_find(&args, &config, &mut out),
        Commands::Info(args) => run_info(&args, &config, &mut out),
        Commands::List(args) => run_list(&args, &config, &mut out),
    }?;

    out.flush().context("failed to flush stdout")?;
    Ok(code)
}
