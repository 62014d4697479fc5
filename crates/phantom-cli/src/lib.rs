//! # phantom-cli — Command-Line Front End
//!
//! Provides the `phantomyear` binary on top of `phantom-core`.
//!
//! ## Subcommands
//!
//! - `phantomyear demo` — Banner plus one block per configured century.
//!   Runs when no subcommand is given.
//! - `phantomyear find <CENTURY>...` — Phantom year of each century.
//! - `phantomyear info <YEAR>` — Describe one year.
//! - `phantomyear list --start <C> --end <C>` — Phantom years across centuries.
//!
//! ```bash
//! phantomyear find 1900s 2000s
//! phantomyear info 1965 --format json
//! phantomyear list --start 1900 --end 2200
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers; handlers are
//!   separated from rendering.
//! - Handlers write to a caller-supplied `Write` and return the exit code.
//! - No calendar logic here. Everything is delegated to `phantom-core`.

pub mod config;
pub mod demo;
pub mod find;
pub mod info;
pub mod list;
pub mod output;

pub use config::{CliConfig, ConfigError, OutputFormat};
