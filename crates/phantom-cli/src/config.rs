//! CLI configuration.
//!
//! Resolved in layers, later layers winning:
//!
//! 1. Built-in defaults (the demo centuries 1900 through 2200, text output).
//! 2. A YAML file passed with `--config`.
//! 3. Environment variables:
//!    - `PHANTOM_CENTURIES` — comma-separated century starts (`1900,2000s`)
//!    - `PHANTOM_FORMAT` — `text` or `json`
//! 4. Command-line flags (applied by the binary).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use phantom_core::{parse_century, PhantomError, Year};

/// Environment variable holding the demo century list.
pub const ENV_CENTURIES: &str = "PHANTOM_CENTURIES";
/// Environment variable selecting the output format.
pub const ENV_FORMAT: &str = "PHANTOM_FORMAT";

/// Centuries shown by `phantomyear demo` unless configured otherwise.
pub const DEFAULT_CENTURIES: [Year; 4] = [1900, 2000, 2100, 2200];

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// One JSON document per invocation.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Century starts scanned by the demo.
    pub centuries: Vec<Year>,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            centuries: DEFAULT_CENTURIES.to_vec(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Defaults, overlaid with the optional YAML file, overlaid with the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_yaml_file(p)?,
            None => Self::default(),
        };
        base.with_env(|key| std::env::var(key).ok())
    }

    /// Parse a YAML configuration file. Missing keys keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::Yaml(source) => ConfigError::YamlFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse YAML configuration text. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_CENTURIES) {
            self.centuries = parse_century_list(&raw)?;
        }
        if let Some(raw) = lookup(ENV_FORMAT) {
            self.format = raw.parse()?;
        }
        Ok(self)
    }
}

/// Parse `1900, 2000s,2100` into century starts. Blank entries are ignored.
pub fn parse_century_list(raw: &str) -> Result<Vec<Year>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            parse_century(s).map_err(|source| ConfigError::InvalidCentury {
                var: ENV_CENTURIES,
                source,
            })
        })
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid YAML config {}: {source}", .path.display())]
    YamlFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid {var}: {source}")]
    InvalidCentury {
        var: &'static str,
        source: PhantomError,
    },
    #[error("invalid output format {0:?} (expected \"text\" or \"json\")")]
    InvalidFormat(String),
}
