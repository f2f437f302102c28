use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section and key has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// Controls how calculation results are rendered.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Prefixed to every money amount (e.g., "$" gives "$1,500").
    pub currency_symbol: String,
    /// Print a warning under the cap table when investors claim more than 100%.
    pub warn_on_oversubscription: bool,
    /// Output format used when `--format` is not given on the command line.
    pub format: OutputFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            warn_on_oversubscription: true,
            format: OutputFormat::Table,
        }
    }
}

/// Controls the tracing subscriber installed by the binary.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive (e.g., "info" or "analytics=debug"). `RUST_LOG` wins if set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Machine-readable JSON.
    Json,
}
