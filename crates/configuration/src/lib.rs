use crate::error::ConfigError;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DisplaySettings, LoggingSettings, OutputFormat, Settings};

/// The settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "safe-calc.toml";

/// Prefix for environment overrides, e.g. `SAFE_CALC__DISPLAY__CURRENCY_SYMBOL`.
pub const ENV_PREFIX: &str = "SAFE_CALC";

/// Loads the application settings.
///
/// With `path` set, that file must exist. Without it, `safe-calc.toml` in the
/// working directory is read if present. Environment variables with the
/// `SAFE_CALC__` prefix are layered on top, and anything left unset falls back
/// to its default.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file_source = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file_source)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    Ok(settings)
}

/// Rejects settings that would only fail later, at display or logging time.
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.display.currency_symbol.chars().any(char::is_control) {
        return Err(ConfigError::ValidationError(
            "display.currency_symbol must not contain control characters".to_string(),
        ));
    }
    if let Err(e) = EnvFilter::try_new(&settings.logging.level) {
        return Err(ConfigError::ValidationError(format!(
            "logging.level '{}' is not a valid filter: {}",
            settings.logging.level, e
        )));
    }
    Ok(())
}
