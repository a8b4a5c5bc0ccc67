//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hanoi::TowerConfig;
use tracing::{debug, info, instrument};

/// Top-level configuration file.
///
/// Every section is optional; missing keys fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Starting tower.
    tower: TowerConfig,

    /// Logging settings.
    log: LogConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file used while the terminal UI owns the screen.
    file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_filter(),
        }
    }
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_hanoi.log")
}

#[instrument]
fn default_filter() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// The tower section is validated before returning.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(discs = config.tower.discs().len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .tower
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid tower: {}", e)))?;
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_hanoi::Peg;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log().filter(), "info");
    }

    #[test]
    fn test_partial_tower_section() {
        let config = AppConfig::from_toml(
            r#"
            [tower]
            start_peg = "right"
            discs = [
                { radius = 2.0, color = "red" },
                { radius = 1.0, color = "cyan" },
            ]
            "#,
        )
        .expect("valid config");

        assert_eq!(*config.tower().start_peg(), Peg::Right);
        assert_eq!(config.tower().discs().len(), 2);
        assert_eq!(*config.tower().disc_height(), 0.8);
    }

    #[test]
    fn test_invalid_tower_rejected() {
        let err = AppConfig::from_toml(
            r#"
            [tower]
            discs = [
                { radius = 1.0, color = "red" },
                { radius = 3.0, color = "blue" },
            ]
            "#,
        )
        .expect_err("radii increase");
        assert!(err.message.contains("Invalid tower"));
    }

    #[test]
    fn test_parse_error_reported() {
        let err = AppConfig::from_toml("[tower\n").expect_err("broken toml");
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_default_renders_and_reparses() {
        let text = AppConfig::default().to_toml().expect("render");
        let parsed = AppConfig::from_toml(&text).expect("reparse");
        assert_eq!(parsed, AppConfig::default());
    }
}
