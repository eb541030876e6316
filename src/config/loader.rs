use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_BELLS};
use crate::ui::theme::Theme;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pomoclock/config.toml` on Linux, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pomoclock").join("config.toml")
    }

    /// Default log file location under the platform data directory.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("pomoclock").join("pomoclock.log")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: `Config::default()`.
    /// - Otherwise parse as TOML, then validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The theme names one of the built-in palettes
    /// - The redraw cadence is non-zero
    /// - The bell count is within 1..=MAX_BELLS
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Theme::from_name(&self.ui.theme).is_none() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown theme '{}' (available: {})",
                    self.ui.theme,
                    Theme::names().join(", ")
                ),
            });
        }

        if self.ui.redraw_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.redraw_ms must be greater than zero".to_string(),
            });
        }

        if !(1..=MAX_BELLS).contains(&self.alert.bells) {
            return Err(ConfigError::ValidationError {
                message: format!("alert.bells must be between 1 and {}", MAX_BELLS),
            });
        }

        Ok(())
    }
}
