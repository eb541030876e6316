use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for `alert.bells`.
pub const MAX_BELLS: u8 = 10;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub alert: AlertConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Look and feel of the terminal surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial color theme: "white", "green", "blue" or "pink".
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Input poll and redraw cadence in milliseconds (default: 250).
    #[serde(default = "default_redraw_ms")]
    pub redraw_ms: u64,
}

/// Audible alert played when a phase expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Ring the terminal bell on expiry (default: true).
    #[serde(default = "default_alert_enabled")]
    pub enabled: bool,
    /// Number of BEL characters per alert, 1..=10 (default: 1).
    #[serde(default = "default_bells")]
    pub bells: u8,
}

/// Log output. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Falls back to the platform data directory when absent.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_theme() -> String {
    "white".to_string()
}

fn default_redraw_ms() -> u64 {
    250
}

fn default_alert_enabled() -> bool {
    true
}

fn default_bells() -> u8 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            redraw_ms: default_redraw_ms(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: default_alert_enabled(),
            bells: default_bells(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
