mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AlertConfig, Config, LogConfig, UiConfig, MAX_BELLS};
