use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use crate::config::Config;
use crate::ui::theme::Theme;

#[derive(Debug, Parser)]
#[command(name = "pomoclock", version, about = "Pomodoro countdown timer for the terminal")]
pub struct Cli {
    /// Config file (default: ~/.config/pomoclock/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override color theme (white, green, blue, pink)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Do not ring the terminal bell when a phase ends
    #[arg(long)]
    pub no_alert: bool,

    /// Override log file location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Layer command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(name) = &self.theme {
            if Theme::from_name(name).is_none() {
                bail!(
                    "Theme '{}' not found. Available themes: {}",
                    name,
                    Theme::names().join(", ")
                );
            }
            config.ui.theme = name.clone();
        }
        if self.no_alert {
            config.alert.enabled = false;
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pomoclock").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keeps_config() {
        let mut config = Config::default();
        parse(&[]).apply(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_are_applied() {
        let mut config = Config::default();
        parse(&["--theme", "pink", "--no-alert", "--log-file", "/tmp/p.log"])
            .apply(&mut config)
            .unwrap();
        assert_eq!(config.ui.theme, "pink");
        assert!(!config.alert.enabled);
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/p.log")));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let mut config = Config::default();
        let err = parse(&["--theme", "purple"]).apply(&mut config).unwrap_err();
        assert!(err.to_string().contains("Theme 'purple' not found"));
        assert_eq!(config.ui.theme, "white");
    }
}
