use anyhow::Context;
use clap::Parser;

use pomoclock::cli::Cli;
use pomoclock::config::Config;
use pomoclock::logging::init_tracing;
use pomoclock::shutdown::ShutdownCoordinator;
use pomoclock::ui::theme::Theme;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply(&mut config)?;
    config.validate()?;
    // validate() has already checked the name.
    let theme = Theme::from_name(&config.ui.theme).unwrap_or(Theme::White);

    let log_path = config.log.file.clone().unwrap_or_else(Config::default_log_path);
    if let Err(err) = init_tracing(&config.log.level, &log_path) {
        eprintln!("Logging disabled ({}): {}", log_path.display(), err);
    }

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .register_signals()
        .context("Failed to register signal handlers")?;

    pomoclock::ui::run(&config, theme, shutdown.handle()).context("Terminal UI failed")?;
    Ok(())
}
