use crate::alert;
use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ticker::TokioTickSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::Theme;
use std::io;
use std::time::Duration;

/// Run the timer UI until the user quits or a shutdown signal arrives.
pub fn run(config: &Config, theme: Theme, shutdown: ShutdownHandle) -> io::Result<()> {
    // Worker thread for the 1 Hz tick source; the UI loop stays on this thread.
    let tick_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("pomoclock-tick")
        .enable_time()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let redraw_rate = Duration::from_millis(config.ui.redraw_ms);
    let events = EventHandler::new(redraw_rate, shutdown.clone());
    let ticks = TokioTickSource::new(tick_runtime.handle().clone(), events.sender());
    let mut app = App::new(theme, Box::new(ticks), alert::from_config(&config.alert));
    tracing::info!(theme = theme.name(), "timer UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(redraw_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "terminal resized"),
            Ok(AppEvent::TimerTick { generation }) => app.on_timer_tick(generation),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Release the tick source before its runtime goes away.
    drop(app);
    shutdown.signal();
    tick_runtime.shutdown_timeout(Duration::from_millis(100));
    drop(guard);
    tracing::info!("timer UI stopped");
    Ok(())
}
