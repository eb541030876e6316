use crate::alert::AlertSink;
use crate::ticker::{TickHandle, TickSource};
use crate::ui::confirm::{ConfirmChoice, ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;
use crate::ui::timer::{Step, TimerIntent, TimerReducer, TimerState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    theme: Theme,
    show_help: bool,
    /// Countdown state (MVI pattern). The only copy in the process.
    timer: TimerState,
    /// Reset confirmation prompt (MVI pattern).
    confirm: ConfirmDialogState,
    ticks: Box<dyn TickSource>,
    /// Live tick stream, present exactly while the timer runs.
    ticker: Option<TickHandle>,
    next_generation: u64,
    alert: Box<dyn AlertSink>,
}

impl App {
    pub fn new(theme: Theme, ticks: Box<dyn TickSource>, alert: Box<dyn AlertSink>) -> Self {
        Self {
            should_quit: false,
            theme,
            show_help: false,
            timer: TimerState::default(),
            confirm: ConfirmDialogState::default(),
            ticks,
            ticker: None,
            next_generation: 0,
            alert,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Generation of the live tick stream, if the timer is running.
    pub fn ticker_generation(&self) -> Option<u64> {
        self.ticker.as_ref().map(TickHandle::generation)
    }

    /// Redraw cadence tick. The countdown is driven by `on_timer_tick`.
    pub fn on_tick(&mut self) {}

    /// One second elapsed on tick stream `generation`.
    ///
    /// Ticks from a released stream are dropped. When the decrement lands
    /// on zero the expiry is applied in the same step, exactly once.
    pub fn on_timer_tick(&mut self, generation: u64) {
        if self.ticker_generation() != Some(generation) {
            tracing::trace!(generation, "stale tick ignored");
            return;
        }

        self.dispatch_timer(TimerIntent::Tick);

        if self.timer.is_expired() {
            let ended = self.timer.phase;
            self.dispatch_timer(TimerIntent::Expire);
            tracing::info!(
                ended = ended.label(),
                started = self.timer.phase.label(),
                remaining_seconds = self.timer.remaining_seconds,
                "phase expired"
            );
            if let Err(err) = self.alert.play() {
                tracing::warn!(error = %err, "alert playback failed");
            }
        }
    }

    pub fn toggle_run(&mut self) {
        self.dispatch_timer(TimerIntent::ToggleRun);
    }

    pub fn adjust_session(&mut self, step: Step) {
        self.dispatch_timer(TimerIntent::AdjustSession(step));
    }

    pub fn adjust_break(&mut self, step: Step) {
        self.dispatch_timer(TimerIntent::AdjustBreak(step));
    }

    /// Ask before resetting; nothing changes until the prompt is accepted.
    pub fn request_reset(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Open);
    }

    pub fn toggle_confirm_selection(&mut self) {
        self.dispatch_confirm(ConfirmIntent::ToggleSelection);
    }

    /// Act on the highlighted button of the prompt.
    pub fn submit_confirm(&mut self) {
        match self.confirm.selected() {
            Some(ConfirmChoice::Yes) => self.accept_reset(),
            Some(ConfirmChoice::No) => self.dismiss_reset(),
            None => {}
        }
    }

    pub fn accept_reset(&mut self) {
        if !self.confirm.is_visible() {
            return;
        }
        self.dispatch_confirm(ConfirmIntent::Accept);
        self.dispatch_timer(TimerIntent::Reset);
        if let Err(err) = self.alert.stop() {
            tracing::warn!(error = %err, "alert stop failed");
        }
        tracing::info!("timer reset to defaults");
    }

    pub fn dismiss_reset(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Dismiss);
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        tracing::debug!(theme = self.theme.name(), "theme changed");
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    /// Run the timer reducer, then bring the tick stream in line with
    /// `running`: acquire on start, release on pause or reset.
    fn dispatch_timer(&mut self, intent: TimerIntent) {
        if intent != TimerIntent::Tick {
            tracing::debug!(?intent, "timer intent");
        }
        dispatch_mvi!(self, timer, TimerReducer, intent);

        match (self.timer.running, self.ticker.is_some()) {
            (true, false) => {
                self.next_generation += 1;
                self.ticker = Some(self.ticks.start(self.next_generation));
            }
            (false, true) => {
                // Dropping the handle cancels the stream.
                self.ticker = None;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::SilentAlert;
    use crate::ui::timer::Phase;

    struct NullTicks;

    impl TickSource for NullTicks {
        fn start(&mut self, generation: u64) -> TickHandle {
            TickHandle::new(generation, || {})
        }
    }

    fn make_app() -> App {
        App::new(Theme::White, Box::new(NullTicks), Box::new(SilentAlert))
    }

    #[test]
    fn starts_idle_without_ticker() {
        let app = make_app();
        assert!(!app.timer().running);
        assert_eq!(app.ticker_generation(), None);
    }

    #[test]
    fn each_start_gets_a_fresh_generation() {
        let mut app = make_app();
        app.toggle_run();
        let first = app.ticker_generation();
        app.toggle_run();
        assert_eq!(app.ticker_generation(), None);
        app.toggle_run();
        assert!(app.ticker_generation() > first);
    }

    #[test]
    fn reset_requires_prompt() {
        let mut app = make_app();
        app.adjust_session(Step::Up);
        app.accept_reset();
        assert_eq!(app.timer().session_length, 26);

        app.request_reset();
        app.accept_reset();
        assert_eq!(app.timer(), &TimerState::default());
        assert!(!app.confirm_dialog().is_visible());
    }

    #[test]
    fn submit_no_keeps_state() {
        let mut app = make_app();
        app.adjust_break(Step::Up);
        app.request_reset();
        app.toggle_confirm_selection();
        app.submit_confirm();
        assert_eq!(app.timer().break_length, 6);
        assert!(!app.confirm_dialog().is_visible());
    }

    #[test]
    fn tick_with_wrong_generation_is_ignored() {
        let mut app = make_app();
        app.toggle_run();
        let live = app.ticker_generation().unwrap();
        app.on_timer_tick(live + 1);
        assert_eq!(app.timer().remaining_seconds, 1500);
        app.on_timer_tick(live);
        assert_eq!(app.timer().remaining_seconds, 1499);
        assert_eq!(app.timer().phase, Phase::Session);
    }
}
