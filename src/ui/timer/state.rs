//! State for the countdown engine.

use crate::ui::mvi::UiState;

pub const DEFAULT_SESSION_MINUTES: u8 = 25;
pub const DEFAULT_BREAK_MINUTES: u8 = 5;
pub const MIN_LENGTH_MINUTES: u8 = 1;
pub const MAX_LENGTH_MINUTES: u8 = 60;

/// Which interval currently governs the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Session,
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Session => "Session",
            Phase::Break => "Break",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Phase::Session => Phase::Break,
            Phase::Break => Phase::Session,
        }
    }
}

/// Complete timer record. Owned by the presentation layer and only changed
/// through [`TimerReducer`](super::TimerReducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub phase: Phase,
    /// Minutes, always within `MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES`.
    pub session_length: u8,
    /// Minutes, always within `MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES`.
    pub break_length: u8,
    pub remaining_seconds: u32,
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            phase: Phase::Session,
            session_length: DEFAULT_SESSION_MINUTES,
            break_length: DEFAULT_BREAK_MINUTES,
            remaining_seconds: u32::from(DEFAULT_SESSION_MINUTES) * 60,
            running: false,
        }
    }
}

impl UiState for TimerState {}

impl TimerState {
    /// Configured length of `phase` in minutes.
    pub fn length_of(&self, phase: Phase) -> u8 {
        match phase {
            Phase::Session => self.session_length,
            Phase::Break => self.break_length,
        }
    }

    /// Countdown hit zero while running; the next update must be an expiry.
    pub fn is_expired(&self) -> bool {
        self.running && self.remaining_seconds == 0
    }

    pub fn status(&self) -> TimerStatus {
        match (self.running, self.phase) {
            (false, _) => TimerStatus::Idle,
            (true, Phase::Session) => TimerStatus::RunningSession,
            (true, Phase::Break) => TimerStatus::RunningBreak,
        }
    }
}

/// Coarse view of the engine, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Paused or never started; the stored phase is resumed on start.
    Idle,
    RunningSession,
    RunningBreak,
}
