//! Countdown engine.
//!
//! Alternates between a work interval (Session) and a rest interval (Break).
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Timer record (phase, lengths, remaining seconds, running)
//! - `intent.rs` - Commands and clock events (ToggleRun, Tick, Expire, ...)
//! - `reducer.rs` - Countdown and phase-flip rules (pure, no side effects)
//! - `format.rs` - `MM:SS` rendering of the countdown

mod format;
mod intent;
mod reducer;
mod state;

pub use format::format_clock;
pub use intent::{Step, TimerIntent};
pub use reducer::TimerReducer;
pub use state::{
    Phase, TimerState, TimerStatus, DEFAULT_BREAK_MINUTES, DEFAULT_SESSION_MINUTES,
    MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES,
};
