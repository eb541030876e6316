//! Intents for the countdown engine.

use crate::ui::mvi::Intent;

/// Direction of a ±1 minute length adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerIntent {
    /// Start or pause. Phase and remaining time are kept.
    ToggleRun,

    /// One second elapsed on the live tick source.
    Tick,

    /// Countdown reached zero while running: flip phase and reseed.
    Expire,

    /// Back to the idle 25/5 session. Only dispatched after confirmation.
    Reset,

    /// Session length ±1. Also overwrites the countdown, whatever the phase.
    AdjustSession(Step),

    /// Break length ±1. Takes effect the next time a break begins.
    AdjustBreak(Step),
}

impl Intent for TimerIntent {}
