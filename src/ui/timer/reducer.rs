//! Reducer for the countdown engine.

use crate::ui::mvi::Reducer;

use super::intent::{Step, TimerIntent};
use super::state::{TimerState, MAX_LENGTH_MINUTES, MIN_LENGTH_MINUTES};

/// Countdown and alternation rules.
///
/// Pure function. Starting or stopping the tick source and ringing the alert
/// are done by the caller around the dispatch call.
pub struct TimerReducer;

impl Reducer for TimerReducer {
    type State = TimerState;
    type Intent = TimerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TimerIntent::ToggleRun => TimerState {
                running: !state.running,
                ..state
            },

            TimerIntent::Tick => {
                if state.running && state.remaining_seconds > 0 {
                    TimerState {
                        remaining_seconds: state.remaining_seconds - 1,
                        ..state
                    }
                } else {
                    state
                }
            }

            TimerIntent::Expire => {
                if !state.is_expired() {
                    return state;
                }
                let phase = state.phase.flipped();
                // The extra second is intentional: the first tick of the new
                // phase lands on the full length.
                let remaining_seconds = u32::from(state.length_of(phase)) * 60 + 1;
                TimerState {
                    phase,
                    remaining_seconds,
                    ..state
                }
            }

            TimerIntent::Reset => TimerState::default(),

            TimerIntent::AdjustSession(step) => match stepped(state.session_length, step) {
                // Overwrites the countdown even mid-break or while running.
                Some(session_length) => TimerState {
                    session_length,
                    remaining_seconds: u32::from(session_length) * 60,
                    ..state
                },
                None => state,
            },

            TimerIntent::AdjustBreak(step) => match stepped(state.break_length, step) {
                Some(break_length) => TimerState {
                    break_length,
                    ..state
                },
                None => state,
            },
        }
    }
}

/// `length` moved one minute in `step` direction, or `None` when that would
/// leave the allowed range.
fn stepped(length: u8, step: Step) -> Option<u8> {
    let next = match step {
        Step::Up => length.checked_add(1)?,
        Step::Down => length.checked_sub(1)?,
    };
    (MIN_LENGTH_MINUTES..=MAX_LENGTH_MINUTES)
        .contains(&next)
        .then_some(next)
}
