//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// Implementations must stay pure: no I/O, no clocks, no sound.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
