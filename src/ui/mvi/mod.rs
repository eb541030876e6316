//! Model-View-Intent (MVI) primitives shared by every stateful widget.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain data, everything a view needs to draw itself
//! - **Intent**: a key press or a clock event
//! - **Reducer**: pure `(State, Intent) -> State`; side effects (ticker,
//!   alert) happen in the caller around the dispatch

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
