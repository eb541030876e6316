//! Marker trait for intents.

/// Something that happened: a command from the keyboard or a tick from the
/// clock. Reducers consume intents to produce the next state.
pub trait Intent: Send + 'static {}
