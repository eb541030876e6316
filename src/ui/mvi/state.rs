//! Marker trait for view state.

/// State objects are cloned to snapshot, compared to detect changes, and
/// have a well-defined initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
