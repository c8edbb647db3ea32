//! Marker trait for overlay state.

/// State must be cheap to clone, comparable, and start from a default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
