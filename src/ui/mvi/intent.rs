//! Marker trait for intents.

/// Lifecycle events and user actions fed to a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
