//! Error types for overlay operations.

use thiserror::Error;

use crate::host::NodeId;

/// Errors raised synchronously by the overlay controllers.
///
/// Double close and double removal are not errors: both are no-ops.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OverlayError {
    /// A relocation selector matched no node when the overlay opened.
    #[error("Attachment target '{selector}' not found")]
    TargetNotFound { selector: String },

    /// Required overlay options were missing or malformed.
    #[error("Invalid overlay options: {message}")]
    InvalidOptions { message: String },

    /// Content was about to be mounted into a node that is no longer attached.
    #[error("Host node {node} is detached")]
    NodeDetached { node: NodeId },

    /// Tip timers need a running tokio runtime.
    #[error("No tokio runtime available for tip timers")]
    TimerUnavailable,
}

impl OverlayError {
    pub fn invalid(message: impl Into<String>) -> Self {
        OverlayError::InvalidOptions {
            message: message.into(),
        }
    }
}
