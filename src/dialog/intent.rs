//! Intents for the dialog controller.

use crate::host::NodeId;
use crate::ui::mvi::Intent;

use super::state::SessionId;

#[derive(Debug, Clone)]
pub enum DialogIntent {
    /// A new session was mounted into `container`.
    Opened {
        session: SessionId,
        container: NodeId,
        has_cancel: bool,
    },

    /// Move keyboard focus to the next button.
    FocusNext,

    /// The session was torn down.
    Closed,
}

impl Intent for DialogIntent {}
