//! State of a dialog controller.

use std::fmt;

use crate::host::{DialogButton, NodeId};
use crate::ui::mvi::UiState;

/// Per-controller identifier of one open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        session: SessionId,
        container: NodeId,
        focused: DialogButton,
        has_cancel: bool,
    },
}

impl UiState for DialogState {}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn session(&self) -> Option<SessionId> {
        match self {
            Self::Open { session, .. } => Some(*session),
            Self::Closed => None,
        }
    }

    pub fn container(&self) -> Option<NodeId> {
        match self {
            Self::Open { container, .. } => Some(*container),
            Self::Closed => None,
        }
    }

    pub fn focused(&self) -> Option<DialogButton> {
        match self {
            Self::Open { focused, .. } => Some(*focused),
            Self::Closed => None,
        }
    }
}
