//! Fragment descriptions mounted into host nodes.
//!
//! A fragment is the intermediate description of overlay content before it
//! is painted. Callbacks never live here; the controller that mounted a
//! fragment keeps them.

use ratatui::style::Color;

use super::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Dialog(DialogElement),
    TipList(TipListElement),
    /// Logically owned by the mounting node, painted inside `target`.
    Teleport {
        target: NodeId,
        child: Box<Fragment>,
    },
}

impl Fragment {
    /// The content with any relocation wrapper peeled off.
    pub fn content(&self) -> &Fragment {
        match self {
            Fragment::Teleport { child, .. } => child.content(),
            other => other,
        }
    }

    pub fn content_mut(&mut self) -> &mut Fragment {
        match self {
            Fragment::Teleport { child, .. } => child.content_mut(),
            other => other,
        }
    }

    pub fn relocation(&self) -> Option<NodeId> {
        match self {
            Fragment::Teleport { target, .. } => Some(*target),
            _ => None,
        }
    }

    pub fn as_dialog(&self) -> Option<&DialogElement> {
        match self.content() {
            Fragment::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn as_dialog_mut(&mut self) -> Option<&mut DialogElement> {
        match self.content_mut() {
            Fragment::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn as_tip_list(&self) -> Option<&TipListElement> {
        match self.content() {
            Fragment::TipList(list) => Some(list),
            _ => None,
        }
    }
}

/// Which dialog button currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropStyle {
    pub color: Color,
    /// Zero paints a flat backdrop; anything above dims what is underneath.
    pub blur: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogElement {
    /// Session that mounted this element; the deferred reveal checks it.
    pub session: u64,
    pub title: Option<String>,
    pub content: Vec<String>,
    pub confirm_label: String,
    pub cancel_label: Option<String>,
    pub backdrop: Option<BackdropStyle>,
    pub focused: DialogButton,
    /// Dialogs mount hidden and are revealed after the next commit.
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TipListElement {
    pub tips: Vec<TipView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TipView {
    pub id: u64,
    pub content: String,
    pub text_color: Option<Color>,
}
