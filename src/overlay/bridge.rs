//! Build the fragments the controllers mount.

use crate::dialog::{DialogOptions, SessionId};
use crate::host::{
    BackdropStyle, DialogButton, DialogElement, Fragment, NodeId, TipListElement, TipView,
};
use crate::tips::Tip;

/// Wrap `content` so it paints at `relocation`, or leave it in place.
pub fn build(content: Fragment, relocation: Option<NodeId>) -> Fragment {
    match relocation {
        Some(target) => Fragment::Teleport {
            target,
            child: Box::new(content),
        },
        None => content,
    }
}

/// Dialog content for `session`. Mounted hidden; revealed after commit.
pub fn dialog(
    session: SessionId,
    options: &DialogOptions,
    backdrop: Option<BackdropStyle>,
) -> Fragment {
    Fragment::Dialog(DialogElement {
        session: session.get(),
        title: options.title.clone(),
        content: options.content.clone(),
        confirm_label: options.confirm.label.clone(),
        cancel_label: options.cancel.as_ref().map(|c| c.label.clone()),
        backdrop,
        focused: DialogButton::Confirm,
        revealed: false,
    })
}

/// Tip list content in collection order.
pub fn tip_list(tips: &[Tip]) -> Fragment {
    Fragment::TipList(TipListElement {
        tips: tips
            .iter()
            .map(|tip| TipView {
                id: tip.id.get(),
                content: tip.content.clone(),
                text_color: tip.text_color,
            })
            .collect(),
    })
}
