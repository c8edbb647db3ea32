use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use parking_lot::Mutex;

use crate::error::OverlayError;
use crate::host::{DialogButton, SharedTree};
use crate::overlay::{attach, bridge, HostContainer};
use crate::ui::mvi::Reducer;

use super::intent::DialogIntent;
use super::options::{Backdrop, Callback, DialogDefaults, DialogOptions, ResolvedBackdrop};
use super::reducer::DialogReducer;
use super::state::{DialogState, SessionId};

/// Resources of the mounted session. Dropping it releases the container.
struct LiveSession {
    id: SessionId,
    container: HostContainer,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
    on_backdrop_click: Option<Callback>,
    close_on_backdrop: bool,
}

#[derive(Default)]
struct DialogSlot {
    state: DialogState,
    session: Option<LiveSession>,
    last_session: u64,
}

impl DialogSlot {
    fn dispatch(&mut self, intent: DialogIntent) {
        self.state = DialogReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

struct DialogShared {
    tree: SharedTree,
    defaults: DialogDefaults,
    slot: Mutex<DialogSlot>,
}

/// Single-slot dialog overlay.
///
/// Opening while a dialog is mounted closes the old one first without
/// running any of its callbacks. Callbacks run with no controller lock held,
/// so they may open or close dialogs themselves.
#[derive(Clone)]
pub struct DialogController {
    shared: Arc<DialogShared>,
}

impl DialogController {
    pub fn new(tree: SharedTree, defaults: DialogDefaults) -> Self {
        Self {
            shared: Arc::new(DialogShared {
                tree,
                defaults,
                slot: Mutex::new(DialogSlot::default()),
            }),
        }
    }

    pub fn state(&self) -> DialogState {
        self.shared.slot.lock().state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.shared.slot.lock().state.is_open()
    }

    /// Mount a new dialog, superseding any open one.
    ///
    /// Validation and target resolution happen before anything changes: on
    /// error the previous dialog (if any) stays open and no node is created.
    pub fn open(&self, options: DialogOptions) -> Result<SessionId, OverlayError> {
        options.validate()?;
        let target = options
            .attach
            .as_ref()
            .or(self.shared.defaults.attach.as_ref());
        let relocation = attach::resolve(&self.shared.tree.lock(), target)?;
        let backdrop =
            ResolvedBackdrop::resolve(options.backdrop.as_ref(), &self.shared.defaults.backdrop);

        self.close();

        let mut slot = self.shared.slot.lock();
        slot.last_session += 1;
        let session = SessionId::new(slot.last_session);

        let container = HostContainer::acquire(&self.shared.tree);
        let fragment = bridge::build(bridge::dialog(session, &options, backdrop.style), relocation);
        container.mount(fragment)?;
        let node = container.node();

        self.shared.tree.lock().after_commit(move |tree| {
            let Some(dialog) = tree.fragment_mut(node).and_then(|f| f.as_dialog_mut()) else {
                return;
            };
            if dialog.session == session.get() {
                dialog.revealed = true;
            }
        });

        let DialogOptions {
            confirm,
            cancel,
            backdrop: backdrop_options,
            ..
        } = options;
        let has_cancel = cancel.is_some();
        let on_backdrop_click = match backdrop_options {
            Some(Backdrop::On(backdrop_options)) => backdrop_options.on_backdrop_click,
            _ => None,
        };
        slot.session = Some(LiveSession {
            id: session,
            container,
            on_confirm: confirm.on_complete,
            on_cancel: cancel.and_then(|c| c.on_complete),
            on_backdrop_click,
            close_on_backdrop: backdrop.close_on_click,
        });
        slot.dispatch(DialogIntent::Opened {
            session,
            container: node,
            has_cancel,
        });
        tracing::debug!(%session, %node, relocated = relocation.is_some(), "dialog opened");
        Ok(session)
    }

    /// Unmount the dialog without running callbacks. Does nothing when closed.
    pub fn close(&self) {
        let session = {
            let mut slot = self.shared.slot.lock();
            slot.dispatch(DialogIntent::Closed);
            slot.session.take()
        };
        if let Some(mut session) = session {
            session.container.release();
            tracing::debug!(session = %session.id, "dialog closed");
        }
    }

    /// Run the confirm callback, then close.
    pub fn confirm(&self) {
        let taken = self.take_callback(|session| Some(session.on_confirm.take()));
        self.finish(taken);
    }

    /// Run the cancel callback if one was given, then close.
    pub fn cancel(&self) {
        let taken = self.take_callback(|session| Some(session.on_cancel.take()));
        self.finish(taken);
    }

    /// Handle a click on the backdrop: closes only if click-to-close is on.
    pub fn backdrop_click(&self) {
        let taken = self.take_callback(|session| {
            if session.close_on_backdrop {
                Some(session.on_backdrop_click.take())
            } else {
                None
            }
        });
        self.finish(taken);
    }

    pub fn focus_next(&self) {
        let mut slot = self.shared.slot.lock();
        slot.dispatch(DialogIntent::FocusNext);
        let (Some(node), Some(focused)) = (slot.state.container(), slot.state.focused()) else {
            return;
        };
        let mut tree = self.shared.tree.lock();
        if let Some(dialog) = tree.fragment_mut(node).and_then(|f| f.as_dialog_mut()) {
            dialog.focused = focused;
        }
    }

    /// Route a key press to the open dialog. Returns `true` if consumed.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let Some(focused) = self.shared.slot.lock().state.focused() else {
            return false;
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => self.focus_next(),
            KeyCode::Enter => match focused {
                DialogButton::Confirm => self.confirm(),
                DialogButton::Cancel => self.cancel(),
            },
            KeyCode::Esc => self.cancel(),
            _ => {}
        }
        true
    }

    /// Pick a callback out of the live session.
    ///
    /// `pick` returns `None` when the action does not apply, or
    /// `Some(callback)` when it does (the callback itself may be absent).
    fn take_callback<F>(&self, pick: F) -> Option<(SessionId, Option<Callback>)>
    where
        F: FnOnce(&mut LiveSession) -> Option<Option<Callback>>,
    {
        let mut slot = self.shared.slot.lock();
        let session = slot.session.as_mut()?;
        let callback = pick(session)?;
        Some((session.id, callback))
    }

    fn finish(&self, taken: Option<(SessionId, Option<Callback>)>) {
        let Some((session, callback)) = taken else {
            return;
        };
        if let Some(callback) = callback {
            callback();
        }
        // A callback that opened a new dialog keeps it.
        if self.shared.slot.lock().state.session() == Some(session) {
            self.close();
        }
    }
}
