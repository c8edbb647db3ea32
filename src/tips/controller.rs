use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;

use spark_signals::{effect, signal, Signal};
use tokio::runtime::Handle;

use crate::error::OverlayError;
use crate::host::SharedTree;
use crate::overlay::{attach, bridge, AttachmentTarget, HostContainer};

use super::timers::TimerRegistry;
use super::tip::{effective_duration, Tip, TipId, TipOptions};

/// Controller-wide tip settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipsDefaults {
    pub attach: Option<AttachmentTarget>,
    pub default_duration: Option<Duration>,
}

/// Mounted overlay: the container and the render effect keeping it in sync.
///
/// Dropping it stops the effect before the container is released.
struct TipsOverlay {
    container: HostContainer,
    stop_renderer: Option<Box<dyn FnOnce()>>,
}

impl TipsOverlay {
    fn teardown(self) {
        tracing::debug!(node = %self.container.node(), "tips overlay torn down");
    }
}

impl Drop for TipsOverlay {
    fn drop(&mut self) {
        if let Some(stop) = self.stop_renderer.take() {
            stop();
        }
        self.container.release();
    }
}

#[derive(Default)]
struct TipsState {
    overlay: Option<TipsOverlay>,
    timers: TimerRegistry,
}

struct TipsShared {
    tree: SharedTree,
    defaults: TipsDefaults,
    tips: Signal<Vec<Tip>>,
    state: RefCell<TipsState>,
}

/// Multi-slot overlay of auto-expiring tips.
///
/// The overlay is mounted on the first push and torn down as soon as the
/// collection becomes empty. Painting follows the collection through a
/// render effect; no operation re-renders by hand.
///
/// The collection is a thread-local signal, so the controller lives on one
/// thread and its timers are local tasks.
#[derive(Clone)]
pub struct TipsController {
    shared: Rc<TipsShared>,
}

impl TipsController {
    pub fn new(tree: SharedTree, defaults: TipsDefaults) -> Self {
        Self {
            shared: Rc::new(TipsShared {
                tree,
                defaults,
                tips: signal(Vec::new()),
                state: RefCell::new(TipsState::default()),
            }),
        }
    }

    /// Snapshot of the live tips, oldest first.
    pub fn tips(&self) -> Vec<Tip> {
        self.shared.tips.get()
    }

    pub fn len(&self) -> usize {
        self.shared.tips.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.state.borrow().overlay.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.shared.state.borrow().timers.len()
    }

    /// Append a tip and start its expiry timer.
    ///
    /// Fails before touching any state if no tokio runtime is running or the
    /// attachment target of a fresh overlay cannot be resolved.
    ///
    /// # Panics
    ///
    /// The timer is spawned with [`tokio::task::spawn_local`], so inside a
    /// runtime this must be called from within a [`tokio::task::LocalSet`].
    pub fn push_tip(&self, options: impl Into<TipOptions>) -> Result<TipId, OverlayError> {
        let options = options.into();
        Handle::try_current().map_err(|_| OverlayError::TimerUnavailable)?;
        let duration = effective_duration(options.duration, self.shared.defaults.default_duration);

        let mut state = self.shared.state.borrow_mut();
        if state.overlay.is_none() {
            state.overlay = Some(self.mount_overlay()?);
        }

        let id = next_free_id(&state.timers);
        let mut tips = self.shared.tips.get();
        tips.push(Tip {
            id,
            content: options.content,
            text_color: options.text_color,
            duration,
        });
        self.shared.tips.set(tips);

        let weak = Rc::downgrade(&self.shared);
        let timer = tokio::task::spawn_local(async move {
            tokio::time::sleep(duration).await;
            expire(weak, id);
        });
        state.timers.insert(id, timer);
        tracing::debug!(%id, ?duration, "tip pushed");
        Ok(id)
    }

    /// Remove a tip early. Unknown ids are ignored.
    pub fn remove_tip(&self, id: TipId) -> bool {
        let mut tips = self.shared.tips.get();
        let Some(index) = tips.iter().position(|tip| tip.id == id) else {
            return false;
        };
        tips.remove(index);
        let remaining = tips.len();
        self.shared.tips.set(tips);

        let mut state = self.shared.state.borrow_mut();
        state.timers.cancel(id);
        if remaining == 0 {
            if let Some(overlay) = state.overlay.take() {
                overlay.teardown();
            }
        }
        tracing::debug!(%id, remaining, "tip removed");
        true
    }

    /// Cancel every timer, clear the collection and tear the overlay down.
    pub fn remove_all_tips(&self) {
        let overlay = {
            let mut state = self.shared.state.borrow_mut();
            let cancelled = state.timers.cancel_all();
            tracing::debug!(cancelled, "all tips removed");
            state.overlay.take()
        };
        if let Some(overlay) = overlay {
            overlay.teardown();
        }
        self.shared.tips.set(Vec::new());
    }

    fn mount_overlay(&self) -> Result<TipsOverlay, OverlayError> {
        let relocation =
            attach::resolve(&self.shared.tree.lock(), self.shared.defaults.attach.as_ref())?;
        let container = HostContainer::acquire(&self.shared.tree);
        let node = container.node();
        let tree = Arc::clone(&self.shared.tree);
        let tips = self.shared.tips.clone();
        let stop = effect(move || {
            let fragment = bridge::build(bridge::tip_list(&tips.get()), relocation);
            if let Err(err) = tree.lock().mount(node, fragment) {
                tracing::warn!(%node, "tips render skipped: {}", err);
            }
        });
        tracing::debug!(%node, relocated = relocation.is_some(), "tips overlay mounted");
        Ok(TipsOverlay {
            container,
            stop_renderer: Some(Box::new(stop)),
        })
    }
}

/// Timer path: drop the fired entry, then remove the tip.
fn expire(shared: Weak<TipsShared>, id: TipId) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    shared.state.borrow_mut().timers.forget(id);
    TipsController { shared }.remove_tip(id);
}

fn next_free_id(timers: &TimerRegistry) -> TipId {
    loop {
        let id = TipId::generate();
        if !timers.contains(id) {
            return id;
        }
        tracing::warn!(%id, "tip id collision, regenerating");
    }
}
