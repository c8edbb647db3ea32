//! Throwaway host nodes that overlay fragments mount into.

use std::sync::Arc;

use crate::error::OverlayError;
use crate::host::{Fragment, NodeId, SharedTree};

/// A host node owned by exactly one controller.
///
/// The node is appended to the root on [`acquire`](Self::acquire) and
/// detached on [`release`](Self::release) or drop, whichever comes first.
pub struct HostContainer {
    tree: SharedTree,
    node: NodeId,
    released: bool,
}

impl HostContainer {
    pub fn acquire(tree: &SharedTree) -> Self {
        let node = tree.lock().create_container();
        tracing::debug!(%node, "host container acquired");
        Self {
            tree: Arc::clone(tree),
            node,
            released: false,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn mount(&self, fragment: Fragment) -> Result<(), OverlayError> {
        if self.released {
            return Err(OverlayError::NodeDetached { node: self.node });
        }
        self.tree.lock().mount(self.node, fragment)
    }

    /// Unmount hosted content and detach the node. Later calls do nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let mut tree = self.tree.lock();
        tree.unmount(self.node);
        tree.detach(self.node);
        tracing::debug!(node = %self.node, "host container released");
    }
}

impl Drop for HostContainer {
    fn drop(&mut self) {
        self.release();
    }
}
