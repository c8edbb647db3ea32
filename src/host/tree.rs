use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;

use super::{Fragment, NodeId};
use crate::error::OverlayError;

/// Tree shared between the paint loop and every overlay controller.
pub type SharedTree = Arc<Mutex<UiTree>>;

type CommitTask = Box<dyn FnOnce(&mut UiTree) + Send + 'static>;

const ROOT_SELECTOR: &str = "body";

#[derive(Debug)]
struct Node {
    selector: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Explicit paint area; nodes without one inherit their parent's.
    area: Option<Rect>,
    fragment: Option<Fragment>,
}

impl Node {
    fn new(selector: Option<String>, parent: Option<NodeId>, area: Option<Rect>) -> Self {
        Self {
            selector,
            parent,
            children: Vec::new(),
            area,
            fragment: None,
        }
    }
}

/// Retained tree of host nodes.
///
/// Nodes live in an arena keyed by [`NodeId`]; ids increase with creation
/// order so iteration doubles as paint order.
pub struct UiTree {
    nodes: BTreeMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
    after_commit: Vec<CommitTask>,
}

impl UiTree {
    pub fn new(area: Rect) -> Self {
        let root = NodeId::new(0);
        let mut nodes = BTreeMap::new();
        nodes.insert(
            root,
            Node::new(Some(ROOT_SELECTOR.to_string()), None, Some(area)),
        );
        Self {
            nodes,
            root,
            next_id: 1,
            after_commit: Vec::new(),
        }
    }

    pub fn shared(area: Rect) -> SharedTree {
        Arc::new(Mutex::new(Self::new(area)))
    }

    /// The fixed root node (the "body").
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn resize(&mut self, area: Rect) {
        self.set_area(self.root, area);
    }

    pub fn set_area(&mut self, node: NodeId, area: Rect) -> bool {
        match self.nodes.get_mut(&node) {
            Some(node) => {
                node.area = Some(area);
                true
            }
            None => false,
        }
    }

    /// Add a named region that overlays can be relocated into.
    pub fn add_region(
        &mut self,
        parent: NodeId,
        selector: &str,
        area: Rect,
    ) -> Result<NodeId, OverlayError> {
        self.insert_child(parent, Some(selector.to_string()), Some(area))
    }

    /// Remove a node and its whole subtree. The root cannot be removed.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        if node == self.root {
            return false;
        }
        self.detach(node)
    }

    /// Find an attached node by selector.
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.selector.as_deref() == Some(selector))
            .map(|(id, _)| *id)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Create an empty throwaway node appended to the root.
    pub fn create_container(&mut self) -> NodeId {
        let id = self.allocate_id();
        self.nodes.insert(id, Node::new(None, Some(self.root), None));
        if let Some(root) = self.nodes.get_mut(&self.root) {
            root.children.push(id);
        }
        id
    }

    /// Detach `node` from its parent and drop it together with its subtree.
    ///
    /// Returns `false` if the node was already gone.
    pub fn detach(&mut self, node: NodeId) -> bool {
        let Some(removed) = self.nodes.remove(&node) else {
            return false;
        };
        if let Some(parent) = removed.parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != node);
        }
        for child in removed.children {
            self.detach(child);
        }
        true
    }

    /// Mount `fragment` into `node`, replacing whatever was there.
    pub fn mount(&mut self, node: NodeId, fragment: Fragment) -> Result<(), OverlayError> {
        if let Some(target) = fragment.relocation() {
            if !self.contains(target) {
                return Err(OverlayError::NodeDetached { node: target });
            }
        }
        let slot = self
            .nodes
            .get_mut(&node)
            .ok_or(OverlayError::NodeDetached { node })?;
        slot.fragment = Some(fragment);
        Ok(())
    }

    pub fn unmount(&mut self, node: NodeId) -> Option<Fragment> {
        self.nodes.get_mut(&node).and_then(|n| n.fragment.take())
    }

    pub fn fragment(&self, node: NodeId) -> Option<&Fragment> {
        self.nodes.get(&node).and_then(|n| n.fragment.as_ref())
    }

    pub fn fragment_mut(&mut self, node: NodeId) -> Option<&mut Fragment> {
        self.nodes.get_mut(&node).and_then(|n| n.fragment.as_mut())
    }

    /// Every mounted fragment, in mount-node creation order.
    pub fn mounted(&self) -> impl Iterator<Item = (NodeId, &Fragment)> {
        self.nodes
            .iter()
            .filter_map(|(id, node)| node.fragment.as_ref().map(|f| (*id, f)))
    }

    /// Fragments that paint inside `host`, following relocation.
    pub fn rendered_at(&self, host: NodeId) -> Vec<&Fragment> {
        self.mounted()
            .filter(|(node, fragment)| fragment.relocation().unwrap_or(*node) == host)
            .map(|(_, fragment)| fragment)
            .collect()
    }

    /// Area a node paints into, inherited from the closest ancestor with one.
    pub fn paint_area(&self, node: NodeId) -> Option<Rect> {
        let mut current = self.nodes.get(&node)?;
        loop {
            if let Some(area) = current.area {
                return Some(area);
            }
            current = self.nodes.get(&current.parent?)?;
        }
    }

    /// Queue work to run once the pending updates are committed.
    pub fn after_commit<F>(&mut self, task: F)
    where
        F: FnOnce(&mut UiTree) + Send + 'static,
    {
        self.after_commit.push(Box::new(task));
    }

    /// Commit pending updates and run the deferred work queued before this call.
    ///
    /// Work queued by a task runs on the following commit.
    pub fn commit(&mut self) -> usize {
        let tasks = std::mem::take(&mut self.after_commit);
        let count = tasks.len();
        for task in tasks {
            task(self);
        }
        count
    }

    fn insert_child(
        &mut self,
        parent: NodeId,
        selector: Option<String>,
        area: Option<Rect>,
    ) -> Result<NodeId, OverlayError> {
        if !self.contains(parent) {
            return Err(OverlayError::NodeDetached { node: parent });
        }
        let id = self.allocate_id();
        self.nodes.insert(id, Node::new(selector, Some(parent), area));
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(id);
        }
        Ok(id)
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }
}
