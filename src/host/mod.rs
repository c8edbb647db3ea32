//! Retained host tree that overlays mount into.
//!
//! The tree stands in for the rendering framework: it owns host nodes,
//! mounts and unmounts fragments, relocates teleported fragments, and runs
//! deferred work after each commit.

mod fragment;
mod tree;

use std::fmt;

pub use fragment::{
    BackdropStyle, DialogButton, DialogElement, Fragment, TipListElement, TipView,
};
pub use tree::{SharedTree, UiTree};

/// Identifier of a node in a [`UiTree`]. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
