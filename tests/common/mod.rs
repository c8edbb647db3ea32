//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use ratatui::layout::Rect;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tui_overlays::host::{NodeId, SharedTree, UiTree};

pub const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// Records callback invocations in order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn tree() -> SharedTree {
    UiTree::shared(SCREEN)
}

/// Tree with a `#sidebar` region on the right-hand side.
pub fn tree_with_sidebar() -> (SharedTree, NodeId) {
    let tree = tree();
    let sidebar = {
        let mut guard = tree.lock();
        let root = guard.root();
        guard
            .add_region(root, "#sidebar", Rect::new(56, 0, 24, 24))
            .expect("root is attached")
    };
    (tree, sidebar)
}

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Callback that appends `label` to `log`.
pub fn record(log: &CallLog, label: &str) -> impl FnOnce() + Send + 'static {
    let log = Arc::clone(log);
    let label = label.to_string();
    move || log.lock().push(label)
}

pub fn root_children(tree: &SharedTree) -> usize {
    let guard = tree.lock();
    guard.children(guard.root()).len()
}

/// Content lines of every mounted dialog.
pub fn mounted_dialog_content(tree: &SharedTree) -> Vec<Vec<String>> {
    let guard = tree.lock();
    guard
        .mounted()
        .filter_map(|(_, fragment)| fragment.content().as_dialog().map(|d| d.content.clone()))
        .collect()
}

/// Let the paused clock run forward, firing due timers on the way.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

/// Run `future` on a local task set so tip timers can be spawned.
pub async fn local<F: Future>(future: F) -> F::Output {
    tokio::task::LocalSet::new().run_until(future).await
}
