//! Expiry timers keyed by tip id.

use std::collections::HashMap;

use tokio::task::JoinHandle;

use super::tip::TipId;

/// Pending expiry timer per live tip.
///
/// Entries leave the registry either when their timer fires
/// ([`forget`](Self::forget)) or when they are cancelled
/// ([`cancel`](Self::cancel)). Dropping the registry aborts everything left.
#[derive(Default)]
pub struct TimerRegistry {
    timers: HashMap<TipId, JoinHandle<()>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the timer for `id`, aborting any timer it replaces.
    pub fn insert(&mut self, id: TipId, handle: JoinHandle<()>) {
        if let Some(previous) = self.timers.insert(id, handle) {
            previous.abort();
        }
    }

    pub fn contains(&self, id: TipId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Drop the entry of a timer that has fired.
    pub fn forget(&mut self, id: TipId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Abort and drop the timer for `id`.
    pub fn cancel(&mut self, id: TipId) -> bool {
        match self.timers.remove(&id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Abort every pending timer. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn flag_after(delay: Duration) -> (Arc<AtomicBool>, JoinHandle<()>) {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            flag.store(true, Ordering::SeqCst);
        });
        (fired, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_fire() {
        let mut registry = TimerRegistry::new();
        let id = TipId::generate();
        let (fired, handle) = flag_after(Duration::from_millis(10));
        registry.insert(id, handle);

        assert!(registry.cancel(id));
        assert!(!registry.cancel(id));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(registry.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_all_clears_registry() {
        let mut registry = TimerRegistry::new();
        let mut flags = Vec::new();
        for ms in [10, 20, 30] {
            let (fired, handle) = flag_after(Duration::from_millis(ms));
            registry.insert(TipId::generate(), handle);
            flags.push(fired);
        }
        assert_eq!(registry.cancel_all(), 3);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(flags.iter().all(|f| !f.load(Ordering::SeqCst)));
        assert_eq!(registry.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn forget_keeps_timer_running() {
        let mut registry = TimerRegistry::new();
        let id = TipId::generate();
        let (fired, handle) = flag_after(Duration::from_millis(10));
        registry.insert(id, handle);
        assert!(registry.forget(id));
        assert!(!registry.contains(id));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(fired.load(Ordering::SeqCst));
    }
}
