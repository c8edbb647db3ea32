//! Stacked, auto-expiring tips.
//!
//! - `tip.rs` - tip data, ids, duration fallback
//! - `timers.rs` - per-tip expiry timers
//! - `controller.rs` - collection, overlay mount, timer choreography

mod controller;
mod timers;
mod tip;

pub use controller::{TipsController, TipsDefaults};
pub use timers::TimerRegistry;
pub use tip::{effective_duration, Tip, TipId, TipOptions, DEFAULT_TIP_DURATION};
