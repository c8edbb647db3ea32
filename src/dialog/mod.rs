//! Single-slot dialog overlay.
//!
//! # Architecture
//!
//! Uses MVI for the open/closed lifecycle:
//! - `state.rs` - `Closed` / `Open` state
//! - `intent.rs` - lifecycle and focus events
//! - `reducer.rs` - state transitions
//! - `controller.rs` - mounting, callbacks, and the container resource
//! - `options.rs` - caller-facing options and controller defaults

mod controller;
mod intent;
mod options;
mod reducer;
mod state;

pub use controller::DialogController;
pub use intent::DialogIntent;
pub use options::{
    Backdrop, BackdropDefaults, BackdropOptions, Callback, DialogAction, DialogDefaults,
    DialogOptions,
};
pub use reducer::DialogReducer;
pub use state::{DialogState, SessionId};
