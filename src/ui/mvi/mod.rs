//! Model-View-Intent primitives for overlay state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Fragment
//!    ↑                                 │
//!    └──────── user / lifecycle ───────┘
//! ```
//!
//! Resources (host containers, callbacks) live next to the state in the
//! controller; only plain data passes through the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
