//! Shared overlay plumbing: where to paint, what to mount, and the throwaway
//! node that hosts it.

pub mod attach;
pub mod bridge;
mod container;

pub use attach::{resolve, AttachmentTarget, DEFAULT_HOST_SELECTOR};
pub use container::HostContainer;
