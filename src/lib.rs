//! Imperative dialog and tip overlays for ratatui applications.
//!
//! Overlays are mounted into throwaway nodes of a retained [`host::UiTree`],
//! optionally relocated into a named region, and torn down when they close.

pub mod config;
pub mod dialog;
pub mod error;
pub mod host;
pub mod overlay;
pub mod tips;
pub mod ui;

pub use dialog::{DialogController, DialogOptions};
pub use error::OverlayError;
pub use tips::{TipOptions, TipsController};
