pub mod app;
pub mod layout;
pub mod mvi;
pub mod paint;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
