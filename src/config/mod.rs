//! Controller defaults loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AttachSetting, Config, DialogConfig, TipsConfig};
