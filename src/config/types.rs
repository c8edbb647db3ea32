use serde::{Deserialize, Serialize};

use crate::overlay::AttachmentTarget;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dialog: DialogConfig,
    #[serde(default)]
    pub tips: TipsConfig,
}

/// Where an overlay paints: `true` for the root, a selector string for a
/// named region, `false` (or absent) to paint in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttachSetting {
    Enabled(bool),
    Selector(String),
}

impl AttachSetting {
    pub fn target(&self) -> Option<AttachmentTarget> {
        match self {
            AttachSetting::Enabled(true) => Some(AttachmentTarget::DefaultHost),
            AttachSetting::Enabled(false) => None,
            AttachSetting::Selector(selector) => Some(AttachmentTarget::selector(selector.clone())),
        }
    }
}

/// Dialog controller defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub attach: Option<AttachSetting>,
    /// Paint a backdrop behind dialogs that do not configure one.
    #[serde(default = "default_backdrop")]
    pub backdrop: bool,
    /// Any colour ratatui can parse ("black", "#202020", "8").
    #[serde(default = "default_backdrop_color")]
    pub backdrop_color: String,
    #[serde(default)]
    pub backdrop_blur: u8,
    #[serde(default)]
    pub close_on_backdrop_click: bool,
}

/// Tips controller defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipsConfig {
    #[serde(default)]
    pub attach: Option<AttachSetting>,
    /// Falls back to 5000 ms when unset.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
}

fn default_backdrop() -> bool {
    true
}

fn default_backdrop_color() -> String {
    "black".to_string()
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            attach: None,
            backdrop: default_backdrop(),
            backdrop_color: default_backdrop_color(),
            backdrop_blur: 0,
            close_on_backdrop_click: false,
        }
    }
}
