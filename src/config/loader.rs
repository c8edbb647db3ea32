use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::style::Color;
use thiserror::Error;

use crate::config::types::{AttachSetting, Config, DialogConfig, TipsConfig};
use crate::dialog::{BackdropDefaults, DialogDefaults};
use crate::tips::TipsDefaults;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tui-overlays/config.toml` on Unix/macOS, or the
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config directory is known.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tui-overlays").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The backdrop colour parses
    /// - Attachment selectors are not blank
    /// - The default tip duration is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_color(&self.dialog.backdrop_color)?;
        check_attach("dialog.attach", self.dialog.attach.as_ref())?;
        check_attach("tips.attach", self.tips.attach.as_ref())?;

        if self.tips.default_duration_ms == Some(0) {
            return Err(ConfigError::ValidationError {
                message: "tips.default_duration_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

impl DialogConfig {
    pub fn defaults(&self) -> Result<DialogDefaults, ConfigError> {
        Ok(DialogDefaults {
            attach: self.attach.as_ref().and_then(AttachSetting::target),
            backdrop: BackdropDefaults {
                enabled: self.backdrop,
                color: parse_color(&self.backdrop_color)?,
                blur: self.backdrop_blur,
                close_on_click: self.close_on_backdrop_click,
            },
        })
    }
}

impl TipsConfig {
    pub fn defaults(&self) -> TipsDefaults {
        TipsDefaults {
            attach: self.attach.as_ref().and_then(AttachSetting::target),
            default_duration: self.default_duration_ms.map(Duration::from_millis),
        }
    }
}

fn parse_color(value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::ValidationError {
            message: format!("Unknown colour '{}'", value),
        })
}

fn check_attach(field: &str, setting: Option<&AttachSetting>) -> Result<(), ConfigError> {
    if let Some(AttachSetting::Selector(selector)) = setting {
        if selector.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!("{} selector must not be empty", field),
            });
        }
    }
    Ok(())
}
