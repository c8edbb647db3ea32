//! Options accepted by [`DialogController::open`](super::DialogController::open).

use std::fmt;

use ratatui::style::Color;

use crate::error::OverlayError;
use crate::host::BackdropStyle;
use crate::overlay::AttachmentTarget;
use crate::ui::theme::BACKDROP;

/// Completion hook run when the user picks an outcome.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// A dialog button: its label and what runs when it is chosen.
pub struct DialogAction {
    pub label: String,
    pub on_complete: Option<Callback>,
}

impl DialogAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_complete: None,
        }
    }

    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for DialogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogAction")
            .field("label", &self.label)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Backdrop settings for one dialog. Unset fields fall back to the
/// controller's [`BackdropDefaults`].
#[derive(Default)]
pub struct BackdropOptions {
    pub color: Option<Color>,
    pub blur: Option<u8>,
    pub close_on_click: Option<bool>,
    /// Only runs when the backdrop closes the dialog on click.
    pub on_backdrop_click: Option<Callback>,
}

impl BackdropOptions {
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn blur(mut self, blur: u8) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn close_on_click(mut self, close: bool) -> Self {
        self.close_on_click = Some(close);
        self
    }

    pub fn on_backdrop_click<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_backdrop_click = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for BackdropOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackdropOptions")
            .field("color", &self.color)
            .field("blur", &self.blur)
            .field("close_on_click", &self.close_on_click)
            .field("on_backdrop_click", &self.on_backdrop_click.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub enum Backdrop {
    Off,
    On(BackdropOptions),
}

#[derive(Debug)]
pub struct DialogOptions {
    pub title: Option<String>,
    pub content: Vec<String>,
    pub confirm: DialogAction,
    pub cancel: Option<DialogAction>,
    /// `None` uses the controller default.
    pub backdrop: Option<Backdrop>,
    /// Overrides the controller's default attachment target.
    pub attach: Option<AttachmentTarget>,
}

impl DialogOptions {
    pub fn new<I, S>(content: I, confirm: DialogAction) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: None,
            content: content.into_iter().map(Into::into).collect(),
            confirm,
            cancel: None,
            backdrop: None,
            attach: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn cancel(mut self, cancel: DialogAction) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = Some(backdrop);
        self
    }

    pub fn attach(mut self, target: impl Into<AttachmentTarget>) -> Self {
        self.attach = Some(target.into());
        self
    }

    /// Reject options that would render a broken dialog.
    pub fn validate(&self) -> Result<(), OverlayError> {
        if self.confirm.label.trim().is_empty() {
            return Err(OverlayError::invalid("confirm label must not be empty"));
        }
        if let Some(cancel) = &self.cancel {
            if cancel.label.trim().is_empty() {
                return Err(OverlayError::invalid("cancel label must not be empty"));
            }
        }
        Ok(())
    }
}

/// Controller-wide backdrop settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackdropDefaults {
    pub enabled: bool,
    pub color: Color,
    pub blur: u8,
    pub close_on_click: bool,
}

impl Default for BackdropDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            color: BACKDROP,
            blur: 0,
            close_on_click: false,
        }
    }
}

/// Controller-wide dialog settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogDefaults {
    pub attach: Option<AttachmentTarget>,
    pub backdrop: BackdropDefaults,
}

/// Backdrop behavior of one open dialog after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedBackdrop {
    pub style: Option<BackdropStyle>,
    pub close_on_click: bool,
}

impl ResolvedBackdrop {
    pub(crate) fn resolve(backdrop: Option<&Backdrop>, defaults: &BackdropDefaults) -> Self {
        match backdrop {
            Some(Backdrop::Off) => Self {
                style: None,
                close_on_click: false,
            },
            Some(Backdrop::On(options)) => Self {
                style: Some(BackdropStyle {
                    color: options.color.unwrap_or(defaults.color),
                    blur: options.blur.unwrap_or(defaults.blur),
                }),
                close_on_click: options.close_on_click.unwrap_or(defaults.close_on_click),
            },
            None if defaults.enabled => Self {
                style: Some(BackdropStyle {
                    color: defaults.color,
                    blur: defaults.blur,
                }),
                close_on_click: defaults.close_on_click,
            },
            None => Self {
                style: None,
                close_on_click: false,
            },
        }
    }
}
