//! Tip data and id generation.

use std::fmt;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use ratatui::style::Color;
use uuid::Uuid;

/// Duration used when neither the tip nor the controller sets one.
pub const DEFAULT_TIP_DURATION: Duration = Duration::from_millis(5000);

const RANDOM_BITS: u32 = 20;

/// Identifier of a live tip.
///
/// Built from a monotonic clock sample and a random tie-breaker. Practically
/// unique for the life of the process; not formally collision-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TipId(u64);

impl TipId {
    pub fn generate() -> Self {
        static EPOCH: OnceLock<Instant> = OnceLock::new();
        let micros = EPOCH.get_or_init(Instant::now).elapsed().as_micros() as u64;
        let random = (Uuid::new_v4().as_u128() as u64) & ((1 << RANDOM_BITS) - 1);
        Self((micros << RANDOM_BITS) | random)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// What a caller asks to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipOptions {
    pub content: String,
    pub text_color: Option<Color>,
    pub duration: Option<Duration>,
}

impl TipOptions {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_color: None,
            duration: None,
        }
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl From<&str> for TipOptions {
    fn from(content: &str) -> Self {
        TipOptions::new(content)
    }
}

impl From<String> for TipOptions {
    fn from(content: String) -> Self {
        TipOptions::new(content)
    }
}

/// A live tip in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub id: TipId,
    pub content: String,
    pub text_color: Option<Color>,
    /// Effective time until auto-removal.
    pub duration: Duration,
}

/// Tip duration wins over the controller default, which wins over
/// [`DEFAULT_TIP_DURATION`].
pub fn effective_duration(tip: Option<Duration>, controller: Option<Duration>) -> Duration {
    tip.or(controller).unwrap_or(DEFAULT_TIP_DURATION)
}
