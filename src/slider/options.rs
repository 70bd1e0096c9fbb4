//! Slider configuration.
//!
//! Options arrive either typed ([`SliderOptions`]) or as an untyped JSON
//! record. Missing keys always fall back to the defaults; a record that is not
//! an object, or does not deserialize, is replaced by the defaults wholesale.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::types::duration_millis;

/// Auto-play on construction.
pub const DEFAULT_AUTO_PLAY: bool = true;

/// Milliseconds between automatic advances.
pub const DEFAULT_INTERVAL_MS: u64 = 2000;

/// Transition speed advertised to stylesheets, in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 2000;

/// Slider configuration record.
///
/// Serialized as `{ "autoPlay": bool, "interval": ms, "speed": ms }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderOptions {
    /// Start rotating as soon as the slider is built.
    pub auto_play: bool,
    /// Rotation interval. Zero disables rotation.
    #[serde(rename = "interval")]
    pub interval_ms: u64,
    /// Transition duration. Stored for stylesheet coordination only; the
    /// slider itself just toggles classes.
    #[serde(rename = "speed")]
    pub speed_ms: u64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            auto_play: DEFAULT_AUTO_PLAY,
            interval_ms: DEFAULT_INTERVAL_MS,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

impl SliderOptions {
    /// Set auto-play.
    pub fn with_auto_play(mut self, auto_play: bool) -> Self {
        self.auto_play = auto_play;
        self
    }

    /// Set the rotation interval (millisecond precision).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = duration_millis(interval);
        self
    }

    /// Set the advertised transition speed (millisecond precision).
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed_ms = duration_millis(speed);
        self
    }

    /// Rotation interval.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Transition speed.
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Resolve optional typed options: `None` means defaults.
    pub fn resolve(options: Option<SliderOptions>) -> Self {
        options.unwrap_or_default()
    }

    /// Resolve an untyped configuration record.
    ///
    /// - object: recognized keys are taken, missing keys defaulted, unknown
    ///   keys ignored
    /// - `null`: defaults
    /// - anything else, or an object with mistyped values: defaults, with a
    ///   warning
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Object(_) => match serde_json::from_value(value.clone()) {
                Ok(options) => options,
                Err(err) => {
                    warn!(error = %err, "invalid slider options; using defaults");
                    Self::default()
                }
            },
            other => {
                warn!(value = %other, "slider options must be an object; using defaults");
                Self::default()
            }
        }
    }
}
