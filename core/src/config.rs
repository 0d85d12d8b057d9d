use serde::{Deserialize, Serialize};

use crate::ease::Ease;

pub const DEFAULT_SNAP_BUFFER: f64 = 0.02;
pub const DEFAULT_SNAP_DURATION_MIN: f64 = 0.15;
pub const DEFAULT_SNAP_DURATION_MAX: f64 = 0.35;
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 100;
pub const DEFAULT_SCROLL_IDLE_MS: u32 = 90;
pub const DEFAULT_MIN_VIEWPORT_WIDTH: u32 = 768;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("unknown ease '{0}'")]
    UnknownEase(String),
    #[error("snap buffer must be a non-negative number, got {0}")]
    Buffer(f64),
    #[error("snap duration range is inverted: min {min} > max {max}")]
    DurationRange { min: f64, max: f64 },
}

/// Tuning for the global scroll snap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    pub enabled: bool,
    pub buffer: f64,
    pub duration_min: f64,
    pub duration_max: f64,
    pub settle_delay_ms: u32,
    pub scroll_idle_ms: u32,
    pub min_viewport_width: u32,
    pub ease: Ease,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            buffer: DEFAULT_SNAP_BUFFER,
            duration_min: DEFAULT_SNAP_DURATION_MIN,
            duration_max: DEFAULT_SNAP_DURATION_MAX,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            scroll_idle_ms: DEFAULT_SCROLL_IDLE_MS,
            min_viewport_width: DEFAULT_MIN_VIEWPORT_WIDTH,
            ease: Ease::Power2Out,
        }
    }
}

impl SnapSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.buffer.is_finite() || self.buffer < 0.0 {
            return Err(ConfigError::Buffer(self.buffer));
        }
        if self.duration_min > self.duration_max {
            return Err(ConfigError::DurationRange {
                min: self.duration_min,
                max: self.duration_max,
            });
        }
        Ok(())
    }

    pub fn active_for_width(&self, viewport_width: f64) -> bool {
        self.enabled && viewport_width >= f64::from(self.min_viewport_width)
    }

    /// Applies one `key=value` override. The settings are left untouched on error.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        let raw = value.trim();
        match key.trim() {
            "snap" => {
                next.enabled = match raw.to_ascii_lowercase().as_str() {
                    "on" | "1" | "true" => true,
                    "off" | "0" | "false" => false,
                    _ => return Err(invalid(key, value)),
                }
            }
            "snap_buffer" => next.buffer = parse_f64(key, raw)?,
            "snap_min" => next.duration_min = parse_f64(key, raw)?,
            "snap_max" => next.duration_max = parse_f64(key, raw)?,
            "snap_settle_ms" => next.settle_delay_ms = parse_u32(key, raw)?,
            "snap_idle_ms" => next.scroll_idle_ms = parse_u32(key, raw)?,
            "snap_min_width" => next.min_viewport_width = parse_u32(key, raw)?,
            "snap_ease" => next.ease = raw.parse()?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Page-level presentation constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub scrolled_threshold_px: f64,
    pub reveal_fraction: f64,
    pub scrub_lag_secs: f64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
            reveal_fraction: 0.85,
            scrub_lag_secs: 0.6,
        }
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_f64(key: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid(key, raw))
}

fn parse_u32(key: &str, raw: &str) -> Result<u32, ConfigError> {
    raw.parse::<u32>().map_err(|_| invalid(key, raw))
}
