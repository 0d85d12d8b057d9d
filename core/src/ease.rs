use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Easing curves. `PowerN` follows the usual animation-library naming where
/// `power2` is cubic and `power3` quartic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    #[default]
    None,
    Power2In,
    Power2Out,
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::None => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::None => "none",
            Ease::Power2In => "power2.in",
            Ease::Power2Out => "power2.out",
            Ease::Power3Out => "power3.out",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" | "linear" => Ok(Ease::None),
            "power2.in" | "power2-in" => Ok(Ease::Power2In),
            "power2.out" | "power2-out" => Ok(Ease::Power2Out),
            "power3.out" | "power3-out" => Ok(Ease::Power3Out),
            other => Err(ConfigError::UnknownEase(other.to_string())),
        }
    }
}
