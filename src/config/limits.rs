//! Travel window and clamp policy.

use serde::Deserialize;

use super::units::{Millimeters, Steps};

/// How computed pose targets are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClampPolicy {
    /// Saturate targets to the travel window.
    #[default]
    Enforce,
    /// Pass raw targets through, negative values included (homing only).
    Bypass,
}

impl ClampPolicy {
    /// Flag value used on the wire: 1 when bypassing.
    #[inline]
    pub fn as_flag(self) -> u8 {
        match self {
            ClampPolicy::Enforce => 0,
            ClampPolicy::Bypass => 1,
        }
    }
}

/// Safe travel window in millimetres (from configuration).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClampWindow {
    /// Lowest allowed height in mm.
    #[serde(rename = "min_mm")]
    pub min: Millimeters,

    /// Highest allowed height in mm.
    #[serde(rename = "max_mm")]
    pub max: Millimeters,
}

impl Default for ClampWindow {
    fn default() -> Self {
        Self {
            min: Millimeters(0.0),
            max: Millimeters(80.0),
        }
    }
}

impl ClampWindow {
    /// Create a new window.
    pub fn new(min: Millimeters, max: Millimeters) -> Self {
        Self { min, max }
    }

    /// Check if the window is valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min.0 < self.max.0
    }

    /// Convert to step units using the height gain (steps per mm of height).
    pub fn to_steps(&self, height_gain: f32) -> StepWindow {
        StepWindow {
            min: Steps::saturating_from_f32(self.min.0 * height_gain),
            max: Steps::saturating_from_f32(self.max.0 * height_gain),
        }
    }
}

/// Travel window converted to steps (for runtime use).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWindow {
    /// Minimum target in steps.
    pub min: Steps,
    /// Maximum target in steps.
    pub max: Steps,
}

impl StepWindow {
    /// Check if a target is within the window.
    pub fn contains(&self, target: Steps) -> bool {
        target >= self.min && target <= self.max
    }

    /// Apply a clamp policy to a raw target.
    ///
    /// Out-of-window targets saturate to the nearest bound; they are never
    /// rejected.
    pub fn apply(&self, target: Steps, policy: ClampPolicy) -> Steps {
        match policy {
            ClampPolicy::Enforce => target.clamp(self.min, self.max),
            ClampPolicy::Bypass => target,
        }
    }
}
