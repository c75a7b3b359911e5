//! Mixing gains and base drive rates.

use serde::Deserialize;

use super::limits::{ClampWindow, StepWindow};
use super::units::{Hertz, StepsPerSecSquared};

/// Linear mixing constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Steps per unit of X/Y/Z/P/R input.
    pub axis_scale: f32,

    /// Steps per mm of uniform height offset.
    pub height_gain: f32,

    /// Safe travel window in mm, scaled by `height_gain`.
    pub clamp: ClampWindow,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            axis_scale: 10.0,
            height_gain: 400.0,
            clamp: ClampWindow::default(),
        }
    }
}

impl KinematicsConfig {
    /// Travel window in steps.
    #[inline]
    pub fn step_window(&self) -> StepWindow {
        self.clamp.to_steps(self.height_gain)
    }
}

/// Base speed and acceleration, scaled per command by the pose multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Base step rate.
    pub speed_hz: Hertz,

    /// Base acceleration.
    pub acceleration: StepsPerSecSquared,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            speed_hz: Hertz(48_000),
            acceleration: StepsPerSecSquared(36_000),
        }
    }
}

impl DriveConfig {
    /// Speed and acceleration for a move with the given multipliers.
    #[inline]
    pub fn scaled(&self, speed_multiplier: f32, accel_multiplier: f32) -> (Hertz, StepsPerSecSquared) {
        (
            self.speed_hz * speed_multiplier,
            self.acceleration * accel_multiplier,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Steps;

    #[test]
    fn test_default_window() {
        let config = KinematicsConfig::default();
        let window = config.step_window();
        assert_eq!(window.min, Steps(0));
        assert_eq!(window.max, Steps(32_000));
    }

    #[test]
    fn test_scaled_drive() {
        let drive = DriveConfig::default();
        let (speed, accel) = drive.scaled(2.0, 3.0);
        assert_eq!(speed, Hertz(96_000));
        assert_eq!(accel, StepsPerSecSquared(108_000));
    }
}
