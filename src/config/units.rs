//! Unit types for physical quantities.
//!
//! Keeps millimetre travel, actuator steps and drive rates apart at compile
//! time so a mm value can never be handed to `move_to` unconverted.

use core::ops::{Add, Mul};

use serde::Deserialize;

/// Linear travel in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f32);

impl Millimeters {
    /// Create a new Millimeters value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to steps, rounding to the nearest step.
    #[inline]
    pub fn to_steps(self, steps_per_mm: f32) -> Steps {
        Steps::saturating_from_f32(libm::roundf(self.0 * steps_per_mm))
    }
}

/// Actuator position in device-native steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub i32);

impl Steps {
    /// The zero position.
    pub const ZERO: Steps = Steps(0);

    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Convert a float step count, truncating toward zero and saturating at
    /// the `i32` range (NaN maps to zero).
    #[inline]
    pub fn saturating_from_f32(value: f32) -> Self {
        Self(value as i32)
    }

    /// Bound to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Steps, max: Steps) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Step rate in steps per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hertz(pub u32);

impl Hertz {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Mul<f32> for Hertz {
    type Output = Self;

    /// Scale by a multiplier; negative or NaN results become 0.
    fn mul(self, rhs: f32) -> Self::Output {
        Self((self.0 as f32 * rhs) as u32)
    }
}

/// Step acceleration in steps per second squared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct StepsPerSecSquared(pub u32);

impl StepsPerSecSquared {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Mul<f32> for StepsPerSecSquared {
    type Output = Self;

    /// Scale by a multiplier; negative or NaN results become 0.
    fn mul(self, rhs: f32) -> Self::Output {
        Self((self.0 as f32 * rhs) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_steps_rounds() {
        assert_eq!(Millimeters(30.0).to_steps(25600.0), Steps(768_000));
        assert_eq!(Millimeters(0.00003).to_steps(25600.0), Steps(1));
        assert_eq!(Millimeters(-1.5).to_steps(2.0), Steps(-3));
    }

    #[test]
    fn test_steps_saturate() {
        assert_eq!(Steps::saturating_from_f32(1.0e12), Steps(i32::MAX));
        assert_eq!(Steps::saturating_from_f32(-1.0e12), Steps(i32::MIN));
        assert_eq!(Steps::saturating_from_f32(f32::NAN), Steps(0));
        assert_eq!(Steps(i32::MAX) + Steps(1), Steps(i32::MAX));
    }

    #[test]
    fn test_rate_scaling() {
        assert_eq!(Hertz(48_000) * 2.0, Hertz(96_000));
        assert_eq!(StepsPerSecSquared(36_000) * 2.5, StepsPerSecSquared(90_000));
        assert_eq!(Hertz(48_000) * -1.0, Hertz(0));
    }
}
