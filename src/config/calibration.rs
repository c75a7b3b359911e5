//! Leadscrew calibration for direct axis commands.

use serde::Deserialize;

/// Leadscrew and driver parameters shared by all six actuators.
///
/// One step advances the carriage by
/// `pitch_mm / steps_per_revolution / microstep_divisor` millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Leadscrew pitch in mm per revolution.
    pub leadscrew_pitch_mm: f32,

    /// Driver steps per motor revolution.
    pub steps_per_revolution: u32,

    /// Extra divisor applied by the driver (microstep interpolation).
    pub microstep_divisor: u32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            leadscrew_pitch_mm: 2.0,
            steps_per_revolution: 6400,
            microstep_divisor: 8,
        }
    }
}

impl Calibration {
    /// Carriage travel per step in mm.
    #[inline]
    pub fn mm_per_step(&self) -> f32 {
        self.leadscrew_pitch_mm / self.steps_per_revolution as f32 / self.microstep_divisor as f32
    }

    /// Steps per mm of carriage travel.
    #[inline]
    pub fn steps_per_mm(&self) -> f32 {
        self.steps_per_revolution as f32 * self.microstep_divisor as f32 / self.leadscrew_pitch_mm
    }

    /// Check that the calibration yields a finite, positive ratio.
    pub fn is_valid(&self) -> bool {
        let ratio = self.steps_per_mm();
        self.leadscrew_pitch_mm > 0.0 && ratio.is_finite() && ratio > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_steps_per_mm() {
        let cal = Calibration::default();
        // 6400 * 8 / 2.0 = 25600
        assert_eq!(cal.steps_per_mm(), 25_600.0);
        assert!((cal.mm_per_step() * cal.steps_per_mm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_pitch_is_invalid() {
        let cal = Calibration {
            leadscrew_pitch_mm: 0.0,
            ..Calibration::default()
        };
        assert!(!cal.is_valid());

        let cal = Calibration {
            steps_per_revolution: 0,
            ..Calibration::default()
        };
        assert!(!cal.is_valid());
    }
}
