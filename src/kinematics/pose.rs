//! Platform pose.

/// Abstract platform posture plus per-move rate multipliers.
///
/// Angles, height, roll and pitch are whole units as received on the wire;
/// the multipliers scale the base speed and acceleration for this move only.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pose {
    /// Yaw-like rotation (`X`).
    pub angle_x: i32,
    /// Lateral translation-like input (`Y`).
    pub angle_y: i32,
    /// Front/back translation-like input (`Z`).
    pub angle_z: i32,
    /// Uniform height offset in mm (`H`).
    pub height_offset: i32,
    /// Roll / tilt (`R`).
    pub roll: i32,
    /// Pitch / chin up (`P`).
    pub pitch: i32,
    /// Speed multiplier (`S`).
    pub speed_multiplier: f32,
    /// Acceleration multiplier (`A`).
    pub accel_multiplier: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            angle_x: 0,
            angle_y: 0,
            angle_z: 0,
            height_offset: 0,
            roll: 0,
            pitch: 0,
            speed_multiplier: 1.0,
            accel_multiplier: 1.0,
        }
    }
}

impl Pose {
    /// Neutral pose raised or lowered by `height_mm`.
    pub fn at_height(height_mm: i32) -> Self {
        Self {
            height_offset: height_mm,
            ..Self::default()
        }
    }

    /// Same pose with different rate multipliers.
    pub fn with_rates(self, speed_multiplier: f32, accel_multiplier: f32) -> Self {
        Self {
            speed_multiplier,
            accel_multiplier,
            ..self
        }
    }
}
