//! Quaternion orientation input.
//!
//! Orientation commands arrive as `(w, x, y, z)`. They are normalized,
//! converted to roll/pitch/yaw and folded into the pose mixing inputs.

use core::f32::consts::PI;

use libm::{asinf, atan2f, roundf, sqrtf};

use crate::error::CommandError;

use super::Pose;

/// Orientation quaternion, scalar part first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quaternion {
    /// Scalar part.
    pub w: f32,
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

/// Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Rotation about X.
    pub roll: f32,
    /// Rotation about Y.
    pub pitch: f32,
    /// Rotation about Z.
    pub yaw: f32,
}

impl EulerAngles {
    /// Whole degrees `(roll, pitch, yaw)`, rounded to nearest.
    pub fn to_whole_degrees(self) -> (i32, i32, i32) {
        let deg = |rad: f32| roundf(rad * (180.0 / PI)) as i32;
        (deg(self.roll), deg(self.pitch), deg(self.yaw))
    }
}

impl Quaternion {
    /// Create a quaternion from its components.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f32 {
        sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Unit quaternion with the same rotation.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ZeroNormQuaternion`] when the norm is zero or
    /// not finite.
    pub fn normalized(&self) -> Result<Self, CommandError> {
        let n = self.norm();
        if !(n > 0.0 && n.is_finite()) {
            return Err(CommandError::ZeroNormQuaternion);
        }
        Ok(Self::new(self.w / n, self.x / n, self.y / n, self.z / n))
    }

    /// Roll/pitch/yaw of a unit quaternion.
    pub fn to_euler(&self) -> EulerAngles {
        let Self { w, x, y, z } = *self;

        let roll = atan2f(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y));
        // Clamp guards against |sin| creeping past 1 at gimbal lock
        let pitch = asinf((2.0 * (w * y - z * x)).clamp(-1.0, 1.0));
        let yaw = atan2f(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z));

        EulerAngles { roll, pitch, yaw }
    }
}

/// Replace the mixing angles of `base` with the orientation `q`.
///
/// `angle_x` takes yaw, `angle_y` pitch and `angle_z` roll; the extra
/// roll/pitch terms are zeroed. Height and rate multipliers are kept.
///
/// # Errors
///
/// Returns [`CommandError::ZeroNormQuaternion`] for a zero-norm input.
pub fn orient(base: Pose, q: &Quaternion) -> Result<Pose, CommandError> {
    let (roll, pitch, yaw) = q.normalized()?.to_euler().to_whole_degrees();

    Ok(Pose {
        angle_x: yaw,
        angle_y: pitch,
        angle_z: roll,
        roll: 0,
        pitch: 0,
        ..base
    })
}
