//! Pose-to-actuator kinematics.
//!
//! A fixed linear mixing approximation (not geometric inverse kinematics):
//! five pose inputs are mixed per actuator, a uniform height offset is added
//! and the result is bounded by the clamp policy passed in by the caller.

mod mixing;
mod pose;
mod quaternion;

pub use mixing::{compute_targets, raw_targets, ActuatorTargetSet, MIXING_MATRIX};
pub use pose::Pose;
pub use quaternion::{orient, EulerAngles, Quaternion};
