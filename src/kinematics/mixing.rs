//! Fixed linear mixing from pose to actuator targets.

use crate::actuator::{ActuatorIndex, ACTUATOR_COUNT};
use crate::config::units::Steps;
use crate::config::{ClampPolicy, KinematicsConfig};

use super::Pose;

/// Mixing coefficients per actuator on `[X, Y, Z, P, R]`.
///
/// Row order is the physical wiring order and must not be permuted: pure
/// yaw, lateral and longitudinal inputs each push three actuators up and the
/// mirrored three down.
pub const MIXING_MATRIX: [[i8; 5]; ACTUATOR_COUNT] = [
    [-1, 1, 1, 1, 1],
    [1, -1, -1, 1, 1],
    [-1, -1, -1, -1, 1],
    [1, 1, -1, -1, -1],
    [-1, 1, -1, 1, -1],
    [1, -1, 1, 1, -1],
];

/// Six actuator targets, actuator 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorTargetSet([Steps; ACTUATOR_COUNT]);

impl ActuatorTargetSet {
    /// Wrap raw targets.
    #[inline]
    pub const fn new(targets: [Steps; ACTUATOR_COUNT]) -> Self {
        Self(targets)
    }

    /// Target for one actuator.
    #[inline]
    pub fn get(&self, index: ActuatorIndex) -> Steps {
        self.0[index.slot()]
    }

    /// Targets as a plain array.
    #[inline]
    pub fn as_array(&self) -> &[Steps; ACTUATOR_COUNT] {
        &self.0
    }

    /// Iterate `(index, target)` pairs in wiring order.
    pub fn iter(&self) -> impl Iterator<Item = (ActuatorIndex, Steps)> + '_ {
        ActuatorIndex::all().zip(self.0.iter().copied())
    }

    fn map(self, f: impl Fn(Steps) -> Steps) -> Self {
        Self(self.0.map(f))
    }
}

/// Unclamped targets for a pose.
pub fn raw_targets(pose: &Pose, config: &KinematicsConfig) -> ActuatorTargetSet {
    let inputs = [
        pose.angle_x as f32,
        pose.angle_y as f32,
        pose.angle_z as f32,
        pose.pitch as f32,
        pose.roll as f32,
    ];
    let height = Steps::saturating_from_f32(pose.height_offset as f32 * config.height_gain);

    let targets = MIXING_MATRIX.map(|row| {
        let mix: f32 = row
            .iter()
            .zip(inputs.iter())
            .map(|(&coeff, &input)| coeff as f32 * input * config.axis_scale)
            .sum();
        Steps::saturating_from_f32(mix) + height
    });

    ActuatorTargetSet(targets)
}

/// Targets for a pose under a clamp policy.
///
/// With [`ClampPolicy::Enforce`] every target saturates to the configured
/// travel window; with [`ClampPolicy::Bypass`] raw targets pass through.
pub fn compute_targets(
    pose: &Pose,
    config: &KinematicsConfig,
    policy: ClampPolicy,
) -> ActuatorTargetSet {
    let window = config.step_window();
    raw_targets(pose, config).map(|t| window.apply(t, policy))
}
