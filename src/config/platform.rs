//! Platform configuration - root configuration structure.

use serde::Deserialize;

use super::calibration::Calibration;
use super::homing::HomingConfig;
use super::identity::Identity;
use super::kinematics::{DriveConfig, KinematicsConfig};
use super::wiring::{default_wiring, ActuatorWiring, WiringTable};

/// Root configuration structure from TOML.
///
/// Every section is optional; an empty document yields the stock platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Identity advertised by `HEALTH`.
    pub identity: Identity,

    /// Base step rate and acceleration.
    pub drive: DriveConfig,

    /// Mixing gains and travel window.
    pub kinematics: KinematicsConfig,

    /// Leadscrew calibration for direct axis commands.
    pub calibration: Calibration,

    /// Homing profiles.
    pub homing: HomingConfig,

    /// Actuator wiring, actuator 1 first.
    pub actuators: WiringTable,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            identity: Identity::default(),
            drive: DriveConfig::default(),
            kinematics: KinematicsConfig::default(),
            calibration: Calibration::default(),
            homing: HomingConfig::default(),
            actuators: default_wiring(),
        }
    }
}

impl PlatformConfig {
    /// Wiring for actuator `index` (1-based).
    pub fn wiring(&self, index: usize) -> Option<&ActuatorWiring> {
        index.checked_sub(1).and_then(|i| self.actuators.get(i))
    }
}
