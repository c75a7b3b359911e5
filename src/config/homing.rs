//! Homing profiles from configuration.

use core::fmt::Write;

use heapless::String;
use serde::Deserialize;

use crate::kinematics::Pose;

/// One homing phase: drive every actuator to a height extreme, then wait.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HomingProfile {
    /// Uniform height offset in mm (negative drives below nominal zero).
    pub height_mm: i32,

    /// Speed multiplier applied to the base step rate.
    #[serde(default = "default_multiplier")]
    pub speed_multiplier: f32,

    /// Acceleration multiplier applied to the base acceleration.
    #[serde(default = "default_multiplier")]
    pub accel_multiplier: f32,

    /// Time allowed for physical travel before re-zeroing (milliseconds).
    pub settle_ms: u32,
}

fn default_multiplier() -> f32 {
    1.0
}

impl HomingProfile {
    /// Create a new profile.
    pub const fn new(height_mm: i32, speed_multiplier: f32, accel_multiplier: f32, settle_ms: u32) -> Self {
        Self {
            height_mm,
            speed_multiplier,
            accel_multiplier,
            settle_ms,
        }
    }

    /// Pose this phase drives to: neutral posture at `height_mm`, with the
    /// profile's rate multipliers.
    pub fn pose(&self) -> Pose {
        Pose::at_height(self.height_mm).with_rates(self.speed_multiplier, self.accel_multiplier)
    }

    /// General movement command equivalent to this profile, e.g. `H-40,S2,A2`.
    ///
    /// Returns `None` if the rendered multipliers do not fit.
    pub fn command(&self) -> Option<String<48>> {
        let mut cmd = String::new();
        write!(
            cmd,
            "H{},S{},A{}",
            self.height_mm, self.speed_multiplier, self.accel_multiplier
        )
        .ok()?;
        Some(cmd)
    }

    /// Check that both multipliers are finite and positive.
    pub fn multipliers_valid(&self) -> Result<(), f32> {
        for m in [self.speed_multiplier, self.accel_multiplier] {
            if !m.is_finite() || m <= 0.0 {
                return Err(m);
            }
        }
        Ok(())
    }
}

/// Homing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomingConfig {
    /// Single-phase soft homing.
    pub soft: HomingProfile,

    /// First phase of brute homing.
    pub brute_prep: HomingProfile,

    /// Second (deepest) phase of brute homing.
    pub brute_main: HomingProfile,

    /// Pause between the brute phases (milliseconds).
    pub phase_pause_ms: u32,

    /// Run brute homing once at startup before accepting commands.
    pub home_on_startup: bool,
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            soft: HomingProfile::new(-40, 2.0, 2.0, 2200),
            brute_prep: HomingProfile::new(-55, 2.5, 2.5, 2300),
            brute_main: HomingProfile::new(-80, 3.0, 3.0, 2600),
            phase_pause_ms: 250,
            home_on_startup: true,
        }
    }
}

impl HomingConfig {
    /// All configured profiles.
    pub fn profiles(&self) -> [&HomingProfile; 3] {
        [&self.soft, &self.brute_prep, &self.brute_main]
    }
}
