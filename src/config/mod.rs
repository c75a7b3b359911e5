//! Configuration module for stewart-neck.
//!
//! Provides the platform configuration (identity, drive rates, mixing gains,
//! calibration, homing profiles, wiring), loadable from TOML files (with the
//! `std` feature) or built from defaults.

mod calibration;
mod homing;
mod identity;
mod kinematics;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod platform;
pub mod units;
mod validation;
mod wiring;

pub use calibration::Calibration;
pub use homing::{HomingConfig, HomingProfile};
pub use identity::Identity;
pub use kinematics::{DriveConfig, KinematicsConfig};
pub use limits::{ClampPolicy, ClampWindow, StepWindow};
pub use platform::PlatformConfig;
pub use validation::validate_config;
pub use wiring::{ActuatorWiring, WiringTable, DEFAULT_WIRING};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Hertz, Millimeters, Steps, StepsPerSecSquared};
