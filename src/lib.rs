//! # stewart-neck
//!
//! Command protocol, kinematics and homing for a six-actuator Stewart-style
//! motion head.
//!
//! ## Features
//!
//! - **Line protocol**: `|`-batched commands for homing, health, quaternion
//!   orientation, direct axis moves and axis-letter poses
//! - **Linear-mix kinematics**: fixed mixing matrix, uniform height gain and
//!   a clamp window that homing can bypass
//! - **Homing**: soft and brute sequences that re-seat against the hard stop
//!   and re-zero every actuator
//! - **no_std compatible**: core builds on `core`, `heapless` and `libm`
//! - **embedded-hal 1.0**: `DelayNs` for homing settle waits
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stewart_neck::{Controller, PlatformConfig};
//!
//! let config: PlatformConfig = stewart_neck::load_config("neck.toml")?;
//! let mut controller = Controller::new(config, &mut engine, usb, bt, delay, clock);
//!
//! // Brute homing, then serve both links forever
//! controller.start();
//! controller.serve();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): TOML file loading, stdio link and wall-clock uptime
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

mod log;

// Core modules
pub mod actuator;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod homing;
pub mod kinematics;
pub mod protocol;
pub mod sim;
pub mod transport;

// Re-exports for ergonomic API
pub use actuator::{Actuator, ActuatorEngine, ActuatorIndex, ActuatorSet, ActuatorSlot, ACTUATOR_COUNT};
pub use config::{validate_config, ClampPolicy, PlatformConfig};
pub use controller::{Controller, LineSummary};
pub use error::{CommandError, ConfigError, Error, Result};
pub use homing::{HomingMode, HomingSequence, HomingStep};
pub use kinematics::{compute_targets, ActuatorTargetSet, Pose, Quaternion};
pub use protocol::{Command, HealthReport};
pub use transport::Link;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Hertz, Millimeters, Steps, StepsPerSecSquared};
