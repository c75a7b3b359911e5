//! Error types for stewart-neck.
//!
//! Configuration errors are the only failures a caller sees as `Err`; command
//! errors are logged, reported on the primary link and the offending command
//! (or pair) is skipped.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stewart-neck operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Command rejected by the dispatcher
    Command(CommandError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Clamp window is empty or inverted (min must be < max)
    InvalidClampWindow {
        /// Lower bound in mm
        min: f32,
        /// Upper bound in mm
        max: f32,
    },
    /// Height gain must be > 0
    InvalidHeightGain(f32),
    /// Axis scale must be finite and non-zero
    InvalidAxisScale(f32),
    /// Base speed must be > 0
    InvalidSpeed(u32),
    /// Base acceleration must be > 0
    InvalidAcceleration(u32),
    /// Leadscrew calibration yields a non-positive steps-per-mm
    InvalidCalibration,
    /// Homing multiplier must be finite and > 0
    InvalidHomingMultiplier(f32),
    /// Wiring table must list exactly six actuators
    WiringCount(usize),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Command dispatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Direct axis pair named a stepper outside 1..=6
    InvalidStepper(i32),
    /// Quaternion command carried fewer than four components
    IncompleteQuaternion {
        /// Number of numeric components found
        found: usize,
    },
    /// Quaternion norm is zero (or not finite)
    ZeroNormQuaternion,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidClampWindow { min, max } => {
                write!(f, "Invalid clamp window: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidHeightGain(v) => write!(f, "Invalid height gain: {}. Must be > 0", v),
            ConfigError::InvalidAxisScale(v) => write!(f, "Invalid axis scale: {}. Must be non-zero", v),
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid base speed: {} Hz. Must be > 0", v),
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "Invalid base acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidCalibration => write!(f, "Invalid leadscrew calibration"),
            ConfigError::InvalidHomingMultiplier(v) => {
                write!(f, "Invalid homing multiplier: {}. Must be > 0", v)
            }
            ConfigError::WiringCount(n) => write!(f, "Expected 6 actuator wiring entries, found {}", n),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidStepper(n) => write!(f, "Invalid stepper number: {}", n),
            CommandError::IncompleteQuaternion { found } => {
                write!(f, "Quaternion needs 4 components, got {}", found)
            }
            CommandError::ZeroNormQuaternion => write!(f, "Quaternion has zero norm"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display() {
        let msg = std::format!("{}", CommandError::InvalidStepper(9));
        assert_eq!(msg, "Invalid stepper number: 9");

        let msg = std::format!("{}", Error::from(CommandError::ZeroNormQuaternion));
        assert_eq!(msg, "Command error: Quaternion has zero norm");
    }
}
