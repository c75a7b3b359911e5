//! Configuration validation.

use crate::actuator::ACTUATOR_COUNT;
use crate::error::{ConfigError, Error, Result};

use super::PlatformConfig;

/// Validate a platform configuration.
///
/// Checks:
/// - Clamp window is non-empty (min < max)
/// - Height gain is positive and axis scale non-zero
/// - Base speed and acceleration are positive
/// - Leadscrew calibration yields a positive steps-per-mm
/// - Homing multipliers are positive
/// - Exactly six actuators are wired
pub fn validate_config(config: &PlatformConfig) -> Result<()> {
    validate_kinematics(config)?;

    if config.drive.speed_hz.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidSpeed(0)));
    }
    if config.drive.acceleration.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidAcceleration(0)));
    }

    if !config.calibration.is_valid() {
        return Err(Error::Config(ConfigError::InvalidCalibration));
    }

    for profile in config.homing.profiles() {
        profile
            .multipliers_valid()
            .map_err(|m| Error::Config(ConfigError::InvalidHomingMultiplier(m)))?;
    }

    if config.actuators.len() != ACTUATOR_COUNT {
        return Err(Error::Config(ConfigError::WiringCount(config.actuators.len())));
    }

    Ok(())
}

fn validate_kinematics(config: &PlatformConfig) -> Result<()> {
    let kin = &config.kinematics;

    if !(kin.height_gain > 0.0 && kin.height_gain.is_finite()) {
        return Err(Error::Config(ConfigError::InvalidHeightGain(kin.height_gain)));
    }

    if kin.axis_scale == 0.0 || !kin.axis_scale.is_finite() {
        return Err(Error::Config(ConfigError::InvalidAxisScale(kin.axis_scale)));
    }

    if !kin.clamp.is_valid() {
        return Err(Error::Config(ConfigError::InvalidClampWindow {
            min: kin.clamp.min.0,
            max: kin.clamp.max.0,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Hertz, Millimeters};
    use crate::config::ClampWindow;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PlatformConfig::default()).is_ok());
    }

    #[test]
    fn test_inverted_clamp_window() {
        let mut config = PlatformConfig::default();
        config.kinematics.clamp = ClampWindow::new(Millimeters(80.0), Millimeters(0.0));

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidClampWindow { .. }))
        ));
    }

    #[test]
    fn test_zero_speed() {
        let mut config = PlatformConfig::default();
        config.drive.speed_hz = Hertz(0);

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSpeed(0)))
        );
    }

    #[test]
    fn test_missing_actuator_wiring() {
        let mut config = PlatformConfig::default();
        config.actuators.pop();

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::WiringCount(5)))
        );
    }

    #[test]
    fn test_negative_homing_multiplier() {
        let mut config = PlatformConfig::default();
        config.homing.brute_main.speed_multiplier = -3.0;

        assert_eq!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidHomingMultiplier(-3.0)))
        );
    }
}
