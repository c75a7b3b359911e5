//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};
use crate::log::log_info;

use super::PlatformConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
///
/// # Example
///
/// ```rust,ignore
/// use stewart_neck::load_config;
///
/// let config = load_config("neck.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlatformConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = truncated(&e.to_string());
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<PlatformConfig> {
    let config: PlatformConfig = toml::from_str(content).map_err(|e| {
        let msg = truncated(e.message());
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    log_info!("configuration loaded");
    Ok(config)
}

fn truncated(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Hertz, Millimeters};

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, PlatformConfig::default());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml = r#"
[identity]
device_key = "NECK-7"

[drive]
speed_hz = 30000

[kinematics.clamp]
max_mm = 60.0
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.identity.device_key.as_str(), "NECK-7");
        assert_eq!(config.identity.bt_name.as_str(), "NECK_BT");
        assert_eq!(config.drive.speed_hz, Hertz(30_000));
        assert_eq!(config.drive.acceleration.value(), 36_000);
        assert_eq!(config.kinematics.clamp.min, Millimeters(0.0));
        assert_eq!(config.kinematics.clamp.max, Millimeters(60.0));
    }

    #[test]
    fn test_parse_rejects_invalid_window() {
        let toml = r#"
[kinematics.clamp]
min_mm = 50.0
max_mm = 10.0
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidClampWindow { .. }))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            parse_config("[drive\nspeed_hz = 1"),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/neck.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
