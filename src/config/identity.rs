//! Controller identity advertised in health reports.

use heapless::String;
use serde::Deserialize;

/// Identity and link parameters reported by `HEALTH`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Identity {
    /// Device discovery key.
    pub device_key: String<32>,

    /// Controller role within the robot.
    pub role: String<32>,

    /// Wire protocol version.
    pub protocol_version: u16,

    /// Wired link baud rate.
    pub baud: u32,

    /// Wireless link service name.
    pub bt_name: String<32>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            device_key: String::try_from("STEWART_NECK").unwrap_or_default(),
            role: String::try_from("neck").unwrap_or_default(),
            protocol_version: 2,
            baud: 115_200,
            bt_name: String::try_from("NECK_BT").unwrap_or_default(),
        }
    }
}
