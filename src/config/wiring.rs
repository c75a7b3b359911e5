//! Actuator wiring table.

use heapless::Vec;
use serde::Deserialize;

use crate::actuator::ACTUATOR_COUNT;

/// Pins for one actuator channel, handed to the driver engine on connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorWiring {
    /// STEP pulse pin.
    pub step_pin: u8,

    /// Direction pin.
    pub dir_pin: u8,

    /// Driver enable pin (may be shared).
    #[serde(default = "default_enable_pin")]
    pub enable_pin: u8,

    /// Let the driver enable/disable the coil around moves.
    #[serde(default = "default_auto_enable")]
    pub auto_enable: bool,
}

fn default_enable_pin() -> u8 {
    25
}

fn default_auto_enable() -> bool {
    true
}

impl ActuatorWiring {
    /// Wiring with the shared enable pin and auto-enable.
    pub const fn new(step_pin: u8, dir_pin: u8) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin: 25,
            auto_enable: true,
        }
    }
}

/// Default board wiring, actuator 1 first.
pub const DEFAULT_WIRING: [ActuatorWiring; ACTUATOR_COUNT] = [
    ActuatorWiring::new(33, 32),
    ActuatorWiring::new(18, 26),
    ActuatorWiring::new(23, 14),
    ActuatorWiring::new(19, 27),
    ActuatorWiring::new(22, 12),
    ActuatorWiring::new(21, 13),
];

/// Wiring table as deserialized; validation requires exactly six entries.
pub type WiringTable = Vec<ActuatorWiring, 8>;

pub(crate) fn default_wiring() -> WiringTable {
    DEFAULT_WIRING.iter().copied().collect()
}
