//! Health/discovery line.

use core::fmt::{self, Write};

use heapless::String;

use crate::actuator::ACTUATOR_COUNT;
use crate::config::units::{Hertz, StepsPerSecSquared};
use crate::config::{ClampPolicy, Identity};

/// Snapshot of the values reported by `HEALTH`.
///
/// The field order of the formatted line is fixed; consumers parse it
/// positionally.
#[derive(Debug, Clone, Copy)]
pub struct HealthReport<'a> {
    /// Controller identity.
    pub identity: &'a Identity,
    /// Milliseconds since start.
    pub uptime_ms: u64,
    /// Base step rate.
    pub speed: Hertz,
    /// Base acceleration.
    pub acceleration: StepsPerSecSquared,
    /// Policy ordinary commands run under.
    pub clamp: ClampPolicy,
}

impl HealthReport<'_> {
    /// Render the line, without terminator.
    pub fn format(&self) -> String<256> {
        let mut line = String::new();
        // Identity strings are capped at 32 bytes, so the line always fits
        let _ = write!(line, "{}", self);
        line
    }
}

impl fmt::Display for HealthReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HEALTH|DEVICE={}|ROLE={}|PROTO={}|UPTIME_MS={}|BAUD={}|BT_NAME={}|MOTORS={}|SPEED_HZ={}|ACCEL={}|BYPASS_CLAMP={}",
            self.identity.device_key,
            self.identity.role,
            self.identity.protocol_version,
            self.uptime_ms,
            self.identity.baud,
            self.identity.bt_name,
            ACTUATOR_COUNT,
            self.speed.value(),
            self.acceleration.value(),
            self.clamp.as_flag(),
        )
    }
}
