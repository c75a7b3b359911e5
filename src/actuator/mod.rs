//! Actuator collaborator interface.
//!
//! The core never generates step pulses. It talks to six linear actuators
//! through the [`Actuator`] trait and keeps each one in an [`ActuatorSlot`]
//! so that a channel the driver could not connect is a silent no-op.

mod index;
mod set;

pub use index::ActuatorIndex;
pub use set::{ActuatorSet, ActuatorSlot};

use crate::config::units::{Hertz, Steps, StepsPerSecSquared};
use crate::config::ActuatorWiring;

/// Number of actuators on the platform.
pub const ACTUATOR_COUNT: usize = 6;

/// One connected linear actuator, as exposed by the step driver.
pub trait Actuator {
    /// Assign the direction pin.
    fn set_direction_pin(&mut self, pin: u8);

    /// Assign the driver enable pin.
    fn set_enable_pin(&mut self, pin: u8);

    /// Let the driver power the coils only while moving.
    fn set_auto_enable(&mut self, enabled: bool);

    /// Set the cruise step rate for subsequent moves.
    fn set_speed(&mut self, speed: Hertz);

    /// Set the acceleration for subsequent moves.
    fn set_acceleration(&mut self, acceleration: StepsPerSecSquared);

    /// Start a move to an absolute target.
    fn move_to(&mut self, target: Steps);

    /// Redefine the current position without moving.
    fn set_current_position(&mut self, position: Steps);
}

/// Step engine that hands out actuators for wired channels.
pub trait ActuatorEngine {
    /// Actuator handle type.
    type Actuator: Actuator;

    /// Connect the channel described by `wiring`.
    ///
    /// Returns `None` when the channel cannot be driven (no free timer,
    /// invalid pin); the slot is then left absent.
    fn connect(&mut self, wiring: &ActuatorWiring) -> Option<Self::Actuator>;
}
