//! The six actuator slots.

use crate::config::units::{Hertz, Steps, StepsPerSecSquared};
use crate::config::{ActuatorWiring, DriveConfig};
use crate::kinematics::ActuatorTargetSet;
use crate::log::{log_debug, log_warn};

use super::{Actuator, ActuatorEngine, ActuatorIndex, ACTUATOR_COUNT};

/// An actuator channel that either connected or did not.
#[derive(Debug)]
pub enum ActuatorSlot<A> {
    /// Driver handed out a handle for this channel.
    Connected(A),
    /// Channel could not be connected; every operation is a no-op.
    Absent,
}

impl<A: Actuator> ActuatorSlot<A> {
    /// Borrow the actuator if connected.
    #[inline]
    pub fn actuator(&self) -> Option<&A> {
        match self {
            ActuatorSlot::Connected(a) => Some(a),
            ActuatorSlot::Absent => None,
        }
    }

    /// Check whether the slot holds an actuator.
    #[inline]
    pub fn is_connected(&self) -> bool {
        matches!(self, ActuatorSlot::Connected(_))
    }

    /// Run `op` on the actuator; nothing happens when absent.
    #[inline]
    pub fn with(&mut self, op: impl FnOnce(&mut A)) {
        match self {
            ActuatorSlot::Connected(a) => op(a),
            ActuatorSlot::Absent => {}
        }
    }
}

impl<A> From<Option<A>> for ActuatorSlot<A> {
    fn from(handle: Option<A>) -> Self {
        match handle {
            Some(a) => ActuatorSlot::Connected(a),
            None => ActuatorSlot::Absent,
        }
    }
}

/// All six actuators, actuator 1 first.
#[derive(Debug)]
pub struct ActuatorSet<A> {
    slots: [ActuatorSlot<A>; ACTUATOR_COUNT],
}

impl<A: Actuator> ActuatorSet<A> {
    /// Build a set from pre-connected slots.
    pub fn from_slots(slots: [ActuatorSlot<A>; ACTUATOR_COUNT]) -> Self {
        Self { slots }
    }

    /// Connect and configure every wired channel.
    ///
    /// Each connected actuator gets its direction and enable pins, the
    /// auto-enable policy and the base drive rates. Channels without wiring
    /// or that the engine refuses stay absent.
    pub fn connect<E>(engine: &mut E, wiring: &[ActuatorWiring], drive: &DriveConfig) -> Self
    where
        E: ActuatorEngine<Actuator = A>,
    {
        let slots = core::array::from_fn(|slot| {
            let Some(w) = wiring.get(slot) else {
                log_warn!("actuator {} has no wiring", slot + 1);
                return ActuatorSlot::Absent;
            };

            match engine.connect(w) {
                Some(mut actuator) => {
                    actuator.set_direction_pin(w.dir_pin);
                    actuator.set_enable_pin(w.enable_pin);
                    actuator.set_auto_enable(w.auto_enable);
                    actuator.set_speed(drive.speed_hz);
                    actuator.set_acceleration(drive.acceleration);
                    log_debug!("actuator {} connected on step pin {}", slot + 1, w.step_pin);
                    ActuatorSlot::Connected(actuator)
                }
                None => {
                    log_warn!("actuator {} failed to connect", slot + 1);
                    ActuatorSlot::Absent
                }
            }
        });

        Self { slots }
    }

    /// Borrow a slot.
    #[inline]
    pub fn slot(&self, index: ActuatorIndex) -> &ActuatorSlot<A> {
        &self.slots[index.slot()]
    }

    /// Borrow a connected actuator.
    #[inline]
    pub fn get(&self, index: ActuatorIndex) -> Option<&A> {
        self.slots[index.slot()].actuator()
    }

    /// Number of connected actuators.
    pub fn connected_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_connected()).count()
    }

    /// Apply the same speed and acceleration to every actuator.
    pub fn set_drive(&mut self, speed: Hertz, acceleration: StepsPerSecSquared) {
        for slot in &mut self.slots {
            slot.with(|a| {
                a.set_speed(speed);
                a.set_acceleration(acceleration);
            });
        }
    }

    /// Move every actuator to its target.
    pub fn move_to_targets(&mut self, targets: &ActuatorTargetSet) {
        for (index, target) in targets.iter() {
            self.slots[index.slot()].with(|a| a.move_to(target));
        }
    }

    /// Move one actuator.
    pub fn move_one(&mut self, index: ActuatorIndex, target: Steps) {
        self.slots[index.slot()].with(|a| a.move_to(target));
    }

    /// Redefine the current position of every actuator as zero.
    pub fn zero_all(&mut self) {
        for slot in &mut self.slots {
            slot.with(|a| a.set_current_position(Steps::ZERO));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DriveConfig, DEFAULT_WIRING};
    use crate::sim::{SimActuator, SimEngine};

    fn connected(engine: &mut SimEngine) -> ActuatorSet<SimActuator> {
        ActuatorSet::connect(engine, &DEFAULT_WIRING, &DriveConfig::default())
    }

    #[test]
    fn test_connect_configures_channels() {
        let set = connected(&mut SimEngine::new());
        assert_eq!(set.connected_count(), 6);

        let a3 = set.get(ActuatorIndex::new(3).unwrap()).unwrap();
        assert_eq!(a3.step_pin, 23);
        assert_eq!(a3.dir_pin, Some(14));
        assert_eq!(a3.enable_pin, Some(25));
        assert!(a3.auto_enable);
        assert_eq!(a3.speed, Hertz(48_000));
        assert_eq!(a3.acceleration, StepsPerSecSquared(36_000));
    }

    #[test]
    fn test_refused_and_unwired_slots_are_absent() {
        let mut engine = SimEngine::new().refuse_step_pin(19);
        let set = ActuatorSet::connect(&mut engine, &DEFAULT_WIRING[..5], &DriveConfig::default());
        assert_eq!(set.connected_count(), 4);
        assert!(!set.slot(ActuatorIndex::new(4).unwrap()).is_connected());
        assert!(set.slot(ActuatorIndex::new(4).unwrap()).actuator().is_none());
        assert_eq!(
            set.slot(ActuatorIndex::new(1).unwrap()).actuator().map(|a| a.step_pin),
            Some(33)
        );
        assert!(set.get(ActuatorIndex::new(6).unwrap()).is_none());
    }

    #[test]
    fn test_moves_and_zeroing() {
        let mut set = connected(&mut SimEngine::new());
        let targets = ActuatorTargetSet::new([1, 2, 3, 4, 5, 6].map(Steps));
        set.move_to_targets(&targets);
        set.move_one(ActuatorIndex::new(2).unwrap(), Steps(-7));

        let a2 = set.get(ActuatorIndex::new(2).unwrap()).unwrap();
        assert_eq!(a2.position, Steps(-7));
        assert_eq!(a2.moves, 2);

        set.zero_all();
        for index in ActuatorIndex::all() {
            assert_eq!(set.get(index).map(|a| a.position), Some(Steps::ZERO));
        }
    }

    #[test]
    fn test_absent_slot_is_noop() {
        let mut slots: [ActuatorSlot<SimActuator>; ACTUATOR_COUNT] =
            core::array::from_fn(|_| ActuatorSlot::Absent);
        slots[0] = Some(SimActuator::new(33)).into();
        let mut set = ActuatorSet::from_slots(slots);

        set.set_drive(Hertz(10), StepsPerSecSquared(20));
        set.move_one(ActuatorIndex::new(5).unwrap(), Steps(100));
        assert_eq!(set.connected_count(), 1);
        assert_eq!(set.get(ActuatorIndex::new(1).unwrap()).map(|a| a.speed), Some(Hertz(10)));
    }
}
