//! In-memory collaborators.
//!
//! Host-side stand-ins for the step engine, links, clock and delay. Moves
//! complete instantly: a simulated actuator's position jumps to its target.
//! Used by the tests and the console demo.

use embedded_hal::delay::DelayNs;
use heapless::{Deque, Vec};

use crate::actuator::{Actuator, ActuatorEngine};
use crate::clock::Uptime;
use crate::config::units::{Hertz, Steps, StepsPerSecSquared};
use crate::config::ActuatorWiring;
use crate::transport::{Line, Link};

/// Actuator that records every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimActuator {
    /// Step pin it was connected on.
    pub step_pin: u8,
    /// Assigned direction pin.
    pub dir_pin: Option<u8>,
    /// Assigned enable pin.
    pub enable_pin: Option<u8>,
    /// Auto-enable policy.
    pub auto_enable: bool,
    /// Last speed set.
    pub speed: Hertz,
    /// Last acceleration set.
    pub acceleration: StepsPerSecSquared,
    /// Last target.
    pub target: Steps,
    /// Current position.
    pub position: Steps,
    /// Number of `move_to` calls.
    pub moves: u32,
    /// Targets passed to `move_to`, oldest first; unaffected by
    /// `set_current_position`.
    pub commanded: Vec<Steps, MEMORY_LINK_DEPTH>,
}

impl SimActuator {
    /// Actuator connected on `step_pin`, nothing configured yet.
    pub fn new(step_pin: u8) -> Self {
        Self {
            step_pin,
            ..Self::default()
        }
    }
}

impl Actuator for SimActuator {
    fn set_direction_pin(&mut self, pin: u8) {
        self.dir_pin = Some(pin);
    }

    fn set_enable_pin(&mut self, pin: u8) {
        self.enable_pin = Some(pin);
    }

    fn set_auto_enable(&mut self, enabled: bool) {
        self.auto_enable = enabled;
    }

    fn set_speed(&mut self, speed: Hertz) {
        self.speed = speed;
    }

    fn set_acceleration(&mut self, acceleration: StepsPerSecSquared) {
        self.acceleration = acceleration;
    }

    fn move_to(&mut self, target: Steps) {
        self.target = target;
        self.position = target;
        self.moves += 1;
        // Oldest history is kept when full
        let _ = self.commanded.push(target);
    }

    fn set_current_position(&mut self, position: Steps) {
        self.target = position;
        self.position = position;
    }
}

/// Engine handing out [`SimActuator`]s, optionally refusing some step pins.
#[derive(Debug, Clone, Default)]
pub struct SimEngine {
    refused: Vec<u8, 8>,
}

impl SimEngine {
    /// Engine that connects every channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse to connect the channel driven by `step_pin`.
    pub fn refuse_step_pin(mut self, step_pin: u8) -> Self {
        let _ = self.refused.push(step_pin);
        self
    }
}

impl ActuatorEngine for SimEngine {
    type Actuator = SimActuator;

    fn connect(&mut self, wiring: &ActuatorWiring) -> Option<SimActuator> {
        if self.refused.contains(&wiring.step_pin) {
            return None;
        }
        Some(SimActuator::new(wiring.step_pin))
    }
}

/// Capacity of [`MemoryLink`] queues.
pub const MEMORY_LINK_DEPTH: usize = 16;

/// Link backed by in-memory queues.
#[derive(Debug, Clone)]
pub struct MemoryLink {
    inbound: Deque<Line, MEMORY_LINK_DEPTH>,
    outbound: Vec<Line, MEMORY_LINK_DEPTH>,
    peer: bool,
}

impl Default for MemoryLink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLink {
    /// Link with a peer attached.
    pub fn new() -> Self {
        Self {
            inbound: Deque::new(),
            outbound: Vec::new(),
            peer: true,
        }
    }

    /// Link with no peer attached.
    pub fn disconnected() -> Self {
        Self {
            peer: false,
            ..Self::new()
        }
    }

    /// Attach or detach the peer.
    pub fn set_peer(&mut self, connected: bool) {
        self.peer = connected;
    }

    /// Queue a received line. Returns `false` if the queue is full or the
    /// line is too long.
    pub fn push_line(&mut self, line: &str) -> bool {
        match Line::try_from(line) {
            Ok(line) => self.inbound.push_back(line).is_ok(),
            Err(()) => false,
        }
    }

    /// Lines written so far.
    pub fn sent(&self) -> &[Line] {
        &self.outbound
    }

    /// Forget written lines.
    pub fn clear_sent(&mut self) {
        self.outbound.clear();
    }
}

impl Link for MemoryLink {
    fn available(&mut self) -> bool {
        !self.inbound.is_empty()
    }

    fn read_line(&mut self) -> Option<Line> {
        self.inbound.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        // Oldest output is kept when full
        if let Ok(line) = Line::try_from(line) {
            let _ = self.outbound.push(line);
        }
    }

    fn has_peer(&self) -> bool {
        self.peer
    }
}

/// Manually advanced uptime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimUptime(pub u64);

impl Uptime for SimUptime {
    fn uptime_ms(&self) -> u64 {
        self.0
    }
}

/// Delay that returns immediately and records the requested time.
#[derive(Debug, Clone, Default)]
pub struct SimDelay {
    total_ns: u64,
    waits_ms: Vec<u32, MEMORY_LINK_DEPTH>,
}

impl SimDelay {
    /// Fresh delay with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total requested delay in milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    /// Individual `delay_ms` requests, oldest first.
    pub fn waits_ms(&self) -> &[u32] {
        &self.waits_ms
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        let _ = self.waits_ms.push(ms);
    }
}
