//! Command controller.
//!
//! Owns the actuator set, both links, the delay provider and the uptime
//! source, and runs the single-threaded polling loop: read a line, execute
//! every command in it to completion (homing delays included), then poll
//! again.

use core::fmt::Write;
use core::ops::AddAssign;

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::actuator::{Actuator, ActuatorEngine, ActuatorIndex, ActuatorSet};
use crate::clock::Uptime;
use crate::config::units::Millimeters;
use crate::config::{ClampPolicy, PlatformConfig};
use crate::error::CommandError;
use crate::homing::{HomingMode, HomingSequence, HomingStep};
use crate::kinematics::{compute_targets, ActuatorTargetSet, Pose};
use crate::log::{log_debug, log_info, log_warn};
use crate::protocol::{
    split_commands, Command, DirectAxisCommand, HealthReport, ERROR_PREFIX,
};
use crate::transport::{clean_line, Link};

/// Outcome of one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineSummary {
    /// Commands dispatched.
    pub executed: usize,
    /// Errors reported (aborted quaternions, skipped direct-axis pairs).
    pub rejected: usize,
}

impl AddAssign for LineSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.executed += rhs.executed;
        self.rejected += rhs.rejected;
    }
}

/// Platform controller.
///
/// Generic over:
/// - `ACT`: actuator handle (must implement [`Actuator`])
/// - `PRI`: wired link, always attached; receives error lines
/// - `SEC`: wireless link, written only while a peer is connected
/// - `DELAY`: blocking delay for homing (must implement `DelayNs`)
/// - `CLOCK`: uptime source for health reports
pub struct Controller<ACT, PRI, SEC, DELAY, CLOCK>
where
    ACT: Actuator,
    PRI: Link,
    SEC: Link,
    DELAY: DelayNs,
    CLOCK: Uptime,
{
    /// Validated configuration.
    config: PlatformConfig,

    /// The six actuator slots.
    actuators: ActuatorSet<ACT>,

    /// Wired link.
    primary: PRI,

    /// Wireless link.
    secondary: SEC,

    /// Delay provider for settle waits.
    delay: DELAY,

    /// Uptime source.
    clock: CLOCK,
}

impl<ACT, PRI, SEC, DELAY, CLOCK> Controller<ACT, PRI, SEC, DELAY, CLOCK>
where
    ACT: Actuator,
    PRI: Link,
    SEC: Link,
    DELAY: DelayNs,
    CLOCK: Uptime,
{
    /// Connect every wired actuator through `engine` and build a controller.
    ///
    /// The configuration is expected to be validated already (see
    /// [`crate::config::validate_config`]).
    pub fn new<E>(
        config: PlatformConfig,
        engine: &mut E,
        primary: PRI,
        secondary: SEC,
        delay: DELAY,
        clock: CLOCK,
    ) -> Self
    where
        E: ActuatorEngine<Actuator = ACT>,
    {
        let actuators = ActuatorSet::connect(engine, &config.actuators, &config.drive);
        Self::with_actuators(config, actuators, primary, secondary, delay, clock)
    }

    /// Build a controller around an already connected actuator set.
    pub fn with_actuators(
        config: PlatformConfig,
        actuators: ActuatorSet<ACT>,
        primary: PRI,
        secondary: SEC,
        delay: DELAY,
        clock: CLOCK,
    ) -> Self {
        Self {
            config,
            actuators,
            primary,
            secondary,
            delay,
            clock,
        }
    }

    /// Configuration in use.
    #[inline]
    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Actuator slots.
    #[inline]
    pub fn actuators(&self) -> &ActuatorSet<ACT> {
        &self.actuators
    }

    /// Wired link.
    #[inline]
    pub fn primary(&self) -> &PRI {
        &self.primary
    }

    /// Wired link, mutably.
    #[inline]
    pub fn primary_mut(&mut self) -> &mut PRI {
        &mut self.primary
    }

    /// Wireless link.
    #[inline]
    pub fn secondary(&self) -> &SEC {
        &self.secondary
    }

    /// Wireless link, mutably.
    #[inline]
    pub fn secondary_mut(&mut self) -> &mut SEC {
        &mut self.secondary
    }

    /// Delay provider.
    #[inline]
    pub fn delay(&self) -> &DELAY {
        &self.delay
    }

    /// Startup: brute homing when configured, before any line is read.
    pub fn start(&mut self) {
        log_info!(
            "controller up, {} of 6 actuators connected",
            self.actuators.connected_count()
        );
        if self.config.homing.home_on_startup {
            self.run_homing(HomingMode::Brute);
        }
    }

    /// Poll both links once, wireless first, executing at most one line
    /// from each.
    pub fn poll(&mut self) -> LineSummary {
        let mut summary = LineSummary::default();

        if self.secondary.available() {
            if let Some(line) = self.secondary.read_line() {
                summary += self.execute_line(&line);
            }
        }
        if self.primary.available() {
            if let Some(line) = self.primary.read_line() {
                summary += self.execute_line(&line);
            }
        }

        summary
    }

    /// Poll forever.
    pub fn serve(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// Execute every command of a line, in order.
    ///
    /// A rejected command never stops the rest of the batch.
    pub fn execute_line(&mut self, line: &str) -> LineSummary {
        let mut summary = LineSummary::default();
        for text in split_commands(clean_line(line)) {
            log_debug!("command: {}", text);
            self.dispatch(text, &mut summary);
        }
        summary
    }

    fn dispatch(&mut self, text: &str, summary: &mut LineSummary) {
        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(e) => {
                self.report_error(e);
                summary.rejected += 1;
                return;
            }
        };

        match command {
            Command::Home(mode) => self.run_homing(mode),
            Command::Health => self.emit_health(),
            Command::Quaternion(q) => match q.to_pose() {
                Ok(pose) => {
                    self.apply_pose(&pose, ClampPolicy::Enforce);
                }
                Err(e) => {
                    self.report_error(e);
                    summary.rejected += 1;
                    return;
                }
            },
            Command::DirectAxis(cmd) => summary.rejected += self.apply_direct(cmd),
            Command::General(pose) => {
                self.apply_pose(&pose, ClampPolicy::Enforce);
            }
        }

        summary.executed += 1;
    }

    /// Set drive rates from the pose multipliers, then move all actuators to
    /// the pose's targets under `policy`.
    pub fn apply_pose(&mut self, pose: &Pose, policy: ClampPolicy) -> ActuatorTargetSet {
        let (speed, acceleration) = self
            .config
            .drive
            .scaled(pose.speed_multiplier, pose.accel_multiplier);
        self.actuators.set_drive(speed, acceleration);

        let targets = compute_targets(pose, &self.config.kinematics, policy);
        self.actuators.move_to_targets(&targets);
        targets
    }

    /// Move named actuators to raw positions, unclamped. Returns the number
    /// of pairs skipped.
    fn apply_direct(&mut self, cmd: DirectAxisCommand<'_>) -> usize {
        let mut skipped = 0;
        for entry in cmd.entries() {
            match entry.index() {
                Ok(index) => self.move_direct(index, entry.position),
                Err(e) => {
                    self.report_error(e);
                    skipped += 1;
                }
            }
        }
        skipped
    }

    /// Send one actuator to `position`, bypassing the clamp window.
    pub fn move_direct(&mut self, index: ActuatorIndex, position: Millimeters) {
        let target = position.to_steps(self.config.calibration.steps_per_mm());
        log_debug!("actuator {} -> {} steps", index.number(), target.value());
        self.actuators.move_one(index, target);
    }

    /// Run a homing sequence to completion.
    ///
    /// Each move is the profile's general command applied with the clamp
    /// bypassed; ordinary commands keep running under `Enforce` because the
    /// policy is never stored.
    pub fn run_homing(&mut self, mode: HomingMode) {
        log_info!("homing ({}) start", mode.name());

        let homing = self.config.homing;
        for step in HomingSequence::new(&homing, mode) {
            match step {
                HomingStep::Move(profile) => {
                    log_debug!("homing move to {} mm", profile.height_mm);
                    self.apply_pose(&profile.pose(), ClampPolicy::Bypass);
                }
                HomingStep::Settle(ms) | HomingStep::Pause(ms) => self.delay.delay_ms(ms),
                HomingStep::ZeroAll => self.actuators.zero_all(),
            }
        }

        log_info!("homing ({}) done", mode.name());
    }

    /// Current health snapshot.
    pub fn health(&self) -> HealthReport<'_> {
        HealthReport {
            identity: &self.config.identity,
            uptime_ms: self.clock.uptime_ms(),
            speed: self.config.drive.speed_hz,
            acceleration: self.config.drive.acceleration,
            clamp: ClampPolicy::Enforce,
        }
    }

    /// Write the health line to the wired link, and to the wireless link
    /// when a peer is connected.
    pub fn emit_health(&mut self) {
        let line = self.health().format();
        self.primary.write_line(&line);
        if self.secondary.has_peer() {
            self.secondary.write_line(&line);
        }
    }

    /// Log a rejected command and write `ERROR|<message>` to the wired link.
    pub fn report_error(&mut self, error: CommandError) {
        log_warn!("command rejected: {}", error);

        let mut line: String<128> = String::new();
        // Messages are short; a truncated line is still sent
        let _ = write!(line, "{}{}", ERROR_PREFIX, error);
        self.primary.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Steps;
    use crate::sim::{MemoryLink, SimActuator, SimDelay, SimEngine, SimUptime};

    type SimController = Controller<SimActuator, MemoryLink, MemoryLink, SimDelay, SimUptime>;

    fn controller() -> SimController {
        Controller::new(
            PlatformConfig::default(),
            &mut SimEngine::new(),
            MemoryLink::new(),
            MemoryLink::disconnected(),
            SimDelay::new(),
            SimUptime(42),
        )
    }

    fn positions(c: &SimController) -> [i32; 6] {
        let mut out = [i32::MIN; 6];
        for index in ActuatorIndex::all() {
            if let Some(a) = c.actuators().get(index) {
                out[index.slot()] = a.position.value();
            }
        }
        out
    }

    #[test]
    fn test_general_command_moves_and_scales() {
        let mut c = controller();
        let summary = c.execute_line("H30,S2,A0.5");
        assert_eq!(summary, LineSummary { executed: 1, rejected: 0 });
        assert_eq!(positions(&c), [12_000; 6]);

        let a1 = c.actuators().get(ActuatorIndex::new(1).unwrap()).unwrap();
        assert_eq!(a1.speed.value(), 96_000);
        assert_eq!(a1.acceleration.value(), 18_000);
    }

    #[test]
    fn test_direct_axis_skips_bad_pairs() {
        let mut c = controller();
        let summary = c.execute_line("7:10,2:1");
        assert_eq!(summary, LineSummary { executed: 1, rejected: 1 });
        assert_eq!(positions(&c), [0, 25_600, 0, 0, 0, 0]);
        assert_eq!(c.primary().sent()[0].as_str(), "ERROR|Invalid stepper number: 7");
    }

    #[test]
    fn test_quaternion_rejected() {
        let mut c = controller();
        let summary = c.execute_line("Q:0,0,0,0|H10");
        assert_eq!(summary, LineSummary { executed: 1, rejected: 1 });
        assert_eq!(c.primary().sent()[0].as_str(), "ERROR|Quaternion has zero norm");
        assert_eq!(positions(&c), [4_000; 6]);
    }

    #[test]
    fn test_homing_bypasses_clamp_then_zeroes() {
        let mut c = controller();
        c.execute_line("HOME_SOFT");
        assert_eq!(positions(&c), [0; 6]);
        assert_eq!(c.delay().waits_ms(), [2200]);

        // Commanded -40 mm under bypass before zeroing
        let a1 = c.actuators().get(ActuatorIndex::new(1).unwrap()).unwrap();
        assert_eq!(a1.moves, 1);
        assert_eq!(a1.commanded, [Steps(-16_000)]);
        assert_eq!(a1.speed.value(), 96_000);

        // Ordinary commands are clamped again
        c.execute_line("H-10");
        assert_eq!(positions(&c), [0; 6]);
    }

    #[test]
    fn test_homing_uses_profile_rates_verbatim() {
        let mut config = PlatformConfig::default();
        config.homing.soft = crate::config::HomingProfile::new(-40, 1e-20, 1e-20, 10);
        let mut c: SimController = Controller::new(
            config,
            &mut SimEngine::new(),
            MemoryLink::new(),
            MemoryLink::disconnected(),
            SimDelay::new(),
            SimUptime::default(),
        );
        c.execute_line("HOME_SOFT");

        let a1 = c.actuators().get(ActuatorIndex::new(1).unwrap()).unwrap();
        assert_eq!(a1.commanded, [Steps(-16_000)]);
        // 36000 * 1e-20 saturates to zero
        assert_eq!(a1.acceleration.value(), 0);
        assert_eq!(a1.speed.value(), 0);
    }

    #[test]
    fn test_health_reaches_only_connected_peer() {
        let mut c = controller();
        c.execute_line("STATUS");
        assert_eq!(c.primary().sent().len(), 1);
        assert!(c.secondary().sent().is_empty());

        c.secondary_mut().set_peer(true);
        c.execute_line("HEALTH");
        assert_eq!(c.primary().sent().len(), 2);
        assert_eq!(c.secondary().sent().len(), 1);
        assert!(c.secondary().sent()[0].contains("UPTIME_MS=42"));
    }

    #[test]
    fn test_poll_reads_secondary_first() {
        let mut c = controller();
        c.secondary_mut().push_line("H20");
        c.primary_mut().push_line("H10\r");
        let summary = c.poll();
        assert_eq!(summary.executed, 2);
        // Wired line ran last
        assert_eq!(positions(&c), [4_000; 6]);
    }

    #[test]
    fn test_absent_actuator_is_skipped() {
        let mut engine = SimEngine::new().refuse_step_pin(33);
        let mut c: SimController = Controller::new(
            PlatformConfig::default(),
            &mut engine,
            MemoryLink::new(),
            MemoryLink::new(),
            SimDelay::new(),
            SimUptime::default(),
        );
        assert_eq!(c.actuators().connected_count(), 5);

        let summary = c.execute_line("1:10|H5");
        assert_eq!(summary.rejected, 0);
        assert_eq!(positions(&c), [i32::MIN, 2_000, 2_000, 2_000, 2_000, 2_000]);
        assert!(!c.actuators().slot(ActuatorIndex::new(1).unwrap()).is_connected());
        let a2 = c.actuators().get(ActuatorIndex::new(2).unwrap()).unwrap();
        assert_eq!(a2.target, Steps(2_000));
    }
}
