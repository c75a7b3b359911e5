//! Homing sequencer.
//!
//! The platform has no limit switches. Homing drives every actuator past
//! nominal zero against the mechanical stop with the clamp bypassed, waits
//! for travel to finish and redefines the current position as zero.
//!
//! [`HomingSequence`] is a pure state machine yielding [`HomingStep`]s; the
//! controller performs each step against the actuators and delay provider.

use crate::config::{HomingConfig, HomingProfile};

/// Homing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingMode {
    /// One phase using the soft profile.
    Soft,
    /// Prep phase, pause, then the deeper main phase.
    Brute,
}

impl HomingMode {
    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            HomingMode::Soft => "soft",
            HomingMode::Brute => "brute",
        }
    }
}

/// Phase of a homing run. Soft homing only has `Main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingPhase {
    /// First, shallower brute phase.
    Prep,
    /// Final phase.
    Main,
}

/// Sequencer state, named after the step last yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingState {
    /// Nothing yielded yet.
    Idle,
    /// Move to the phase's extreme issued.
    Moving(HomingPhase),
    /// Waiting for travel to finish.
    Settling(HomingPhase),
    /// Positions redefined as zero.
    Zeroing(HomingPhase),
    /// Pause between brute phases.
    Pausing,
    /// Sequence finished.
    Complete,
}

/// Work the controller performs for one sequencer step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomingStep {
    /// Drive all actuators per the profile, clamp bypassed.
    Move(HomingProfile),
    /// Block for travel to complete (milliseconds).
    Settle(u32),
    /// Set every actuator's current position to zero.
    ZeroAll,
    /// Block between phases (milliseconds).
    Pause(u32),
}

/// Step-by-step homing run.
#[derive(Debug, Clone)]
pub struct HomingSequence<'a> {
    config: &'a HomingConfig,
    mode: HomingMode,
    state: HomingState,
}

impl<'a> HomingSequence<'a> {
    /// Create an idle sequence.
    pub fn new(config: &'a HomingConfig, mode: HomingMode) -> Self {
        Self {
            config,
            mode,
            state: HomingState::Idle,
        }
    }

    /// Homing variant.
    #[inline]
    pub fn mode(&self) -> HomingMode {
        self.mode
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> HomingState {
        self.state
    }

    /// Check if every step has been yielded.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == HomingState::Complete
    }

    /// Profile driven during `phase`.
    pub fn profile(&self, phase: HomingPhase) -> &'a HomingProfile {
        match (self.mode, phase) {
            (HomingMode::Soft, _) => &self.config.soft,
            (HomingMode::Brute, HomingPhase::Prep) => &self.config.brute_prep,
            (HomingMode::Brute, HomingPhase::Main) => &self.config.brute_main,
        }
    }

    /// Total blocking time of the whole run (milliseconds).
    pub fn total_wait_ms(&self) -> u32 {
        match self.mode {
            HomingMode::Soft => self.config.soft.settle_ms,
            HomingMode::Brute => self
                .config
                .brute_prep
                .settle_ms
                .saturating_add(self.config.phase_pause_ms)
                .saturating_add(self.config.brute_main.settle_ms),
        }
    }

    /// Yield the next step, or `None` once complete.
    pub fn advance(&mut self) -> Option<HomingStep> {
        use HomingPhase::{Main, Prep};
        use HomingState::*;

        let (next, step) = match self.state {
            Idle => {
                let first = match self.mode {
                    HomingMode::Soft => Main,
                    HomingMode::Brute => Prep,
                };
                (Moving(first), HomingStep::Move(*self.profile(first)))
            }
            Moving(phase) => (
                Settling(phase),
                HomingStep::Settle(self.profile(phase).settle_ms),
            ),
            Settling(phase) => (Zeroing(phase), HomingStep::ZeroAll),
            Zeroing(Prep) => (Pausing, HomingStep::Pause(self.config.phase_pause_ms)),
            Pausing => (Moving(Main), HomingStep::Move(*self.profile(Main))),
            Zeroing(Main) | Complete => {
                self.state = Complete;
                return None;
            }
        };

        self.state = next;
        Some(step)
    }
}

impl Iterator for HomingSequence<'_> {
    type Item = HomingStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
