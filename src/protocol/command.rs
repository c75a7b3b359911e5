//! Command classification.

use crate::actuator::ActuatorIndex;
use crate::config::units::Millimeters;
use crate::error::CommandError;
use crate::homing::HomingMode;
use crate::kinematics::{orient, Pose, Quaternion};

use super::lexer::{leading_integer, leading_number, split_tokens};

/// One classified command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// `HOME`, `HOME_BRUTE`, `HOME_SOFT`.
    Home(HomingMode),
    /// `HEALTH`, `STATUS`.
    Health,
    /// `Q` orientation command.
    Quaternion(QuaternionCommand),
    /// `<index>:<mm>` pairs, sent to actuators unclamped.
    DirectAxis(DirectAxisCommand<'a>),
    /// Axis-letter pose command.
    General(Pose),
}

impl<'a> Command<'a> {
    /// Classify a single trimmed, non-empty command.
    ///
    /// Literals win over everything else, then a leading `Q`, then any `:`;
    /// the rest is a general pose command.
    ///
    /// # Errors
    ///
    /// Only quaternion commands can fail here, when fewer than four numeric
    /// components are present.
    pub fn parse(text: &'a str) -> Result<Self, CommandError> {
        if let Some(command) = Self::literal(text) {
            return Ok(command);
        }
        if let Some(payload) = text.strip_prefix('Q') {
            return QuaternionCommand::parse(payload).map(Command::Quaternion);
        }
        if text.contains(':') {
            return Ok(Command::DirectAxis(DirectAxisCommand { text }));
        }
        Ok(Command::General(parse_pose(text)))
    }

    fn literal(text: &str) -> Option<Self> {
        const LITERALS: [(&str, Command<'static>); 5] = [
            ("HOME", Command::Home(HomingMode::Brute)),
            ("HOME_BRUTE", Command::Home(HomingMode::Brute)),
            ("HOME_SOFT", Command::Home(HomingMode::Soft)),
            ("HEALTH", Command::Health),
            ("STATUS", Command::Health),
        ];

        LITERALS
            .iter()
            .find(|(word, _)| text.eq_ignore_ascii_case(word))
            .map(|(_, command)| *command)
    }
}

/// Pose axis selected by a token's leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `X`: yaw-like rotation.
    Yaw,
    /// `Y`: lateral translation.
    Lateral,
    /// `Z`: front/back translation.
    Longitudinal,
    /// `H`: height offset in mm.
    Height,
    /// `S`: speed multiplier.
    Speed,
    /// `A`: acceleration multiplier.
    Accel,
    /// `R`: roll.
    Roll,
    /// `P`: pitch.
    Pitch,
}

impl Axis {
    /// Axis for a token letter; unknown letters yield `None`.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'X' => Axis::Yaw,
            'Y' => Axis::Lateral,
            'Z' => Axis::Longitudinal,
            'H' => Axis::Height,
            'S' => Axis::Speed,
            'A' => Axis::Accel,
            'R' => Axis::Roll,
            'P' => Axis::Pitch,
            _ => return None,
        })
    }

    /// Write `value` into the matching pose field.
    ///
    /// A missing value zeroes an integer field and leaves a multiplier at
    /// its current value. Integer fields truncate toward zero.
    pub fn apply(self, pose: &mut Pose, value: Option<f32>) {
        let whole = value.unwrap_or(0.0) as i32;
        match self {
            Axis::Yaw => pose.angle_x = whole,
            Axis::Lateral => pose.angle_y = whole,
            Axis::Longitudinal => pose.angle_z = whole,
            Axis::Height => pose.height_offset = whole,
            Axis::Roll => pose.roll = whole,
            Axis::Pitch => pose.pitch = whole,
            Axis::Speed => {
                if let Some(v) = value {
                    pose.speed_multiplier = v;
                }
            }
            Axis::Accel => {
                if let Some(v) = value {
                    pose.accel_multiplier = v;
                }
            }
        }
    }
}

/// Split a token into its axis and numeric payload.
fn axis_token(token: &str) -> Option<(Axis, Option<f32>)> {
    let mut chars = token.chars();
    let axis = Axis::from_letter(chars.next()?)?;
    Some((axis, leading_number(chars.as_str())))
}

/// Build a pose from a general movement command such as `H-40,S2,A2`.
///
/// Unknown letters are ignored and omitted letters keep their defaults.
pub fn parse_pose(command: &str) -> Pose {
    let mut pose = Pose::default();
    for (axis, value) in split_tokens(command).filter_map(axis_token) {
        axis.apply(&mut pose, value);
    }
    pose
}

/// Parsed `Q` command: four components plus optional `H`, `S`, `A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuaternionCommand {
    /// Orientation as received (not yet normalized).
    pub quaternion: Quaternion,
    /// Height and rate multipliers; mixing angles are filled by `to_pose`.
    pub base: Pose,
}

impl QuaternionCommand {
    /// Parse the payload after the leading `Q`, e.g. `:0.7071,0,0.7071,0,S1`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::IncompleteQuaternion`] when fewer than four
    /// numeric components are present.
    pub fn parse(payload: &str) -> Result<Self, CommandError> {
        let payload = payload.strip_prefix(':').unwrap_or(payload);
        let mut components = [0.0f32; 4];
        let mut found = 0;
        let mut base = Pose::default();

        for token in split_tokens(payload) {
            match axis_token(token) {
                Some((axis @ (Axis::Height | Axis::Speed | Axis::Accel), value)) => {
                    axis.apply(&mut base, value);
                }
                _ => {
                    if let Ok(v) = token.parse::<f32>() {
                        if found < components.len() {
                            components[found] = v;
                        }
                        found += 1;
                    }
                }
            }
        }

        if found < components.len() {
            return Err(CommandError::IncompleteQuaternion { found });
        }

        let [w, x, y, z] = components;
        Ok(Self {
            quaternion: Quaternion::new(w, x, y, z),
            base,
        })
    }

    /// Pose for this orientation.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ZeroNormQuaternion`] for a zero-norm input.
    pub fn to_pose(&self) -> Result<Pose, CommandError> {
        orient(self.base, &self.quaternion)
    }
}

/// `<index>:<mm>` pairs of a direct axis command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectAxisCommand<'a> {
    text: &'a str,
}

/// One `<index>:<mm>` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectAxisEntry {
    /// Stepper number as written (0 when unparseable).
    pub stepper: i32,
    /// Target position.
    pub position: Millimeters,
}

impl DirectAxisEntry {
    /// Resolve the stepper number.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidStepper`] outside `1..=6`.
    pub fn index(&self) -> Result<ActuatorIndex, CommandError> {
        ActuatorIndex::new(self.stepper).ok_or(CommandError::InvalidStepper(self.stepper))
    }
}

impl<'a> DirectAxisCommand<'a> {
    /// Pairs in order; tokens without a `:` are skipped.
    pub fn entries(&self) -> impl Iterator<Item = DirectAxisEntry> + 'a {
        split_tokens(self.text).filter_map(|token| {
            let (stepper, value) = token.split_once(':')?;
            Some(DirectAxisEntry {
                stepper: leading_integer(stepper).unwrap_or(0),
                position: Millimeters(leading_number(value).unwrap_or(0.0)),
            })
        })
    }
}
