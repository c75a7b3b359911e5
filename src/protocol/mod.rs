//! Line protocol.
//!
//! A line holds one or more `|`-separated commands. Each command is
//! classified as homing, health, quaternion, direct axis or general pose;
//! see [`Command::parse`] for the precedence.

mod command;
mod health;
pub mod lexer;

pub use command::{
    parse_pose, Axis, Command, DirectAxisCommand, DirectAxisEntry, QuaternionCommand,
};
pub use health::HealthReport;
pub use lexer::{split_commands, split_tokens};

/// Prefix of error lines written back to the wired link.
pub const ERROR_PREFIX: &str = "ERROR|";
