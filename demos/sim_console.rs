//! Simulation console.
//!
//! Reads command lines from stdin as the wired link, runs them against six
//! simulated actuators and prints their targets after every line.
//!
//! Run with: `cargo run --example sim_console -- [neck.toml] [--fast]`
//!
//! `--fast` skips homing settle waits.

use std::io;

use stewart_neck::{
    clock::StdUptime,
    config::PlatformConfig,
    error::Result,
    sim::{MemoryLink, SimActuator, SimEngine},
    transport::StdioLink,
    ActuatorIndex, ActuatorSet, Controller,
};

/// Delay that sleeps the thread, or returns at once in fast mode.
struct SleepDelay {
    fast: bool,
}

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        if !self.fast {
            std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
        }
    }
}

fn print_targets(actuators: &ActuatorSet<SimActuator>) {
    let mut line = String::from("  targets:");
    for index in ActuatorIndex::all() {
        match actuators.get(index) {
            Some(a) => line.push_str(&format!(" m{}={}", index.number(), a.target.value())),
            None => line.push_str(&format!(" m{}=-", index.number())),
        }
    }
    eprintln!("{}", line);
}

fn main() -> Result<()> {
    let mut fast = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--fast" {
            fast = true;
        } else {
            config_path = Some(arg);
        }
    }

    let config = match config_path {
        Some(path) => stewart_neck::load_config(path)?,
        None => PlatformConfig::default(),
    };

    let primary = StdioLink::new(io::stdin().lock(), io::stdout());

    let mut controller = Controller::new(
        config,
        &mut SimEngine::new(),
        primary,
        MemoryLink::disconnected(),
        SleepDelay { fast },
        StdUptime::start(),
    );

    eprintln!("=== stewart-neck simulation console ===");
    eprintln!("homing...");
    controller.start();
    print_targets(controller.actuators());

    while !controller.primary().is_closed() {
        let summary = controller.poll();
        if summary.executed + summary.rejected > 0 {
            eprintln!(
                "  executed {}, rejected {}",
                summary.executed, summary.rejected
            );
            print_targets(controller.actuators());
        }
    }

    Ok(())
}
