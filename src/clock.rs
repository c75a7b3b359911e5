//! Uptime source for health reports.

/// Monotonic milliseconds since the controller started.
pub trait Uptime {
    /// Milliseconds since start.
    fn uptime_ms(&self) -> u64;
}

#[cfg(feature = "std")]
pub use self::std_clock::StdUptime;

#[cfg(feature = "std")]
mod std_clock {
    use std::time::Instant;

    use super::Uptime;

    /// Uptime measured from construction with `std::time::Instant`.
    #[derive(Debug, Clone, Copy)]
    pub struct StdUptime {
        started: Instant,
    }

    impl StdUptime {
        /// Start counting now.
        pub fn start() -> Self {
            Self {
                started: Instant::now(),
            }
        }
    }

    impl Default for StdUptime {
        fn default() -> Self {
            Self::start()
        }
    }

    impl Uptime for StdUptime {
        fn uptime_ms(&self) -> u64 {
            self.started.elapsed().as_millis() as u64
        }
    }
}
