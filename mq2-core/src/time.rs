//! Time management for the driver
//!
//! Clock implementations behind [`TimeSource`]:
//! - [`MonotonicClock`]: process-relative clock (requires std)
//! - [`FixedTime`]: manually advanced clock for tests and simulations

use core::cell::Cell;

use crate::traits::TimeSource;

/// Timestamp in milliseconds since clock start
pub type Timestamp = u64;

/// Milliseconds elapsed from `earlier` to `later`, zero if the clock went back
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u64 {
    later.saturating_sub(earlier)
}

/// Monotonic clock counting from its own construction
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Start counting now
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl TimeSource for MonotonicClock {
    fn now(&self) -> Timestamp {
        duration_ms(self.start.elapsed())
    }
}

/// Whole milliseconds in `duration`, saturating at `Timestamp::MAX`
#[cfg(feature = "std")]
fn duration_ms(duration: std::time::Duration) -> Timestamp {
    Timestamp::try_from(duration.as_millis()).unwrap_or(Timestamp::MAX)
}

/// Manually driven time source
///
/// Interior mutability lets a test keep a shared reference while the sensor
/// holds another (`&FixedTime` is itself a [`TimeSource`]).
#[derive(Debug, Clone, Default)]
pub struct FixedTime {
    timestamp: Cell<Timestamp>,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp: Cell::new(timestamp),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, timestamp: Timestamp) {
        self.timestamp.set(timestamp);
    }

    /// Move forward by `ms`
    pub fn advance(&self, ms: u64) {
        self.timestamp.set(self.timestamp.get().saturating_add(ms));
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp.get()
    }
}
