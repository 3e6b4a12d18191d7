//! Time Source Abstraction
//!
//! The cache needs "milliseconds since start" and nothing else. Boards read
//! a hardware timer, hosts use `std::time::Instant`, tests use
//! [`FixedTime`](crate::time::FixedTime).
//!
//! ## Example Implementation
//!
//! ```rust
//! use mq2_core::traits::TimeSource;
//! use mq2_core::time::Timestamp;
//!
//! struct SysTick {
//!     // ... timer peripheral
//! }
//!
//! impl TimeSource for SysTick {
//!     fn now(&self) -> Timestamp {
//!         // Read the millisecond tick counter
//!         0 // placeholder
//!     }
//! }
//! ```
//!
//! ## Implementation Requirements
//!
//! - `now()` must never go backwards
//! - Counter wraparound must be widened to 64 bits by the implementation

use crate::time::Timestamp;

/// Monotonic millisecond clock
pub trait TimeSource {
    /// Milliseconds elapsed since an arbitrary fixed start
    fn now(&self) -> Timestamp;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
