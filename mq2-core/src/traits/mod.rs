//! Platform capabilities consumed by the driver
//!
//! The driver owns no hardware. Everything it needs from the board is passed
//! in through small traits so it runs the same on a microcontroller, a Linux
//! host and in tests:
//!
//! - [`analog`] - one analog input line ([`AnalogSource`])
//! - [`time`] - millisecond clock ([`TimeSource`])
//! - [`diagnostics`] - text output for humans ([`DiagnosticSink`])
//!
//! Blocking delays use `embedded_hal::delay::DelayNs` directly, which every
//! HAL already implements.

pub mod analog;
pub mod diagnostics;
pub mod time;

pub use analog::AnalogSource;
pub use diagnostics::DiagnosticSink;
pub use time::TimeSource;
