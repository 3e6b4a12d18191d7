//! Driver for the MQ-2 combustible gas sensor
//!
//! Turns raw analog readings of an MQ-2 into LPG, carbon monoxide and smoke
//! concentrations in ppm. Designed for microcontrollers: no heap, no panics
//! on sensor noise, every platform dependency injected.
//!
//! Key constraints:
//! - One sensor, one analog input, one caller (no internal locking)
//! - Calibration and uncached reads block for their sampling loops
//! - Calibration lives in RAM only; recalibrate after every restart
//!
//! ```no_run
//! use mq2_core::{GasSensor, GasKind};
//! # use mq2_core::{time::FixedTime, traits::AnalogSource};
//! # struct Adc;
//! # impl AnalogSource for Adc {
//! #     type Error = ();
//! #     fn read_raw(&mut self) -> Result<u16, ()> { Ok(400) }
//! # }
//! # struct Delay;
//! # impl embedded_hal::delay::DelayNs for Delay { fn delay_ns(&mut self, _: u32) {} }
//! # let (adc, delay, clock) = (Adc, Delay, FixedTime::new(0));
//!
//! let mut sensor = GasSensor::new(adc, delay, clock);
//!
//! // 25 seconds in clean air
//! sensor.calibrate()?;
//!
//! if let Some(_readings) = sensor.read_all(true) {
//!     // LPG:...ppm | CO:...ppm | SMOKE:...ppm | RS : ... | RO: ... | RAW :...
//! }
//! let co = sensor.read(GasKind::Co);
//! # Ok::<(), mq2_core::SensorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod adc;
pub mod cache;
pub mod calibration;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod gas;
pub mod resistance;
pub mod sensor;
pub mod time;
pub mod traits;

// Public API
pub use calibration::Calibration;
pub use config::{CacheMode, SamplingConfig, SensorConfig};
pub use errors::{ConfigError, SensorError, SensorResult};
pub use gas::{Curve, GasKind, Readings};
pub use sensor::GasSensor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
