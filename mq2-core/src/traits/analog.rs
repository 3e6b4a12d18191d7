//! Analog Input Abstraction
//!
//! The driver needs one operation from the platform: "convert the sensor's
//! analog output once". [`AnalogSource`] is that capability. It is bound to a
//! single input line for the sensor's lifetime.
//!
//! ## Adapters
//!
//! - Any `embedded-hal` 0.2 `OneShot` converter plus pin:
//!   [`OneShotChannel`](crate::adc::OneShotChannel)
//! - Closures and scripted sources in tests implement the trait directly
//!
//! ```rust
//! use mq2_core::traits::AnalogSource;
//!
//! struct Constant(u16);
//!
//! impl AnalogSource for Constant {
//!     type Error = core::convert::Infallible;
//!
//!     fn read_raw(&mut self) -> Result<u16, Self::Error> {
//!         Ok(self.0)
//!     }
//! }
//! ```

/// Single analog input line
pub trait AnalogSource {
    /// Conversion failure reported by the platform
    type Error: core::fmt::Debug;

    /// One instantaneous conversion in `[0, full_scale]`
    fn read_raw(&mut self) -> Result<u16, Self::Error>;

    /// Identifier of the input line, used in diagnostics
    fn channel(&self) -> u8 {
        0
    }
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    type Error = T::Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        (**self).read_raw()
    }

    fn channel(&self) -> u8 {
        (**self).channel()
    }
}
