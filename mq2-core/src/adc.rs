//! Adapter for `embedded-hal` 0.2 one-shot converters
//!
//! Most HAL crates still expose their ADC through the 0.2 `OneShot` trait
//! (`embedded-hal` 1.0 dropped it). [`OneShotChannel`] owns the converter
//! and the pin and blocks on the non-blocking `read` until a conversion is
//! ready.
//!
//! ```rust,ignore
//! use mq2_core::adc::OneShotChannel;
//!
//! let adc = Adc::adc1(dp.ADC1, &mut rcc);
//! let pin = gpioa.pa0.into_analog();
//! let channel = OneShotChannel::new(adc, pin, 0);
//! ```

use core::marker::PhantomData;

use embedded_hal_02::adc::{Channel, OneShot};

use crate::traits::AnalogSource;

/// Converter and pin bound together as one analog input line
pub struct OneShotChannel<ADC, A, PIN> {
    adc: ADC,
    pin: PIN,
    channel: u8,
    _adc: PhantomData<A>,
}

impl<ADC, A, PIN> OneShotChannel<ADC, A, PIN>
where
    ADC: OneShot<A, u16, PIN>,
    PIN: Channel<A>,
{
    /// Bind `pin` on `adc`; `channel` only labels diagnostics
    pub fn new(adc: ADC, pin: PIN, channel: u8) -> Self {
        Self {
            adc,
            pin,
            channel,
            _adc: PhantomData,
        }
    }

    /// Give back the converter and the pin
    pub fn release(self) -> (ADC, PIN) {
        (self.adc, self.pin)
    }
}

impl<ADC, A, PIN> AnalogSource for OneShotChannel<ADC, A, PIN>
where
    ADC: OneShot<A, u16, PIN>,
    ADC::Error: core::fmt::Debug,
    PIN: Channel<A>,
{
    type Error = ADC::Error;

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        loop {
            match self.adc.read(&mut self.pin) {
                Ok(raw) => return Ok(raw),
                Err(nb::Error::WouldBlock) => continue,
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }

    fn channel(&self) -> u8 {
        self.channel
    }
}
