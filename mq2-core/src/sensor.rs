//! MQ-2 gas sensor driver
//!
//! ## Pipeline
//!
//! ```text
//! raw sample ──► Rs = RL·(full−raw)/raw ──► mean over N samples
//!                                               │
//!              calibrate(): Ro = mean / clean-air factor
//!              read:        ratio = mean / Ro ──► curve ──► ppm ──► cache
//! ```
//!
//! ## Blocking
//!
//! Every sample is followed by a settling delay through the injected
//! [`DelayNs`]. `calibrate()` blocks for `samples × interval` of the
//! calibration loop (25 s with defaults), every uncached read for the read
//! loop (250 ms). Keep both off latency-sensitive paths.
//!
//! ## Error surface
//!
//! Two flavours of every read:
//!
//! | Call | Uncalibrated / bad sample |
//! |---|---|
//! | `try_read`, `try_read_all` | `Err(SensorError)` |
//! | `read`, `read_lpg`, `read_co`, `read_smoke` | warning logged, `0.0` |
//! | `read_all` | warning logged, `None` |
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use mq2_core::{GasSensor, SensorConfig, time::FixedTime, traits::AnalogSource};
//!
//! struct Constant(u16);
//! impl AnalogSource for Constant {
//!     type Error = Infallible;
//!     fn read_raw(&mut self) -> Result<u16, Infallible> { Ok(self.0) }
//! }
//!
//! struct NoDelay;
//! impl DelayNs for NoDelay {
//!     fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! let clock = FixedTime::new(0);
//! let mut sensor = GasSensor::new(Constant(500), NoDelay, &clock);
//!
//! assert_eq!(sensor.read_lpg(), 0.0); // not calibrated yet
//!
//! let ro = sensor.calibrate().unwrap();
//! assert!((ro - 10.46 / 9.83).abs() < 1e-4);
//! assert!(sensor.read_lpg() > 200.0);
//! ```

use embedded_hal::delay::DelayNs;

use crate::{
    cache::ConcentrationCache,
    calibration::Calibration,
    config::{SamplingConfig, SensorConfig},
    diagnostics::{self, LogSink},
    errors::{ConfigError, SensorError, SensorResult},
    gas::{self, GasKind, Readings},
    resistance::resistance_from_raw,
    traits::{AnalogSource, DiagnosticSink, TimeSource},
};

/// One MQ-2 sensor bound to one analog input
pub struct GasSensor<A, D, T, S = LogSink> {
    adc: A,
    delay: D,
    clock: T,
    sink: S,
    config: SensorConfig,
    calibration: Calibration,
    cache: ConcentrationCache,
}

impl<A, D, T> GasSensor<A, D, T, LogSink>
where
    A: AnalogSource,
    D: DelayNs,
    T: TimeSource,
{
    /// Bind a sensor with the MQ-2 reference configuration.
    ///
    /// Starts uncalibrated and performs no I/O.
    pub fn new(adc: A, delay: D, clock: T) -> Self {
        Self::build(SensorConfig::default(), adc, delay, clock, LogSink)
    }
}

impl<A, D, T, S> GasSensor<A, D, T, S>
where
    A: AnalogSource,
    D: DelayNs,
    T: TimeSource,
    S: DiagnosticSink,
{
    /// Bind a sensor with a custom configuration and diagnostic sink
    pub fn with_config(
        config: SensorConfig,
        adc: A,
        delay: D,
        clock: T,
        sink: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, adc, delay, clock, sink))
    }

    fn build(config: SensorConfig, adc: A, delay: D, clock: T, sink: S) -> Self {
        Self {
            adc,
            delay,
            clock,
            sink,
            cache: ConcentrationCache::new(config.cache_mode, config.read_delay_ms),
            config,
            calibration: Calibration::Uncalibrated,
        }
    }

    /// Input line this sensor is bound to
    pub fn channel(&self) -> u8 {
        self.adc.channel()
    }

    /// Active configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Current calibration state
    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// True once `calibrate()` has succeeded and no reset followed
    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    /// Ro in kilo-ohms, if calibrated
    pub fn baseline(&self) -> Option<f32> {
        self.calibration.baseline()
    }

    /// Last stored concentrations, zero where never computed
    pub fn cached(&self) -> Readings {
        self.cache.values()
    }

    /// Establish the clean-air baseline Ro.
    ///
    /// Averages the calibration loop's resistances and divides by the
    /// clean-air factor. Must run in clean air. On error the previous
    /// calibration state is kept.
    pub fn calibrate(&mut self) -> SensorResult<f32> {
        log_info!(
            "Calibrating MQ-2 on channel {} ({} samples, {} ms)",
            self.channel(),
            self.config.calibration.samples,
            self.config.calibration.total_ms()
        );

        let mean = self.average_resistance(self.config.calibration)?;
        let ro = mean / self.config.clean_air_factor;
        self.calibration = Calibration::from_baseline(ro)?;

        self.sink.emit(&diagnostics::calibration_line(ro));
        Ok(ro)
    }

    /// Mean sensor resistance over the read loop, in kilo-ohms
    pub fn sample_resistance(&mut self) -> SensorResult<f32> {
        self.average_resistance(self.config.read)
    }

    /// Sample now and convert through the curve of `kind`, bypassing the cache
    pub fn concentration(&mut self, kind: GasKind) -> SensorResult<f32> {
        let ro = self.calibration.require()?;
        let ratio = self.sample_resistance()? / ro;
        gas::concentration_for_ratio(kind.curve(), ratio)
    }

    /// Concentration of `kind`, served from the cache while fresh
    pub fn try_read(&mut self, kind: GasKind) -> SensorResult<f32> {
        self.calibration.require()?;

        let now = self.clock.now();
        if let Some(value) = self.cache.fresh(kind, now) {
            log_debug!("{} served from cache: {}", kind.label(), value);
            return Ok(value);
        }

        let value = self.concentration(kind)?;
        self.cache.store(kind, value, self.clock.now());
        log_debug!("{} resampled: {}", kind.label(), value);
        Ok(value)
    }

    /// Like [`try_read`](Self::try_read), but logs failures and returns `0.0`
    pub fn read(&mut self, kind: GasKind) -> f32 {
        match self.try_read(kind) {
            Ok(value) => value,
            Err(e) => {
                self.report(e);
                0.0
            }
        }
    }

    /// LPG concentration in ppm, `0.0` on failure
    pub fn read_lpg(&mut self) -> f32 {
        self.read(GasKind::Lpg)
    }

    /// CO concentration in ppm, `0.0` on failure
    pub fn read_co(&mut self) -> f32 {
        self.read(GasKind::Co)
    }

    /// Smoke concentration in ppm, `0.0` on failure
    pub fn read_smoke(&mut self) -> f32 {
        self.read(GasKind::Smoke)
    }

    /// Resample every gas, refresh the cache and optionally emit a summary.
    ///
    /// The summary adds one more resistance reading and one raw sample;
    /// failures there are logged and shown as `--`, never returned.
    pub fn try_read_all(&mut self, emit: bool) -> SensorResult<Readings> {
        let ro = self.calibration.require()?;

        let mut values = [0.0; GasKind::COUNT];
        for kind in GasKind::ALL {
            values[kind.index()] = self.concentration(kind)?;
        }
        let readings = Readings::from_array(values);
        self.cache.store_all(&readings, self.clock.now());

        if emit {
            let rs = self.sample_resistance().map_err(|e| self.report(e)).ok();
            let raw = self.read_raw().map_err(|e| self.report(e)).ok();
            self.sink
                .emit(&diagnostics::readings_line(&readings, rs, ro, raw));
        }

        Ok(readings)
    }

    /// Like [`try_read_all`](Self::try_read_all), but logs failures and returns `None`
    pub fn read_all(&mut self, emit: bool) -> Option<Readings> {
        match self.try_read_all(emit) {
            Ok(readings) => Some(readings),
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    /// Forget the baseline and zero cached values.
    ///
    /// Freshness timestamps are kept; zeroed values already force a resample.
    pub fn reset(&mut self) {
        self.calibration = Calibration::Uncalibrated;
        self.cache.clear();
        log_info!("MQ-2 on channel {} reset, recalibration required", self.channel());
    }

    /// Hand back the owned capabilities
    pub fn release(self) -> (A, D, T, S) {
        (self.adc, self.delay, self.clock, self.sink)
    }

    fn read_raw(&mut self) -> SensorResult<u16> {
        let channel = self.adc.channel();
        self.adc.read_raw().map_err(|e| {
            log_warn!("Analog read on channel {} failed: {:?}", channel, e);
            SensorError::Adc
        })
    }

    fn average_resistance(&mut self, sampling: SamplingConfig) -> SensorResult<f32> {
        let mut sum = 0.0f32;
        for _ in 0..sampling.samples {
            let raw = self.read_raw()?;
            sum += resistance_from_raw(raw, &self.config)?;
            self.delay.delay_ms(sampling.interval_ms);
        }
        Ok(sum / f32::from(sampling.samples))
    }

    fn report(&self, error: SensorError) {
        match error {
            SensorError::NotCalibrated => log_warn!(
                "MQ-2 on channel {} not calibrated, call calibrate() before reading any value",
                self.channel()
            ),
            other => log_warn!("MQ-2 on channel {}: {}", self.channel(), other),
        }
    }
}
