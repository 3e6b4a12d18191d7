//! Driver configuration
//!
//! Every tunable of the measurement pipeline lives in [`SensorConfig`]. The
//! defaults describe an MQ-2 breakout with a 10 kΩ load resistor read by a
//! 10-bit converter:
//!
//! ```rust
//! use mq2_core::{SensorConfig, CacheMode, constants::sensor::ADC_FULL_SCALE_12BIT};
//!
//! let config = SensorConfig::default()
//!     .with_full_scale(ADC_FULL_SCALE_12BIT)
//!     .with_read_delay_ms(2_000)
//!     .with_cache_mode(CacheMode::Shared);
//!
//! assert!(config.validate().is_ok());
//! ```

use crate::{
    constants::{
        sensor::{LOAD_RESISTANCE_KOHM, ADC_FULL_SCALE_10BIT, RO_CLEAN_AIR_FACTOR},
        time::{
            CALIBRATION_SAMPLE_TIMES, CALIBRATION_SAMPLE_INTERVAL_MS,
            READ_SAMPLE_TIMES, READ_SAMPLE_INTERVAL_MS, READ_DELAY_MS,
        },
    },
    errors::ConfigError,
};

/// How the freshness timestamp of cached concentrations is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CacheMode {
    /// One timestamp per gas, refreshed whenever that gas is resampled
    #[default]
    PerGas,
    /// A single timestamp refreshed only by a full read of all gases.
    ///
    /// Per-gas reads never move the window, so once it lapses every per-gas
    /// read resamples until the next full read.
    Shared,
}

/// Sample count and spacing for one averaging loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Number of raw samples averaged
    pub samples: u16,
    /// Delay after each sample in milliseconds
    pub interval_ms: u32,
}

impl SamplingConfig {
    /// Create a sampling loop description
    pub const fn new(samples: u16, interval_ms: u32) -> Self {
        Self { samples, interval_ms }
    }

    /// Total time the loop blocks for, in milliseconds
    pub fn total_ms(&self) -> u64 {
        u64::from(self.samples) * u64::from(self.interval_ms)
    }
}

/// Measurement circuit, sampling and cache settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Load resistance RL in kilo-ohms
    pub load_resistance_kohm: f32,
    /// Maximum raw value of the converter
    pub full_scale: u16,
    /// Rs/Ro in clean air for this sensor model
    pub clean_air_factor: f32,
    /// Clean-air calibration loop
    pub calibration: SamplingConfig,
    /// Loop behind every resistance reading
    pub read: SamplingConfig,
    /// Freshness window for cached concentrations in milliseconds
    pub read_delay_ms: u64,
    /// Timestamp policy for the cache
    pub cache_mode: CacheMode,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            load_resistance_kohm: LOAD_RESISTANCE_KOHM,
            full_scale: ADC_FULL_SCALE_10BIT,
            clean_air_factor: RO_CLEAN_AIR_FACTOR,
            calibration: SamplingConfig::new(
                CALIBRATION_SAMPLE_TIMES,
                CALIBRATION_SAMPLE_INTERVAL_MS,
            ),
            read: SamplingConfig::new(READ_SAMPLE_TIMES, READ_SAMPLE_INTERVAL_MS),
            read_delay_ms: READ_DELAY_MS,
            cache_mode: CacheMode::PerGas,
        }
    }
}

impl SensorConfig {
    /// Short sampling loops for bench work and demos.
    ///
    /// Ten calibration samples at 100 ms and three read samples at 20 ms;
    /// circuit constants stay at their MQ-2 defaults.
    pub fn fast() -> Self {
        Self {
            calibration: SamplingConfig::new(10, 100),
            read: SamplingConfig::new(3, 20),
            ..Self::default()
        }
    }

    /// Set the load resistance in kilo-ohms
    pub fn with_load_resistance(mut self, kohm: f32) -> Self {
        self.load_resistance_kohm = kohm;
        self
    }

    /// Set the converter's maximum raw value
    pub fn with_full_scale(mut self, full_scale: u16) -> Self {
        self.full_scale = full_scale;
        self
    }

    /// Set the clean-air Rs/Ro factor
    pub fn with_clean_air_factor(mut self, factor: f32) -> Self {
        self.clean_air_factor = factor;
        self
    }

    /// Set the calibration loop
    pub fn with_calibration(mut self, samples: u16, interval_ms: u32) -> Self {
        self.calibration = SamplingConfig::new(samples, interval_ms);
        self
    }

    /// Set the read loop
    pub fn with_read(mut self, samples: u16, interval_ms: u32) -> Self {
        self.read = SamplingConfig::new(samples, interval_ms);
        self
    }

    /// Set the cache freshness window
    pub fn with_read_delay_ms(mut self, ms: u64) -> Self {
        self.read_delay_ms = ms;
        self
    }

    /// Set the cache timestamp policy
    pub fn with_cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Check that the pipeline can produce finite numbers with this config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calibration.samples == 0 {
            return Err(ConfigError::ZeroSamples { stage: "calibration" });
        }
        if self.read.samples == 0 {
            return Err(ConfigError::ZeroSamples { stage: "read" });
        }
        if !self.load_resistance_kohm.is_finite() || self.load_resistance_kohm <= 0.0 {
            return Err(ConfigError::InvalidLoadResistance {
                value: self.load_resistance_kohm,
            });
        }
        if !self.clean_air_factor.is_finite() || self.clean_air_factor <= 0.0 {
            return Err(ConfigError::InvalidCleanAirFactor {
                value: self.clean_air_factor,
            });
        }
        if self.full_scale == 0 {
            return Err(ConfigError::ZeroFullScale);
        }
        Ok(())
    }
}
