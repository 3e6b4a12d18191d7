//! Error Types for Sensor and Configuration Failures
//!
//! ## Design Philosophy
//!
//! The driver runs on microcontrollers, so errors follow the same rules as
//! the rest of the crate:
//!
//! 1. **Small Size**: variants carry at most two numbers. Errors come back
//!    from every read and may be logged from an interrupt-free main loop.
//!
//! 2. **No Heap Allocation**: no `String`, only inline data.
//!
//! 3. **Copy Semantics**: errors are `Copy` so they can be returned, logged
//!    and compared without moves.
//!
//! ## Error Categories
//!
//! ### Usage
//! - `NotCalibrated`: a concentration was requested before `calibrate()`
//!
//! ### Degenerate Samples
//! - `DegenerateSample`: raw reading of 0, the resistance formula divides by it
//! - `RawOutOfRange`: raw reading above the converter's full scale
//! - `InvalidRatio`: Rs/Ro not strictly positive, the logarithm is undefined
//! - `InvalidBaseline`: calibration produced a non-positive or non-finite Ro
//! - `NonFiniteConcentration`: the curve evaluation overflowed
//!
//! ### Hardware
//! - `Adc`: the analog source reported a conversion failure
//!
//! None of these abort the program. Sensor noise is recoverable; the
//! convenience reads on [`GasSensor`](crate::GasSensor) log them and return
//! zero, the `try_*` variants hand them to the caller.
//!
//! ```rust
//! use mq2_core::{SensorError, resistance::resistance_from_raw, SensorConfig};
//!
//! let config = SensorConfig::default();
//! match resistance_from_raw(0, &config) {
//!     Err(SensorError::DegenerateSample { raw }) => assert_eq!(raw, 0),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Sensor errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Read attempted before clean-air calibration
    #[error("Device not calibrated, call calibrate() before reading any value")]
    NotCalibrated,

    /// Raw sample of zero makes the resistance formula divide by zero
    #[error("Degenerate raw sample {raw}: resistance undefined")]
    DegenerateSample {
        /// The offending raw reading
        raw: u16,
    },

    /// Raw sample above the converter's maximum
    #[error("Raw sample {raw} exceeds full scale {full_scale}")]
    RawOutOfRange {
        /// The offending raw reading
        raw: u16,
        /// Configured converter maximum
        full_scale: u16,
    },

    /// Resistance ratio is not a positive finite number
    #[error("Resistance ratio {ratio} is not strictly positive")]
    InvalidRatio {
        /// Computed Rs/Ro
        ratio: f32,
    },

    /// Calibration produced an unusable baseline
    #[error("Calibration produced invalid baseline {ro} kohm")]
    InvalidBaseline {
        /// Computed Ro in kilo-ohms
        ro: f32,
    },

    /// Curve evaluation overflowed to infinity or NaN
    #[error("Concentration is not a finite number")]
    NonFiniteConcentration,

    /// Analog source failed to convert
    #[error("Analog read failed")]
    Adc,
}

/// Configuration rejected by [`SensorConfig::validate`](crate::SensorConfig::validate)
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A sampling loop would take no samples
    #[error("Sample count must be at least 1 for {stage}")]
    ZeroSamples {
        /// Which sampling stage is misconfigured
        stage: &'static str,
    },

    /// Load resistance must be positive and finite
    #[error("Load resistance {value} kohm must be positive")]
    InvalidLoadResistance {
        /// Configured value
        value: f32,
    },

    /// Clean-air factor must be positive and finite
    #[error("Clean-air factor {value} must be positive")]
    InvalidCleanAirFactor {
        /// Configured value
        value: f32,
    },

    /// Converter full scale of zero leaves no valid raw range
    #[error("ADC full scale must be non-zero")]
    ZeroFullScale,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotCalibrated =>
                defmt::write!(fmt, "Not calibrated"),
            Self::DegenerateSample { raw } =>
                defmt::write!(fmt, "Degenerate raw sample {}", raw),
            Self::RawOutOfRange { raw, full_scale } =>
                defmt::write!(fmt, "Raw {} exceeds {}", raw, full_scale),
            Self::InvalidRatio { ratio } =>
                defmt::write!(fmt, "Invalid ratio {}", ratio),
            Self::InvalidBaseline { ro } =>
                defmt::write!(fmt, "Invalid baseline {}", ro),
            Self::NonFiniteConcentration =>
                defmt::write!(fmt, "Non-finite concentration"),
            Self::Adc =>
                defmt::write!(fmt, "ADC read failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroSamples { stage } =>
                defmt::write!(fmt, "Zero samples for {}", stage),
            Self::InvalidLoadResistance { value } =>
                defmt::write!(fmt, "Invalid load resistance {}", value),
            Self::InvalidCleanAirFactor { value } =>
                defmt::write!(fmt, "Invalid clean-air factor {}", value),
            Self::ZeroFullScale =>
                defmt::write!(fmt, "Zero full scale"),
        }
    }
}
