//! Time-Related Constants
//!
//! Sampling loops and the cache freshness window. Every sampling step waits
//! for the sensor to settle, so these values directly set how long
//! calibration and reads block.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

// ===== CALIBRATION =====

/// Samples averaged during clean-air calibration.
///
/// Source: MQ-2 reference driver
pub const CALIBRATION_SAMPLE_TIMES: u16 = 50;

/// Delay after each calibration sample (milliseconds).
///
/// 50 samples at 500 ms block for 25 seconds in total.
pub const CALIBRATION_SAMPLE_INTERVAL_MS: u32 = 500;

// ===== NORMAL OPERATION =====

/// Samples averaged for a single resistance reading.
pub const READ_SAMPLE_TIMES: u16 = 5;

/// Delay after each read sample (milliseconds).
pub const READ_SAMPLE_INTERVAL_MS: u32 = 50;

/// Freshness window for cached concentrations (milliseconds).
///
/// Reads inside this window return the cached value instead of
/// resampling for another 250 ms.
pub const READ_DELAY_MS: u64 = 5 * MS_PER_SECOND;
