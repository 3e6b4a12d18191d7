//! Constants for the MQ-2 driver
//!
//! All numeric values are defined here with their unit in the name and a
//! note on where they come from.
//!
//! ## Organization
//!
//! - **Sensor**: measurement circuit, converter and response-curve data
//! - **Time**: sampling intervals and the cache freshness window
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the datasheet or board schematic for new values
//! 3. Use descriptive names that include units

/// MQ-2 circuit, converter and curve constants.
pub mod sensor;

/// Sampling and cache timing constants.
pub mod time;

pub use sensor::{
    LOAD_RESISTANCE_KOHM, ADC_FULL_SCALE_10BIT, RO_CLEAN_AIR_FACTOR,
    CONCENTRATION_OFFSET_PPM,
};

pub use time::{
    CALIBRATION_SAMPLE_TIMES, CALIBRATION_SAMPLE_INTERVAL_MS,
    READ_SAMPLE_TIMES, READ_SAMPLE_INTERVAL_MS, READ_DELAY_MS,
};
