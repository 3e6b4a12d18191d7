//! Raw sample to sensor resistance
//!
//! The sensor and the load resistor RL form a voltage divider; the converter
//! sees the voltage across RL. With `raw` on a `full_scale` converter:
//!
//! ```text
//! Rs = RL × (full_scale − raw) / raw
//! ```
//!
//! A raw value of zero means the output sits at ground: either no gas
//! response at all or a disconnected wire. The division is undefined there,
//! so it is reported as [`SensorError::DegenerateSample`] instead of
//! producing infinity.

use crate::{
    config::SensorConfig,
    errors::{SensorError, SensorResult},
};

/// Convert one raw converter reading to sensor resistance in kilo-ohms
pub fn resistance_from_raw(raw: u16, config: &SensorConfig) -> SensorResult<f32> {
    if raw == 0 {
        return Err(SensorError::DegenerateSample { raw });
    }
    if raw > config.full_scale {
        return Err(SensorError::RawOutOfRange {
            raw,
            full_scale: config.full_scale,
        });
    }

    let headroom = f32::from(config.full_scale - raw);
    Ok(config.load_resistance_kohm * headroom / f32::from(raw))
}
