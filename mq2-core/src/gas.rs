//! Gas Species and Response Curves
//!
//! ## Physics Background
//!
//! An MQ-2 element is a tin-dioxide film whose resistance Rs drops as
//! reducing gases adsorb on it. The datasheet plots Rs/Ro against
//! concentration on log-log axes, where each gas is roughly a straight line:
//!
//! ```text
//! log(Rs/Ro) = slope × (log(ppm) − x) + y
//! ```
//!
//! Solving for ppm gives the conversion used here:
//!
//! ```text
//! ppm = 200 + 10^(((ln(Rs/Ro) − y) / slope) + x)
//! ```
//!
//! The ratio goes through the natural logarithm while the curve points are
//! decimal logarithms. Published readings for these coefficients depend on
//! that combination, so swapping in `log10` shifts every result.
//!
//! ## Table Design
//!
//! Curves are immutable data indexed by [`GasKind`], not per-instance state:
//!
//! ```rust
//! use mq2_core::gas::{GasKind, concentration_for_ratio};
//!
//! let curve = GasKind::Lpg.curve();
//! let ppm = concentration_for_ratio(curve, 1.0).unwrap();
//! assert!(ppm > 200.0);
//! ```

use crate::{
    constants::sensor::{
        CONCENTRATION_OFFSET_PPM,
        LPG_CURVE_X, LPG_CURVE_Y, LPG_CURVE_SLOPE,
        CO_CURVE_X, CO_CURVE_Y, CO_CURVE_SLOPE,
        SMOKE_CURVE_X, SMOKE_CURVE_Y, SMOKE_CURVE_SLOPE,
    },
    errors::{SensorError, SensorResult},
};

/// Gas species tracked by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GasKind {
    /// Liquefied petroleum gas
    Lpg = 0,
    /// Carbon monoxide
    Co = 1,
    /// Smoke
    Smoke = 2,
}

impl GasKind {
    /// Number of tracked species
    pub const COUNT: usize = 3;

    /// All species in slot order
    pub const ALL: [GasKind; Self::COUNT] = [GasKind::Lpg, GasKind::Co, GasKind::Smoke];

    /// Slot index used by caches and reading arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Response curve for this species
    pub fn curve(self) -> &'static Curve {
        &CURVES[self.index()]
    }

    /// Short uppercase label used in diagnostic lines
    pub const fn label(self) -> &'static str {
        match self {
            GasKind::Lpg => "LPG",
            GasKind::Co => "CO",
            GasKind::Smoke => "SMOKE",
        }
    }
}

/// Log-log line fit of Rs/Ro against concentration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    /// log10(ppm) of the starting point
    pub x: f32,
    /// log10(Rs/Ro) of the starting point
    pub y: f32,
    /// Gradient of the line
    pub slope: f32,
}

impl Curve {
    /// Build a curve from its coefficients
    pub const fn new(x: f32, y: f32, slope: f32) -> Self {
        Self { x, y, slope }
    }
}

/// Curve table in [`GasKind`] slot order
pub static CURVES: [Curve; GasKind::COUNT] = [
    Curve::new(LPG_CURVE_X, LPG_CURVE_Y, LPG_CURVE_SLOPE),
    Curve::new(CO_CURVE_X, CO_CURVE_Y, CO_CURVE_SLOPE),
    Curve::new(SMOKE_CURVE_X, SMOKE_CURVE_Y, SMOKE_CURVE_SLOPE),
];

/// Evaluate a curve at a resistance ratio
///
/// Fails with [`SensorError::InvalidRatio`] when the ratio is zero, negative
/// or not finite, and with [`SensorError::NonFiniteConcentration`] when the
/// exponent overflows.
pub fn concentration_for_ratio(curve: &Curve, ratio: f32) -> SensorResult<f32> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(SensorError::InvalidRatio { ratio });
    }

    let exponent = ((libm::logf(ratio) - curve.y) / curve.slope) + curve.x;
    let ppm = CONCENTRATION_OFFSET_PPM + libm::powf(10.0, exponent);

    if !ppm.is_finite() {
        return Err(SensorError::NonFiniteConcentration);
    }

    Ok(ppm)
}

/// One concentration per species, in ppm
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// LPG concentration
    pub lpg: f32,
    /// Carbon monoxide concentration
    pub co: f32,
    /// Smoke concentration
    pub smoke: f32,
}

impl Readings {
    /// Build from values in [`GasKind`] slot order
    pub const fn from_array(values: [f32; GasKind::COUNT]) -> Self {
        Self {
            lpg: values[0],
            co: values[1],
            smoke: values[2],
        }
    }

    /// Values in [`GasKind`] slot order
    pub const fn to_array(&self) -> [f32; GasKind::COUNT] {
        [self.lpg, self.co, self.smoke]
    }
}

impl core::ops::Index<GasKind> for Readings {
    type Output = f32;

    fn index(&self, kind: GasKind) -> &f32 {
        match kind {
            GasKind::Lpg => &self.lpg,
            GasKind::Co => &self.co,
            GasKind::Smoke => &self.smoke,
        }
    }
}
