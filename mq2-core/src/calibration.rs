//! Calibration state
//!
//! The baseline resistance Ro only exists after a clean-air calibration. A
//! two-state type makes "read before calibrate" unrepresentable inside the
//! driver: every path that needs Ro has to match on it first.

use crate::errors::{SensorError, SensorResult};

/// Clean-air baseline of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Calibration {
    /// No baseline yet, or reset since
    #[default]
    Uncalibrated,
    /// Baseline established
    Calibrated {
        /// Ro in kilo-ohms, strictly positive and finite
        ro_kohm: f32,
    },
}

impl Calibration {
    /// Accept a measured baseline if it is usable
    pub fn from_baseline(ro_kohm: f32) -> SensorResult<Self> {
        if !ro_kohm.is_finite() || ro_kohm <= 0.0 {
            return Err(SensorError::InvalidBaseline { ro: ro_kohm });
        }
        Ok(Self::Calibrated { ro_kohm })
    }

    /// True once a baseline has been established
    pub fn is_calibrated(&self) -> bool {
        matches!(self, Self::Calibrated { .. })
    }

    /// Ro in kilo-ohms, if calibrated
    pub fn baseline(&self) -> Option<f32> {
        match *self {
            Self::Calibrated { ro_kohm } => Some(ro_kohm),
            Self::Uncalibrated => None,
        }
    }

    /// Ro, or [`SensorError::NotCalibrated`]
    pub fn require(&self) -> SensorResult<f32> {
        self.baseline().ok_or(SensorError::NotCalibrated)
    }
}
