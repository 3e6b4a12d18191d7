//! Time-gated concentration cache
//!
//! Every resample blocks for the read loop (250 ms with defaults), so
//! repeated per-gas reads inside a short window return the last value
//! instead. A cached value is served only when
//!
//! 1. the relevant timestamp is less than the window old, and
//! 2. the cached value is strictly positive (zero means "never computed").
//!
//! ## Timestamp policy
//!
//! ```text
//! CacheMode::PerGas   LPG ─ts0   CO ─ts1   SMOKE ─ts2   (per-gas and full reads write)
//! CacheMode::Shared   LPG ─┐     CO ─┤     SMOKE ─┘
//!                          └──── ts (only full reads write)
//! ```
//!
//! [`clear`](ConcentrationCache::clear) zeroes the values but keeps the
//! timestamps; zero values already force a resample.

use crate::{
    config::CacheMode,
    gas::{GasKind, Readings},
    time::{elapsed_ms, Timestamp},
};

/// Last concentrations per gas plus their freshness timestamps
#[derive(Debug, Clone)]
pub struct ConcentrationCache {
    values: [f32; GasKind::COUNT],
    stamps: [Option<Timestamp>; GasKind::COUNT],
    shared: Option<Timestamp>,
    mode: CacheMode,
    window_ms: u64,
}

impl ConcentrationCache {
    /// Empty cache with the given policy and window
    pub fn new(mode: CacheMode, window_ms: u64) -> Self {
        Self {
            values: [0.0; GasKind::COUNT],
            stamps: [None; GasKind::COUNT],
            shared: None,
            mode,
            window_ms,
        }
    }

    /// Cached value for `kind` if it may be served at `now`
    pub fn fresh(&self, kind: GasKind, now: Timestamp) -> Option<f32> {
        let value = self.values[kind.index()];
        if value <= 0.0 {
            return None;
        }

        let stamp = self.stamp(kind)?;
        if elapsed_ms(stamp, now) < self.window_ms {
            Some(value)
        } else {
            None
        }
    }

    /// Store a freshly computed value for one gas
    ///
    /// Only moves the window in [`CacheMode::PerGas`].
    pub fn store(&mut self, kind: GasKind, value: f32, now: Timestamp) {
        self.values[kind.index()] = value;
        if self.mode == CacheMode::PerGas {
            self.stamps[kind.index()] = Some(now);
        }
    }

    /// Store a full set of readings; moves every window
    pub fn store_all(&mut self, readings: &Readings, now: Timestamp) {
        self.values = readings.to_array();
        self.stamps = [Some(now); GasKind::COUNT];
        self.shared = Some(now);
    }

    /// Last stored value for `kind`, zero if never computed
    pub fn value(&self, kind: GasKind) -> f32 {
        self.values[kind.index()]
    }

    /// All last stored values
    pub fn values(&self) -> Readings {
        Readings::from_array(self.values)
    }

    /// Timestamp gating `kind` under the current policy
    pub fn stamp(&self, kind: GasKind) -> Option<Timestamp> {
        match self.mode {
            CacheMode::PerGas => self.stamps[kind.index()],
            CacheMode::Shared => self.shared,
        }
    }

    /// Zero every value, keeping timestamps
    pub fn clear(&mut self) {
        self.values = [0.0; GasKind::COUNT];
    }
}
