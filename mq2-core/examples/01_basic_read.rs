//! Basic MQ-2 Read Example
//!
//! Calibrates a simulated MQ-2 in clean air, takes a full reading with a
//! summary line, then shows per-gas reads being served from the cache.
//!
//! ## What You'll Learn
//!
//! - Wiring a sensor from an analog source, a delay and a clock
//! - Shortening the sampling loops with `SensorConfig::fast()`
//! - Reading all gases at once versus one gas at a time
//! - How the freshness window avoids resampling
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_read
//! ```

use std::{cell::Cell, convert::Infallible, rc::Rc, thread, time::Duration};

use embedded_hal::delay::DelayNs;
use mq2_core::{
    time::MonotonicClock,
    traits::{AnalogSource, DiagnosticSink},
    GasKind, GasSensor, SensorConfig,
};

/// Analog source standing in for the breakout board's output
///
/// The level is shared so the example can "release gas" while the sensor
/// owns the source. Every read counts a conversion.
struct SimulatedMq2 {
    level: Rc<Cell<u16>>,
    conversions: Rc<Cell<u32>>,
}

impl AnalogSource for SimulatedMq2 {
    type Error = Infallible;

    fn read_raw(&mut self) -> Result<u16, Infallible> {
        self.conversions.set(self.conversions.get() + 1);
        Ok(self.level.get())
    }
}

/// Blocking delay on the host
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

/// Prints diagnostic lines to stdout
struct Stdout;

impl DiagnosticSink for Stdout {
    fn emit(&mut self, line: &str) {
        println!("  > {}", line);
    }
}

fn main() {
    println!("MQ-2 Basic Read Example");
    println!("=======================\n");

    let level = Rc::new(Cell::new(180u16));
    let conversions = Rc::new(Cell::new(0u32));
    let adc = SimulatedMq2 {
        level: Rc::clone(&level),
        conversions: Rc::clone(&conversions),
    };

    let config = SensorConfig::fast().with_read_delay_ms(2_000);
    let clock = MonotonicClock::new();
    let mut sensor = match GasSensor::with_config(config, adc, StdDelay, clock, Stdout) {
        Ok(sensor) => sensor,
        Err(e) => {
            println!("Invalid configuration: {}", e);
            return;
        }
    };

    let config = sensor.config();
    println!("Configuration:");
    println!("  Load resistance: {} kohm", config.load_resistance_kohm);
    println!(
        "  Calibration: {} samples, {} ms",
        config.calibration.samples,
        config.calibration.total_ms()
    );
    println!(
        "  Read: {} samples, {} ms",
        config.read.samples,
        config.read.total_ms()
    );
    println!("  Cache window: {} ms\n", config.read_delay_ms);

    // Reads before calibration report nothing
    println!("Before calibration: LPG = {:.2} ppm\n", sensor.read_lpg());

    println!("Calibrating in clean air...");
    match sensor.calibrate() {
        Ok(ro) => println!("  Ro = {:.3} kohm\n", ro),
        Err(e) => {
            println!("  Calibration failed: {}", e);
            return;
        }
    }

    // Smoke drifts in
    level.set(420);
    println!("Full read with summary line:");
    if let Some(readings) = sensor.read_all(true) {
        for kind in GasKind::ALL {
            println!("  {:<5} {:>10.2} ppm", kind.label(), readings[kind]);
        }
    }
    println!();

    // Inside the window: no new conversions
    let before = conversions.get();
    println!("Per-gas reads inside the window:");
    println!("  LPG   {:>10.2} ppm", sensor.read_lpg());
    println!("  CO    {:>10.2} ppm", sensor.read_co());
    println!("  SMOKE {:>10.2} ppm", sensor.read_smoke());
    println!("  Conversions: {}\n", conversions.get() - before);

    // After the window: one gas resamples
    thread::sleep(Duration::from_millis(2_100));
    level.set(600);
    let before = conversions.get();
    println!("CO after the window expired:");
    println!("  CO    {:>10.2} ppm", sensor.read_co());
    println!("  Conversions: {}\n", conversions.get() - before);

    sensor.reset();
    println!("After reset: calibrated = {}", sensor.is_calibrated());
}
