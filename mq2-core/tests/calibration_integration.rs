//! Integration tests for clean-air calibration and single reads
//!
//! Covers:
//! - Baseline computation from constant and varying raw streams
//! - Blocking time of the sampling loops
//! - Degenerate samples and converter faults
//! - Reset back to the uncalibrated state

#[macro_use]
mod common;

use mq2_core::{
    time::FixedTime, traits::TimeSource, Calibration, GasKind, Readings, SensorConfig,
    SensorError,
};

use common::{
    expected_ppm, expected_resistance, sensor, sensor_with, RecordingSink, ScriptedAdc,
};

#[test]
fn reference_scenario_raw_500() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);

    // Rs = 10 × (1023 − 500) / 500 = 10.46 kΩ, Ro = 10.46 / 9.83
    let ro = sensor.calibrate().unwrap();
    assert_close!(ro, 10.46 / 9.83, 1e-5);
    assert_close!(ro, 1.0641, 1e-4);
    assert_eq!(sensor.baseline(), Some(ro));

    // Same input after calibration: Rs/Ro is the clean-air factor
    let lpg = sensor.read_lpg();
    assert_close!(lpg, expected_ppm(GasKind::Lpg.curve(), 9.83), 1e-4);
    assert!(lpg > 200.0);
}

#[test]
fn constant_stream_baseline_is_independent_of_sample_count() {
    for samples in [1u16, 7, 50] {
        let adc = ScriptedAdc::constant(321);
        let clock = FixedTime::new(0);
        let config = SensorConfig::default().with_calibration(samples, 10);
        let mut sensor = sensor_with(config, &adc, &clock, mq2_core::diagnostics::NullSink);

        let ro = sensor.calibrate().unwrap();
        assert_close!(ro, expected_resistance(321) / 9.83, 1e-5);
        assert_eq!(adc.reads(), usize::from(samples));
    }
}

#[test]
fn baseline_averages_varying_samples() {
    let adc = ScriptedAdc::constant(500);
    adc.queue(&[400, 600]);
    let clock = FixedTime::new(0);
    let config = SensorConfig::default().with_calibration(2, 100);
    let mut sensor = sensor_with(config, &adc, &clock, mq2_core::diagnostics::NullSink);

    let ro = sensor.calibrate().unwrap();
    let mean = (expected_resistance(400) + expected_resistance(600)) / 2.0;
    assert_close!(ro, mean / 9.83, 1e-5);
}

#[test]
fn calibration_blocks_for_full_loop() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(1_000);
    let mut sensor = sensor(&adc, &clock);

    sensor.calibrate().unwrap();
    assert_eq!(clock.now(), 1_000 + 50 * 500);

    // One uncached read: 5 samples at 50 ms
    sensor.read_co();
    assert_eq!(clock.now(), 1_000 + 50 * 500 + 5 * 50);

    let (_, delay, _, _) = sensor.release();
    assert_eq!(delay.total_ms(), 25_250);
}

#[test]
fn calibration_emits_result_line() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let sink = RecordingSink::default();
    let mut sensor = sensor_with(SensorConfig::default(), &adc, &clock, sink.clone());

    sensor.calibrate().unwrap();
    assert_eq!(sink.lines(), vec!["Calibration is done... Ro=1.06kohm".to_string()]);
}

#[test]
fn unit_ratio_gives_curve_intercept() {
    // A clean-air factor of 1 makes Ro equal to the sampled resistance
    let adc = ScriptedAdc::constant(450);
    let clock = FixedTime::new(0);
    let config = SensorConfig::default().with_clean_air_factor(1.0);
    let mut sensor = sensor_with(config, &adc, &clock, mq2_core::diagnostics::NullSink);
    sensor.calibrate().unwrap();

    for kind in GasKind::ALL {
        let curve = kind.curve();
        let intercept = 200.0 + 10f32.powf((-curve.y / curve.slope) + curve.x);
        assert_close!(sensor.concentration(kind).unwrap(), intercept, 1e-4);
    }
}

#[test]
fn uncalibrated_reads_return_no_result() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);

    assert!(!sensor.is_calibrated());
    assert_eq!(sensor.read_lpg(), 0.0);
    assert_eq!(sensor.read_co(), 0.0);
    assert_eq!(sensor.read_smoke(), 0.0);
    assert_eq!(sensor.read_all(false), None);
    assert_eq!(sensor.try_read_all(false), Err(SensorError::NotCalibrated));
    assert_eq!(sensor.concentration(GasKind::Smoke), Err(SensorError::NotCalibrated));

    // Nothing was sampled
    assert_eq!(adc.reads(), 0);
    assert_eq!(clock.now(), 0);
}

#[test]
fn zero_sample_aborts_and_keeps_previous_baseline() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);
    let ro = sensor.calibrate().unwrap();

    adc.queue(&[500, 500, 0]);
    assert_eq!(sensor.calibrate(), Err(SensorError::DegenerateSample { raw: 0 }));
    assert_eq!(sensor.calibration(), Calibration::Calibrated { ro_kohm: ro });
}

#[test]
fn zero_sample_during_read_yields_zero() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);
    sensor.calibrate().unwrap();

    adc.queue(&[0]);
    assert_eq!(sensor.try_read(GasKind::Co), Err(SensorError::DegenerateSample { raw: 0 }));

    adc.queue(&[0]);
    assert_eq!(sensor.read_co(), 0.0);
    assert_eq!(sensor.cached().co, 0.0);
}

#[test]
fn out_of_range_sample_is_reported() {
    let adc = ScriptedAdc::constant(2000);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);

    assert_eq!(
        sensor.calibrate(),
        Err(SensorError::RawOutOfRange { raw: 2000, full_scale: 1023 })
    );
    assert!(!sensor.is_calibrated());
}

#[test]
fn converter_fault_is_recoverable() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);

    adc.fail_next();
    assert_eq!(sensor.calibrate(), Err(SensorError::Adc));

    // Next attempt succeeds with the fault consumed
    assert!(sensor.calibrate().is_ok());
    assert!(sensor.is_calibrated());
}

#[test]
fn fault_after_queued_samples_aborts_calibration() {
    let adc = ScriptedAdc::constant(500);
    adc.queue(&[500, 500]);
    adc.fail_next();
    let clock = FixedTime::new(0);
    let config = SensorConfig::default().with_calibration(5, 10);
    let mut sensor = sensor_with(config, &adc, &clock, mq2_core::diagnostics::NullSink);

    assert_eq!(sensor.calibrate(), Err(SensorError::Adc));
    assert_eq!(adc.reads(), 3);
    assert!(!sensor.is_calibrated());
}

#[test]
fn reset_forgets_baseline_and_cache() {
    let adc = ScriptedAdc::constant(500);
    let clock = FixedTime::new(0);
    let mut sensor = sensor(&adc, &clock);
    sensor.calibrate().unwrap();
    sensor.read_all(false).unwrap();
    assert!(sensor.cached().lpg > 0.0);

    sensor.reset();

    assert!(!sensor.is_calibrated());
    assert_eq!(sensor.baseline(), None);
    assert_eq!(sensor.cached(), Readings::default());
    assert_eq!(sensor.read_lpg(), 0.0);

    // Recalibration brings it back
    sensor.calibrate().unwrap();
    assert!(sensor.read_lpg() > 200.0);
}

#[test]
fn channel_is_reported() {
    let adc = ScriptedAdc::constant(500).on_channel(3);
    let clock = FixedTime::new(0);
    let sensor = sensor(&adc, &clock);
    assert_eq!(sensor.channel(), 3);
}
