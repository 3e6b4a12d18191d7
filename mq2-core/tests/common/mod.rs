//! Test doubles for the platform capabilities
//!
//! - [`ScriptedAdc`]: raw values set or queued from the test while the
//!   sensor owns the source
//! - [`ClockDelay`]: delay that advances a [`FixedTime`] instead of sleeping
//! - [`RecordingSink`]: keeps every diagnostic line

#![allow(dead_code, unused_macros)]

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use embedded_hal::delay::DelayNs;
use mq2_core::{
    diagnostics::NullSink,
    time::FixedTime,
    traits::{AnalogSource, DiagnosticSink},
    GasSensor, SensorConfig,
};

/// Converter failure injected by [`ScriptedAdc::fail_next`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectedFault;

#[derive(Debug, Default)]
struct Script {
    queued: VecDeque<Result<u16, InjectedFault>>,
    fallback: u16,
    reads: usize,
}

/// Analog source driven by a shared script
///
/// Queued values are served first, then the fallback value forever.
#[derive(Debug, Clone)]
pub struct ScriptedAdc {
    script: Rc<RefCell<Script>>,
    channel: u8,
}

impl ScriptedAdc {
    /// Source returning `value` until told otherwise
    pub fn constant(value: u16) -> Self {
        Self {
            script: Rc::new(RefCell::new(Script {
                fallback: value,
                ..Script::default()
            })),
            channel: 0,
        }
    }

    /// Label the source with an input line
    pub fn on_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Change the value served once the queue is empty
    pub fn set(&self, value: u16) {
        self.script.borrow_mut().fallback = value;
    }

    /// Serve `values` next, in order
    pub fn queue(&self, values: &[u16]) {
        let mut script = self.script.borrow_mut();
        script.queued.extend(values.iter().map(|v| Ok(*v)));
    }

    /// Make the conversion after the queued values fail
    pub fn fail_next(&self) {
        self.script.borrow_mut().queued.push_back(Err(InjectedFault));
    }

    /// Number of conversions performed so far
    pub fn reads(&self) -> usize {
        self.script.borrow().reads
    }
}

impl AnalogSource for ScriptedAdc {
    type Error = InjectedFault;

    fn read_raw(&mut self) -> Result<u16, InjectedFault> {
        let mut script = self.script.borrow_mut();
        script.reads += 1;
        let fallback = script.fallback;
        script.queued.pop_front().unwrap_or(Ok(fallback))
    }

    fn channel(&self) -> u8 {
        self.channel
    }
}

/// Delay that moves a test clock forward instead of sleeping
pub struct ClockDelay<'a> {
    clock: &'a FixedTime,
    total_ns: u64,
}

impl<'a> ClockDelay<'a> {
    pub fn new(clock: &'a FixedTime) -> Self {
        Self { clock, total_ns: 0 }
    }

    /// Total delay requested, in milliseconds
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.clock.advance(u64::from(ns) / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
        self.clock.advance(u64::from(ms));
    }
}

/// Sink keeping every emitted line
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}

/// Sensor wired to test doubles
pub type TestSensor<'a, S = NullSink> = GasSensor<ScriptedAdc, ClockDelay<'a>, &'a FixedTime, S>;

/// Build a sensor with `config` whose delays advance `clock`
pub fn sensor_with<'a, S: DiagnosticSink>(
    config: SensorConfig,
    adc: &ScriptedAdc,
    clock: &'a FixedTime,
    sink: S,
) -> TestSensor<'a, S> {
    GasSensor::with_config(config, adc.clone(), ClockDelay::new(clock), clock, sink)
        .expect("test config is valid")
}

/// Sensor with reference config and no diagnostics
pub fn sensor<'a>(adc: &ScriptedAdc, clock: &'a FixedTime) -> TestSensor<'a> {
    sensor_with(SensorConfig::default(), adc, clock, NullSink)
}

/// 10 × (1023 − raw) / raw
pub fn expected_resistance(raw: u16) -> f32 {
    10.0 * f32::from(1023 - raw) / f32::from(raw)
}

/// Concentration formula evaluated directly
pub fn expected_ppm(curve: &mq2_core::Curve, ratio: f32) -> f32 {
    200.0 + 10f32.powf(((ratio.ln() - curve.y) / curve.slope) + curve.x)
}

macro_rules! assert_close {
    ($actual:expr, $expected:expr, $rel:expr) => {{
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        let tolerance = expected.abs() * $rel;
        assert!(
            (actual - expected).abs() <= tolerance,
            "{} not within {} of {}",
            actual,
            tolerance,
            expected
        );
    }};
}
