//! MQ-2 Sensor Specifications
//!
//! Measurement circuit and response-curve data for the MQ-2 combustible gas
//! sensor on a typical breakout board.

// ===== MEASUREMENT CIRCUIT =====

/// Load resistance RL between the sensor output and ground (kΩ).
///
/// Most MQ-2 breakout boards fit a 10 kΩ trimmer in this position.
/// Adjust when the board uses a different value.
///
/// Source: MQ-2 datasheet, standard test circuit
pub const LOAD_RESISTANCE_KOHM: f32 = 10.0;

/// Maximum raw value of a 10-bit converter.
///
/// Source: AVR ADC (Arduino Uno/Nano)
pub const ADC_FULL_SCALE_10BIT: u16 = 1023;

/// Maximum raw value of a 12-bit converter.
///
/// Source: ESP32 / STM32 SAR ADC
pub const ADC_FULL_SCALE_12BIT: u16 = 4095;

/// Rs/Ro in clean air.
///
/// The sensor resistance in clean air is 9.83 times its resistance in
/// 1000 ppm H2, so dividing the clean-air reading by this factor yields Ro.
///
/// Source: MQ-2 datasheet, sensitivity characteristics chart
pub const RO_CLEAN_AIR_FACTOR: f32 = 9.83;

/// Constant added to every curve evaluation (ppm).
pub const CONCENTRATION_OFFSET_PPM: f32 = 200.0;

// ===== RESPONSE CURVES =====
//
// Each curve is a line through two points of the datasheet's log-log
// sensitivity chart: (x, y) is the starting point, `slope` the gradient.

/// LPG curve start, log10(ppm).
pub const LPG_CURVE_X: f32 = 2.3;
/// LPG curve start, log10(Rs/Ro).
pub const LPG_CURVE_Y: f32 = 0.21;
/// LPG curve slope.
pub const LPG_CURVE_SLOPE: f32 = -0.47;

/// CO curve start, log10(ppm).
pub const CO_CURVE_X: f32 = 2.3;
/// CO curve start, log10(Rs/Ro).
pub const CO_CURVE_Y: f32 = 0.72;
/// CO curve slope.
pub const CO_CURVE_SLOPE: f32 = -0.34;

/// Smoke curve start, log10(ppm).
pub const SMOKE_CURVE_X: f32 = 2.3;
/// Smoke curve start, log10(Rs/Ro).
pub const SMOKE_CURVE_Y: f32 = 0.53;
/// Smoke curve slope.
pub const SMOKE_CURVE_SLOPE: f32 = -0.44;
