//! Diagnostic lines and sinks
//!
//! Lines are formatted into a fixed-capacity [`heapless::String`] so the
//! driver can report without an allocator. Each field is formatted on its own
//! and appended whole, so a line that does not fit ends after the last
//! complete field; diagnostics are best effort.
//!
//! Sinks:
//! - [`LogSink`]: forwards to `log::info!` (no-op without the `log` feature)
//! - [`NullSink`]: discards everything

use core::fmt::{self, Write};

use heapless::String;

use crate::{
    gas::{GasKind, Readings},
    traits::DiagnosticSink,
};

/// Capacity of one diagnostic line in bytes
pub const LINE_CAPACITY: usize = 192;

/// One formatted diagnostic line
pub type DiagnosticLine = String<LINE_CAPACITY>;

/// Scratch space for a single field of a line
type Field = String<64>;

/// Sink forwarding lines to the `log` facade at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, line: &str) {
        log_info!("{}", line);
    }
}

/// Sink dropping every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _line: &str) {}
}

/// `Calibration is done... Ro=<ro>kohm`
pub fn calibration_line(ro_kohm: f32) -> DiagnosticLine {
    let mut line = DiagnosticLine::new();
    let _ = push_field(&mut line, format_args!("Calibration is done... Ro={:.2}kohm", ro_kohm));
    line
}

/// Summary of a full read with the live resistance, baseline and raw value
///
/// `rs_kohm` and `raw` are `None` when their extra sample failed.
pub fn readings_line(
    readings: &Readings,
    rs_kohm: Option<f32>,
    ro_kohm: f32,
    raw: Option<u16>,
) -> DiagnosticLine {
    let mut line = DiagnosticLine::new();
    let _ = write_readings(&mut line, readings, rs_kohm, ro_kohm, raw);
    line
}

fn write_readings(
    line: &mut DiagnosticLine,
    readings: &Readings,
    rs_kohm: Option<f32>,
    ro_kohm: f32,
    raw: Option<u16>,
) -> fmt::Result {
    for (i, kind) in GasKind::ALL.iter().enumerate() {
        let separator = if i > 0 { " | " } else { "" };
        push_field(
            line,
            format_args!("{}{}:{:.2}ppm", separator, kind.label(), readings[*kind]),
        )?;
    }

    match rs_kohm {
        Some(rs) => push_field(line, format_args!(" | RS : {:.2}", rs))?,
        None => push_field(line, format_args!(" | RS : --"))?,
    }
    push_field(line, format_args!(" | RO: {:.2}", ro_kohm))?;
    match raw {
        Some(raw) => push_field(line, format_args!(" | RAW :{}", raw)),
        None => push_field(line, format_args!(" | RAW :--")),
    }
}

/// Append one field only if all of it fits
fn push_field(line: &mut DiagnosticLine, args: fmt::Arguments<'_>) -> fmt::Result {
    let mut field = Field::new();
    field.write_fmt(args)?;
    line.push_str(&field).map_err(|_| fmt::Error)
}
