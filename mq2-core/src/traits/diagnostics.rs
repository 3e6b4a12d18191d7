//! Diagnostic output capability
//!
//! Human-readable lines (calibration result, full-read summaries) go through
//! a [`DiagnosticSink`]. Emission is best effort: a sink must not block for
//! long and the driver never depends on what it does with the text.

/// Receiver of human-readable diagnostic lines
pub trait DiagnosticSink {
    /// Accept one line of text, without trailing newline
    fn emit(&mut self, line: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn emit(&mut self, line: &str) {
        (**self).emit(line)
    }
}
