//! Diagnostic Emitters
//!
//! Output formats for validation results:
//! - Report: the boxed banner printed before refusing to execute
//! - Plain: one diagnostic per line, nothing else
//!
//! Each emitter implements the `DiagnosticEmitter` trait over any
//! `std::io::Write`, so tests can render into a `Vec<u8>`.

use std::io::{self, Write};

use crate::Diagnostic;

const REPORT_HEADER: &str = "=== Semantic Validation Errors ===";
const REPORT_FOOTER: &str = "================================";
const ABORT_NOTICE: &str = "Execution aborted due to validation errors.";

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary after all diagnostics.
    fn emit_summary(&mut self, error_count: usize);
}

/// Emits the full validation report:
///
/// ```text
/// === Semantic Validation Errors ===
/// Line 3: SEM002: Undefined variable: 'y'
/// Total errors: 1
/// ================================
/// Execution aborted due to validation errors.
/// ```
pub struct ReportEmitter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> ReportEmitter<W> {
    pub fn new(writer: W) -> Self {
        ReportEmitter {
            writer,
            header_written: false,
        }
    }

    /// Render a complete report for `diagnostics`. Writes nothing if empty.
    pub fn report(&mut self, diagnostics: &[Diagnostic]) {
        if diagnostics.is_empty() {
            return;
        }
        self.emit_all(diagnostics);
        self.emit_summary(diagnostics.len());
        self.flush();
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ensure_header(&mut self) {
        if !self.header_written {
            let _ = writeln!(self.writer, "{REPORT_HEADER}");
            self.header_written = true;
        }
    }
}

impl ReportEmitter<io::Stdout> {
    /// Create a report emitter for stdout.
    pub fn stdout() -> Self {
        ReportEmitter::new(io::stdout())
    }
}

impl<W: Write> DiagnosticEmitter for ReportEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.ensure_header();
        let _ = writeln!(self.writer, "{diagnostic}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.ensure_header();
        let _ = writeln!(self.writer, "Total errors: {error_count}");
        let _ = writeln!(self.writer, "{REPORT_FOOTER}");
        let _ = writeln!(self.writer, "{ABORT_NOTICE}");
    }
}

/// One diagnostic per line, no banner. Used by `check`.
pub struct PlainEmitter<W: Write> {
    writer: W,
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(writer: W) -> Self {
        PlainEmitter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PlainEmitter<io::Stderr> {
    /// Create a plain emitter for stderr.
    pub fn stderr() -> Self {
        PlainEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for PlainEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = writeln!(self.writer, "{diagnostic}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count > 0 {
            let plural = if error_count == 1 { "" } else { "s" };
            let _ = writeln!(self.writer, "{error_count} error{plural}");
        }
    }
}

#[cfg(test)]
mod tests;
