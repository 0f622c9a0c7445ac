//! Diagnostic Emitters
//!
//! Structured output for finished diagnostics. Human-oriented rendering
//! (glyphs, colors, snippets) belongs to a printer outside this crate.
//!
//! Each emitter implements the `DiagnosticEmitter` trait.

mod json;

pub use json::JsonEmitter;

use std::fmt::Write;

use crate::{Diagnostic, Report};

/// Returns a trailing comma for JSON list serialization.
///
/// Returns `","` when `index` is not the last element, `""` otherwise.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Trait for emitting reports in various formats.
pub trait DiagnosticEmitter<M> {
    /// Emit a single report.
    fn emit(&mut self, report: &Report<M>);

    /// Emit multiple reports.
    fn emit_all(&mut self, reports: &[Report<M>]) {
        for report in reports {
            self.emit(report);
        }
    }

    /// Emit every report of a diagnostic, in display order.
    fn emit_diagnostic(&mut self, diagnostic: &Diagnostic<M>) {
        self.emit_all(diagnostic.reports());
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}
