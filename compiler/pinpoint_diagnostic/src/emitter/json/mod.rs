//! JSON Emitter
//!
//! Machine-readable report output in JSON format.

use std::fmt::Display;
use std::io::Write;

use crate::{Position, Report};

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    fn write_position(&mut self, pos: &Position) {
        let _ = writeln!(
            self.writer,
            "        \"file\": \"{}\",",
            escape_json(&pos.file)
        );
        let _ = writeln!(
            self.writer,
            "        \"begin\": {{ \"line\": {}, \"column\": {} }},",
            pos.begin.0, pos.begin.1
        );
        let _ = writeln!(
            self.writer,
            "        \"end\": {{ \"line\": {}, \"column\": {} }}",
            pos.end.0, pos.end.1
        );
    }
}

impl<M: Display, W: Write> DiagnosticEmitter<M> for JsonEmitter<W> {
    fn emit(&mut self, report: &Report<M>) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"severity\": \"{}\",",
            report.severity.as_str()
        );
        match &report.code {
            Some(code) => {
                let _ = writeln!(
                    self.writer,
                    "    \"code\": \"{}\",",
                    escape_json(&code.to_string())
                );
            }
            None => {
                let _ = writeln!(self.writer, "    \"code\": null,");
            }
        }
        let _ = writeln!(
            self.writer,
            "    \"headline\": \"{}\",",
            escape_json(&report.headline.to_string())
        );

        // Annotations
        let _ = writeln!(self.writer, "    \"annotations\": [");
        for (i, (pos, marker)) in report.annotations.iter().enumerate() {
            let comma = trailing_comma(i, report.annotations.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"kind\": \"{}\",", marker.kind());
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&marker.message().to_string())
            );
            self.write_position(pos);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        // Notes
        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in report.notes.iter().enumerate() {
            let comma = trailing_comma(i, report.notes.len());
            let _ = writeln!(
                self.writer,
                "      {{ \"kind\": \"{}\", \"message\": \"{}\" }}{comma}",
                note.kind(),
                escape_json(&note.message().to_string())
            );
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
