//! JSON Emitter
//!
//! Machine-readable diagnostic output. Fix-its are included with their
//! substitutions so editors can apply them directly.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter, SourceContext};

/// JSON emitter; wrap output in [`begin`](Self::begin)/[`end`](Self::end).
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    source: Option<SourceContext>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
        }
    }

    /// Add `file`, `line` and `column` to every label.
    #[must_use]
    pub fn with_source(mut self, source: SourceContext) -> Self {
        self.source = Some(source);
        self
    }

    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(self.writer, "    \"code\": \"{}\",", diagnostic.code);
        let _ = writeln!(
            self.writer,
            "    \"severity\": \"{}\",",
            diagnostic.severity
        );
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            if let Some(ctx) = &self.source {
                let (line, column) = ctx.line_col(label.span.start);
                let _ = writeln!(
                    self.writer,
                    "        \"file\": \"{}\",",
                    escape_json(&ctx.path)
                );
                let _ = writeln!(self.writer, "        \"line\": {line},");
                let _ = writeln!(self.writer, "        \"column\": {column},");
            }
            let _ = writeln!(self.writer, "        \"start\": {},", label.span.start);
            let _ = writeln!(self.writer, "        \"end\": {},", label.span.end);
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "        \"primary\": {}", label.is_primary);
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{}", escape_json(note), comma);
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(
                self.writer,
                "      \"{}\"{}",
                escape_json(suggestion),
                comma
            );
        }
        let _ = writeln!(self.writer, "    ],");

        let _ = writeln!(self.writer, "    \"fixes\": [");
        for (i, suggestion) in diagnostic.structured_suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.structured_suggestions.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&suggestion.message)
            );
            let _ = writeln!(
                self.writer,
                "        \"applicability\": \"{}\",",
                suggestion.applicability.as_str()
            );
            let _ = writeln!(self.writer, "        \"substitutions\": [");
            for (j, sub) in suggestion.substitutions.iter().enumerate() {
                let comma = trailing_comma(j, suggestion.substitutions.len());
                let _ = writeln!(
                    self.writer,
                    "          {{ \"start\": {}, \"end\": {}, \"snippet\": \"{}\" }}{comma}",
                    sub.span.start,
                    sub.span.end,
                    escape_json(&sub.snippet)
                );
            }
            let _ = writeln!(self.writer, "        ]");
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}
