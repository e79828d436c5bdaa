//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical diagnostics at the same position
//! - Position-sorted flushing
//! - `ErrorGuaranteed` proof that errors were emitted

use xc_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, ErrorCode, ErrorGuaranteed};

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Drop a diagnostic identical in code, message and position to one
    /// already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct QueuedDiagnostic {
    diagnostic: Diagnostic,
    line: u32,
    column: u32,
}

/// Queue for collecting, deduplicating, and sorting the diagnostics of one
/// source file.
///
/// ```text
/// let mut queue = DiagnosticQueue::new(source);
/// queue.add(diagnostic);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug)]
pub struct DiagnosticQueue<'src> {
    source: &'src str,
    lines: LineOffsetTable,
    diagnostics: Vec<QueuedDiagnostic>,
    error_count: usize,
    /// Set once the limit is hit, so the overflow note is added only once.
    overflowed: bool,
    config: DiagnosticConfig,
}

impl<'src> DiagnosticQueue<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, DiagnosticConfig::default())
    }

    pub fn with_config(source: &'src str, config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            source,
            lines: LineOffsetTable::build(source),
            diagnostics: Vec::new(),
            error_count: 0,
            overflowed: false,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let (line, column) = diag.primary_span().map_or((1, 1), |span| {
            self.lines.offset_to_line_col(self.source, span.start)
        });

        if self.limit_reached() {
            if diag.is_error() && !self.overflowed {
                self.overflowed = true;
                let limit = self.config.error_limit;
                let span = diag.primary_span().unwrap_or(Span::DUMMY);
                self.diagnostics.push(QueuedDiagnostic {
                    diagnostic: too_many_errors(limit, span),
                    line,
                    column,
                });
            }
            return false;
        }

        if self.config.deduplicate && self.is_duplicate(&diag, line, column) {
            return false;
        }

        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(QueuedDiagnostic {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Add every diagnostic from `diags`.
    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.add(diag);
        }
    }

    /// Emit an error diagnostic and get proof it was emitted.
    pub fn emit_error(&mut self, diag: Diagnostic) -> ErrorGuaranteed {
        self.add(diag);
        ErrorGuaranteed::new()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.diagnostic.severity, crate::Severity::Warning))
            .count()
    }

    /// Proof of errors, if any were queued.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Sort diagnostics by position and return them, clearing the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.sort_by_key(|d| (d.line, d.column));
        self.error_count = 0;
        self.overflowed = false;
        self.diagnostics.drain(..).map(|d| d.diagnostic).collect()
    }

    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().map(|d| &d.diagnostic)
    }

    fn is_duplicate(&self, diag: &Diagnostic, line: u32, column: u32) -> bool {
        self.diagnostics.iter().any(|queued| {
            queued.line == line
                && queued.column == column
                && queued.diagnostic.code == diag.code
                && queued.diagnostic.message == diag.message
        })
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting after {limit} errors"))
        .with_label(span, "error limit reached here")
        .with_note("use --error-limit to increase the limit")
}
