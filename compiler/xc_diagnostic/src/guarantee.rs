//! Type-level proof that an error was reported.

use std::fmt;

use crate::{Diagnostic, Severity};

/// Proof that at least one error diagnostic was emitted.
///
/// Expansion stages return `Result<T, ErrorGuaranteed>`; the only ways to
/// build the `Err` side are through an emitting call, so a stage cannot
/// fail without having told the user why.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    #[inline]
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Proof for a count of errors that has already been emitted elsewhere.
    pub fn from_error_count(count: usize) -> Option<Self> {
        (count > 0).then(Self::new)
    }

    /// Push `diag` into `sink` as an error and return the proof.
    pub fn emit(mut diag: Diagnostic, sink: &mut Vec<Diagnostic>) -> Self {
        diag.severity = Severity::Error;
        sink.push(diag);
        Self::new()
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) emitted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn from_error_count_requires_errors() {
        assert!(ErrorGuaranteed::from_error_count(1).is_some());
        assert!(ErrorGuaranteed::from_error_count(0).is_none());
    }

    #[test]
    fn emit_forces_error_severity() {
        let mut sink = Vec::new();
        let _ = ErrorGuaranteed::emit(
            Diagnostic::warning(ErrorCode::E2002).with_message("m"),
            &mut sink,
        );
        assert_eq!(sink.len(), 1);
        assert!(sink[0].is_error());
    }

    #[test]
    fn display_shows_error_message() {
        let mut sink = Vec::new();
        let g = ErrorGuaranteed::emit(Diagnostic::error(ErrorCode::E9001), &mut sink);
        assert_eq!(g.to_string(), "error(s) emitted");
    }
}
