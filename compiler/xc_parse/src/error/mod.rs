//! Parse error types.
//!
//! Errors carry their code, a primary span and optional related location
//! and hint; [`ParseError::into_diagnostic`] turns them into the shared
//! diagnostic type.

use xc_diagnostic::{Diagnostic, ErrorCode};
use xc_ir::{Span, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Secondary location, e.g. the opening delimiter.
    pub related: Option<(Span, String)>,
    pub hint: Option<String>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            related: None,
            hint: None,
        }
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// `expected X, found Y`.
    pub fn unexpected(expected: &str, found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.display_name()),
            span,
        )
    }

    pub fn expected_declaration(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("expected declaration, found {}", found.display_name()),
            span,
        )
    }

    pub fn unclosed(open: Span, at: Span, delimiter: char) -> Self {
        ParseError::new(
            ErrorCode::E1003,
            format!("unclosed delimiter `{delimiter}`"),
            at,
        )
        .with_related(open, "unclosed delimiter opened here")
    }

    pub fn expected_identifier(found: TokenKind, span: Span) -> Self {
        let error = ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found {}", found.display_name()),
            span,
        );
        match found.keyword_text() {
            Some(keyword) => error.with_hint(format!("wrap the name in backticks: `{keyword}`")),
            None => error,
        }
    }

    pub fn expected_type(found: TokenKind, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1005,
            format!("expected type, found {}", found.display_name()),
            span,
        )
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let label = match self.code {
            ErrorCode::E1003 => "expected closing delimiter here",
            ErrorCode::E1002 => "not a declaration",
            _ => "unexpected token",
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(self.message)
            .with_label(self.span, label);
        if let Some((span, message)) = self.related {
            diag = diag.with_secondary_label(span, message);
        }
        if let Some(hint) = self.hint {
            diag = diag.with_suggestion(hint);
        }
        diag
    }
}
