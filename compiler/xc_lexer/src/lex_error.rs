//! Lexer errors.

use xc_diagnostic::{Diagnostic, ErrorCode};
use xc_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// No token starts with this character.
    InvalidCharacter(char),
    /// Missing closing `"` (or `"""`).
    UnterminatedString,
    /// `/*` without a matching `*/`.
    UnterminatedBlockComment,
    /// The file does not fit 32-bit spans.
    FileTooLarge,
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self.kind {
            LexErrorKind::InvalidCharacter(c) => Diagnostic::error(ErrorCode::E0001)
                .with_message(format!("invalid character `{}`", c.escape_debug()))
                .with_label(self.span, "not valid here"),
            LexErrorKind::UnterminatedString => Diagnostic::error(ErrorCode::E0002)
                .with_message("unterminated string literal")
                .with_label(self.span, "string starts here")
                .with_suggestion("add a closing `\"`"),
            LexErrorKind::UnterminatedBlockComment => Diagnostic::error(ErrorCode::E0003)
                .with_message("unterminated block comment")
                .with_label(self.span, "comment starts here")
                .with_suggestion("add a closing `*/`"),
            LexErrorKind::FileTooLarge => Diagnostic::error(ErrorCode::E9001)
                .with_message("source file exceeds 4 GiB")
                .with_label(Span::DUMMY, "lexing stopped here"),
        }
    }
}
