//! Error codes for all expander diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E2002`) with the first digit
//! indicating the phase. Used for `xcc explain` lookups and documentation.

use std::fmt;

/// Error codes for all expander diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Type-erasure expansion errors
/// - E3xxx: Expansion host errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Unterminated block comment
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected declaration
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type
    E1005,

    // Expansion Errors (E2xxx)
    /// `@TypeErased` attached to something other than a protocol
    E2001,
    /// Protocol declares a static or class method
    E2002,
    /// Protocol declares overloaded methods
    E2003,
    /// Protocol declares a generic method
    E2004,
    /// Protocol method has a variadic parameter
    E2005,
    /// Protocol declares a mutating method
    E2006,

    // Host Errors (E3xxx)
    /// Peer macro attached in an unsupported position
    E3001,
    /// Macro given arguments it does not accept
    E3002,

    // Internal Errors (E9xxx)
    /// Internal expander error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        // Expansion
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        // Host
        ErrorCode::E3001,
        ErrorCode::E3002,
        // Internal
        ErrorCode::E9001,
        ErrorCode::E9002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Parse `"E2002"` (case-insensitive) back into a code.
    pub fn parse(text: &str) -> Option<ErrorCode> {
        let upper = text.trim().to_ascii_uppercase();
        Self::ALL.iter().copied().find(|code| code.as_str() == upper)
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_expansion_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_host_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    pub fn is_internal_error(&self) -> bool {
        self.as_str().starts_with("E9")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
