//! Tokens produced by the lexer.

use super::{Name, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for the declaration subset of Swift the expander reads.
///
/// Float literals store bits as `u64` so the enum stays `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Int(u64),
    Float(u64),
    /// String literal contents (interned, escapes left as written).
    String(Name),
    /// Identifier, including back-ticked ones (backticks stripped).
    Ident(Name),

    // Declaration keywords
    Protocol,
    Struct,
    Class,
    Enum,
    Actor,
    Extension,
    Func,
    Var,
    Let,
    Init,
    Subscript,
    AssociatedType,
    TypeAlias,
    Import,
    Case,

    // Modifiers
    Static,
    Mutating,
    Nonmutating,
    Public,
    Private,
    Fileprivate,
    Internal,
    Package,
    Open,
    Final,
    Override,

    // Effects and type keywords
    Async,
    Throws,
    Rethrows,
    Where,
    Inout,
    Some,
    Any,

    // Punctuation
    At,
    Hash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Colon,
    Comma,
    Dot,
    Ellipsis,
    Arrow,
    Eq,
    EqEq,
    Amp,
    Question,
    Bang,
    Semicolon,
    /// Any other operator run (`+`, `||`, `%=` ...); only seen in skipped bodies.
    Operator,

    /// Unrecognized input; a diagnostic has been recorded for it.
    Error,
    Eof,
}

impl TokenKind {
    /// Source text of a keyword token, `None` for everything else.
    ///
    /// Swift lets keywords serve as argument labels, so the parser falls back
    /// to this when it expects an identifier.
    pub fn keyword_text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Protocol => "protocol",
            TokenKind::Struct => "struct",
            TokenKind::Class => "class",
            TokenKind::Enum => "enum",
            TokenKind::Actor => "actor",
            TokenKind::Extension => "extension",
            TokenKind::Func => "func",
            TokenKind::Var => "var",
            TokenKind::Let => "let",
            TokenKind::Init => "init",
            TokenKind::Subscript => "subscript",
            TokenKind::AssociatedType => "associatedtype",
            TokenKind::TypeAlias => "typealias",
            TokenKind::Import => "import",
            TokenKind::Case => "case",
            TokenKind::Static => "static",
            TokenKind::Mutating => "mutating",
            TokenKind::Nonmutating => "nonmutating",
            TokenKind::Public => "public",
            TokenKind::Private => "private",
            TokenKind::Fileprivate => "fileprivate",
            TokenKind::Internal => "internal",
            TokenKind::Package => "package",
            TokenKind::Open => "open",
            TokenKind::Final => "final",
            TokenKind::Override => "override",
            TokenKind::Async => "async",
            TokenKind::Throws => "throws",
            TokenKind::Rethrows => "rethrows",
            TokenKind::Where => "where",
            TokenKind::Inout => "inout",
            TokenKind::Some => "some",
            TokenKind::Any => "any",
            _ => return None,
        };
        Some(text)
    }

    /// True for keywords Swift only reserves in certain positions; these are
    /// valid plain identifiers in parameter and member names.
    pub fn is_contextual_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Actor
                | TokenKind::Mutating
                | TokenKind::Nonmutating
                | TokenKind::Package
                | TokenKind::Open
                | TokenKind::Final
                | TokenKind::Override
                | TokenKind::Async
                | TokenKind::Some
                | TokenKind::Any
        )
    }

    /// Human-readable name used in "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        if let Some(text) = self.keyword_text() {
            return text;
        }
        match self {
            TokenKind::Int(_) => "integer literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::String(_) => "string literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::At => "@",
            TokenKind::Hash => "#",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Arrow => "->",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Amp => "&",
            TokenKind::Question => "?",
            TokenKind::Bang => "!",
            TokenKind::Semicolon => ";",
            TokenKind::Operator => "operator",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
            _ => "keyword",
        }
    }
}

/// Lexer output: every token in order, terminated by [`TokenKind::Eof`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 16);
    crate::static_assert_size!(Token, 24);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_text_round_trips_display_name() {
        assert_eq!(TokenKind::AssociatedType.keyword_text(), Some("associatedtype"));
        assert_eq!(TokenKind::Throws.display_name(), "throws");
        assert_eq!(TokenKind::Arrow.display_name(), "->");
        assert_eq!(TokenKind::Arrow.keyword_text(), None);
        assert_eq!(TokenKind::Ident(Name::EMPTY).display_name(), "identifier");
    }

    #[test]
    fn test_contextual_keywords() {
        assert!(TokenKind::Async.is_contextual_keyword());
        assert!(TokenKind::Open.is_contextual_keyword());
        assert!(!TokenKind::Func.is_contextual_keyword());
        assert!(!TokenKind::Static.is_contextual_keyword());
    }

    #[test]
    fn test_token_list_push_and_iter() {
        let mut list = TokenList::new();
        assert!(list.is_empty());
        list.push(Token::new(TokenKind::Protocol, Span::new(0, 8)));
        list.push(Token::new(TokenKind::Eof, Span::point(8)));
        assert_eq!(list.len(), 2);
        let kinds: Vec<TokenKind> = list.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Protocol, TokenKind::Eof]);
        assert_eq!(list.get(5), None);
    }
}
