//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use std::mem::discriminant;

use xc_ir::{Span, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// The token list always ends with `Eof`, and the cursor never moves past
/// it, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to an earlier position.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len().max(1), "cursor position out of bounds");
        self.pos = pos;
    }

    /// Current token; an `Eof` token if the list was empty.
    #[inline]
    pub fn current(&self) -> Token {
        self.nth(0)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Token `n` positions ahead; clamps to the trailing `Eof`.
    pub fn nth(&self, n: usize) -> Token {
        let index = self.pos + n;
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY))
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.nth(1).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Compare kinds ignoring payloads.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        discriminant(&self.current_kind()) == discriminant(&kind)
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Ident(_))
    }

    /// No whitespace between the current and the next token.
    pub fn next_is_adjacent(&self) -> bool {
        self.current_span().end == self.nth(1).span.start
    }

    /// Advance to the next token and return the consumed one.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
