//! Error recovery and token skipping.
//!
//! After a failed declaration the parser skips ahead to the next token that
//! can start a declaration. Bodies and other regions the expander never
//! inspects are skipped by delimiter matching.

use xc_ir::{Modifier, Span, TokenKind};

use crate::{ParseError, Parser};

/// Tokens that can begin a declaration.
pub(crate) fn is_decl_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::At
            | TokenKind::Protocol
            | TokenKind::Struct
            | TokenKind::Class
            | TokenKind::Enum
            | TokenKind::Actor
            | TokenKind::Extension
            | TokenKind::Func
            | TokenKind::Var
            | TokenKind::Let
            | TokenKind::Init
            | TokenKind::Subscript
            | TokenKind::AssociatedType
            | TokenKind::TypeAlias
            | TokenKind::Import
            | TokenKind::Case
            | TokenKind::Static
            | TokenKind::Mutating
            | TokenKind::Nonmutating
            | TokenKind::Public
            | TokenKind::Private
            | TokenKind::Fileprivate
            | TokenKind::Internal
            | TokenKind::Package
            | TokenKind::Open
            | TokenKind::Final
            | TokenKind::Override
    )
}

impl Parser<'_> {
    /// Whether the current token starts a declaration, including contextual
    /// modifiers such as `nonisolated`.
    pub(crate) fn at_decl_start(&self) -> bool {
        let kind = self.cursor.current_kind();
        if is_decl_start(kind) {
            return true;
        }
        match kind {
            TokenKind::Ident(name) => {
                Modifier::from_contextual(self.interner.lookup(name)).is_some()
                    && (is_decl_start(self.cursor.peek_kind())
                        || matches!(self.cursor.peek_kind(), TokenKind::Ident(_)))
            }
            _ => false,
        }
    }

    /// Skip to the next declaration start, a closing brace, or end of file.
    /// Always consumes at least one token unless already at the end.
    pub(crate) fn synchronize(&mut self) {
        let start = self.cursor.position();
        while !self.cursor.is_at_end() {
            let kind = self.cursor.current_kind();
            let moved = self.cursor.position() != start;
            if moved && (self.at_decl_start() || kind == TokenKind::RBrace) {
                return;
            }
            match kind {
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => {
                    if self.skip_balanced().is_err() {
                        return;
                    }
                }
                TokenKind::RBrace if !moved => return,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Skip a delimited region starting at the current opening delimiter,
    /// returning its full span including both delimiters.
    pub(crate) fn skip_balanced(&mut self) -> Result<Span, ParseError> {
        let open = self.cursor.advance();
        let mut stack = vec![(open.kind, open.span)];
        while let Some(&(top, top_span)) = stack.last() {
            let token = self.cursor.current();
            match token.kind {
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => {
                    stack.push((token.kind, token.span));
                }
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    if closes(top, token.kind) {
                        stack.pop();
                    } else {
                        return Err(ParseError::unclosed(top_span, token.span, opening_char(top)));
                    }
                }
                TokenKind::Eof => {
                    return Err(ParseError::unclosed(top_span, token.span, opening_char(top)));
                }
                _ => {}
            }
            self.cursor.advance();
        }
        Ok(open.span.merge(self.cursor.previous_span()))
    }

    /// Skip a compiler directive (`#if DEBUG`, `#endif`, `#warning("...")`)
    /// through the end of its line.
    pub(crate) fn skip_directive(&mut self) {
        self.cursor.advance();
        while !self.cursor.is_at_end() && !self.at_line_start() {
            if matches!(self.cursor.current_kind(), TokenKind::LParen) {
                if self.skip_balanced().is_err() {
                    return;
                }
            } else {
                self.cursor.advance();
            }
        }
    }

    /// Skip an expression (default value, initializer) up to a `,` or `)` at
    /// nesting depth zero, a new declaration line, or a closing brace.
    /// Returns the skipped span, or `None` when nothing was skipped.
    pub(crate) fn skip_expression(&mut self, stop_at_comma: bool) -> Result<Option<Span>, ParseError> {
        let start = self.cursor.current_span();
        let begin = self.cursor.position();
        loop {
            let kind = self.cursor.current_kind();
            let at_new_decl = self.cursor.position() != begin && self.at_line_start() && self.at_decl_start();
            match kind {
                TokenKind::Eof | TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket
                | TokenKind::Semicolon => break,
                TokenKind::Comma if stop_at_comma => break,
                _ if at_new_decl => break,
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => {
                    self.skip_balanced()?;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
        if self.cursor.position() == begin {
            Ok(None)
        } else {
            Ok(Some(start.merge(self.cursor.previous_span())))
        }
    }
}

fn closes(open: TokenKind, close: TokenKind) -> bool {
    matches!(
        (open, close),
        (TokenKind::LBrace, TokenKind::RBrace)
            | (TokenKind::LParen, TokenKind::RParen)
            | (TokenKind::LBracket, TokenKind::RBracket)
    )
}

fn opening_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::LParen => '(',
        TokenKind::LBracket => '[',
        _ => '{',
    }
}
