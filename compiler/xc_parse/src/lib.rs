//! Recursive descent parser for the Swift declaration subset.
//!
//! Produces a [`SourceFile`] of declarations. Function bodies, accessor
//! blocks, default values and initializers are not parsed: their source text
//! is kept verbatim (interned) so the printer can reproduce it.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;

use xc_diagnostic::Diagnostic;
use xc_ir::{Name, SourceFile, Span, StringInterner, TokenKind, TokenList, TypeExpr};

/// Result of parsing one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub file: SourceFile,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .cloned()
            .map(ParseError::into_diagnostic)
            .collect()
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    interner: &'a StringInterner,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// `source` must be the text `tokens` were lexed from.
    pub fn new(tokens: &'a TokenList, source: &'a str, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
            interner,
            errors: Vec::new(),
        }
    }

    /// Parse declarations until end of file.
    pub fn parse_file(mut self) -> ParseOutput {
        let decls = self.parse_decl_list(false);
        tracing::debug!(decls = decls.len(), errors = self.errors.len(), "parsed file");
        ParseOutput {
            file: SourceFile { decls },
            errors: self.errors,
        }
    }

    fn intern(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Source text of `span`, interned.
    fn intern_span(&self, span: Span) -> Name {
        self.intern(span.slice(self.source))
    }

    /// Whether a line break separates the previous token from the current one.
    fn at_line_start(&self) -> bool {
        let prev = self.cursor.previous_span();
        let cur = self.cursor.current_span();
        if prev.is_dummy() {
            return true;
        }
        self.source
            .get(prev.end as usize..cur.start as usize)
            .is_some_and(|gap| gap.contains('\n'))
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Span, ParseError> {
        if self.cursor.check(kind) {
            Ok(self.cursor.advance().span)
        } else {
            let token = self.cursor.current();
            Err(ParseError::unexpected(what, token.kind, token.span))
        }
    }

    /// Identifier in a declaration-name position. Contextual keywords are
    /// accepted as plain names.
    fn ident(&mut self) -> Result<(Name, Span), ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok((name, token.span))
            }
            kind if kind.is_contextual_keyword() => {
                self.cursor.advance();
                let text = kind.keyword_text().unwrap_or_default();
                Ok((self.intern(text), token.span))
            }
            kind => Err(ParseError::expected_identifier(kind, token.span)),
        }
    }

    /// Argument labels and member names may be any keyword.
    fn label(&mut self) -> Option<(Name, Span)> {
        let token = self.cursor.current();
        let name = match token.kind {
            TokenKind::Ident(name) => name,
            kind => self.intern(kind.keyword_text()?),
        };
        self.cursor.advance();
        Some((name, token.span))
    }

    fn is_label(&self, kind: TokenKind) -> bool {
        matches!(kind, TokenKind::Ident(_)) || kind.keyword_text().is_some()
    }
}

/// Parse a token list lexed from `source`.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, source: &str, interner: &StringInterner) -> ParseOutput {
    Parser::new(tokens, source, interner).parse_file()
}

/// Lex and parse `source`, returning the file and every lexer and parser
/// diagnostic in source order.
pub fn parse_source(source: &str, interner: &StringInterner) -> (SourceFile, Vec<Diagnostic>) {
    let lexed = xc_lexer::lex(source, interner);
    let mut diagnostics = lexed.diagnostics();
    let parsed = parse(&lexed.tokens, source, interner);
    diagnostics.extend(parsed.diagnostics());
    (parsed.file, diagnostics)
}

/// Parse a standalone type such as `[String: Int]?`.
pub fn parse_type(text: &str, interner: &StringInterner) -> Result<TypeExpr, ParseError> {
    let lexed = xc_lexer::lex(text, interner);
    let mut parser = Parser::new(&lexed.tokens, text, interner);
    let ty = parser.parse_type()?;
    if parser.cursor.is_at_end() {
        Ok(ty)
    } else {
        let token = parser.cursor.current();
        Err(ParseError::unexpected("end of type", token.kind, token.span))
    }
}

#[cfg(test)]
mod tests;
