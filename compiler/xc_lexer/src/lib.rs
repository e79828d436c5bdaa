//! Lexer for the Swift declaration subset using logos with string interning.
//!
//! Whitespace, newlines and comments are trivia and never reach the parser.
//! Problems are reported as diagnostics alongside the token list; the lexer
//! itself never fails.

mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use logos::Logos;
use xc_diagnostic::Diagnostic;
use xc_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// How a block comment or multi-line string ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closing {
    Closed,
    Unterminated,
}

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(Closing),

    // Declaration keywords
    #[token("protocol")]
    Protocol,
    #[token("struct")]
    Struct,
    #[token("class")]
    Class,
    #[token("enum")]
    Enum,
    #[token("actor")]
    Actor,
    #[token("extension")]
    Extension,
    #[token("func")]
    Func,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("init")]
    Init,
    #[token("subscript")]
    Subscript,
    #[token("associatedtype")]
    AssociatedType,
    #[token("typealias")]
    TypeAlias,
    #[token("import")]
    Import,
    #[token("case")]
    Case,

    // Modifiers
    #[token("static")]
    Static,
    #[token("mutating")]
    Mutating,
    #[token("nonmutating")]
    Nonmutating,
    #[token("public")]
    Public,
    #[token("private")]
    Private,
    #[token("fileprivate")]
    Fileprivate,
    #[token("internal")]
    Internal,
    #[token("package")]
    Package,
    #[token("open")]
    Open,
    #[token("final")]
    Final,
    #[token("override")]
    Override,

    // Effects and type keywords
    #[token("async")]
    Async,
    #[token("throws")]
    Throws,
    #[token("rethrows")]
    Rethrows,
    #[token("where")]
    Where,
    #[token("inout")]
    Inout,
    #[token("some")]
    Some,
    #[token("any")]
    Any,

    // Punctuation
    #[token("@")]
    At,
    #[token("#")]
    Hash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    Arrow,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("&")]
    Amp,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token(";")]
    Semicolon,

    // `/` and `*` stay single characters so they never swallow a `/*`.
    #[regex(r"[-+%|^~\\]+")]
    #[token("/")]
    #[token("*")]
    Operator,

    // Literals
    #[regex(r"[0-9][0-9_]*", |lex| parse_int(lex.slice(), 10))]
    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*", |lex| parse_int(&lex.slice()[2..], 16))]
    #[regex(r"0o[0-7][0-7_]*", |lex| parse_int(&lex.slice()[2..], 8))]
    #[regex(r"0b[01][01_]*", |lex| parse_int(&lex.slice()[2..], 2))]
    Int(u64),

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| parse_float(lex.slice()))]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+", |lex| parse_float(lex.slice()))]
    Float(f64),

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    #[token(r#"""""#, multiline_string)]
    MultilineString(Closing),

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    #[regex(r"\$[a-zA-Z0-9_]+")]
    Ident,

    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_]*`")]
    BacktickIdent,
}

/// Skip a (nesting) block comment body after the opening `/*`.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> Closing {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return Closing::Closed;
                }
            }
            _ => i += 1,
        }
    }
    lex.bump(bytes.len());
    Closing::Unterminated
}

/// Consume a `"""` literal up to and including its closing delimiter.
fn multiline_string(lex: &mut logos::Lexer<RawToken>) -> Closing {
    let rest = lex.remainder();
    match rest.find(r#"""""#) {
        Some(end) => {
            lex.bump(end + 3);
            Closing::Closed
        }
        None => {
            lex.bump(rest.len());
            Closing::Unterminated
        }
    }
}

/// Digits with `_` separators; values past `u64::MAX` saturate.
fn parse_int(digits: &str, radix: u32) -> u64 {
    let mut value: u64 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let Some(digit) = c.to_digit(radix) else {
            continue;
        };
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }
    value
}

fn parse_float(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Result of lexing one file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Convert the collected errors into diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .cloned()
            .map(LexError::into_diagnostic)
            .collect()
    }
}

/// Lex source code into a `TokenList` terminated by `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 4),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let Ok(span) = Span::try_from_range(logos.span()) else {
            output
                .errors
                .push(LexError::new(Span::DUMMY, LexErrorKind::FileTooLarge));
            return output;
        };
        let slice = logos.slice();

        let kind = match token_result {
            Ok(RawToken::BlockComment(closing)) => {
                if closing == Closing::Unterminated {
                    let opener = Span::new(span.start, span.start + 2);
                    output
                        .errors
                        .push(LexError::new(opener, LexErrorKind::UnterminatedBlockComment));
                }
                continue;
            }
            Ok(RawToken::UnterminatedString) => {
                output
                    .errors
                    .push(LexError::new(span, LexErrorKind::UnterminatedString));
                TokenKind::Error
            }
            Ok(RawToken::MultilineString(Closing::Unterminated)) => {
                let opener = Span::new(span.start, span.start + 3);
                output
                    .errors
                    .push(LexError::new(opener, LexErrorKind::UnterminatedString));
                TokenKind::Error
            }
            Ok(raw) => convert_token(raw, slice, interner),
            Err(()) => {
                let c = slice.chars().next().unwrap_or('\u{fffd}');
                output
                    .errors
                    .push(LexError::new(span, LexErrorKind::InvalidCharacter(c)));
                continue;
            }
        };
        output.tokens.push(Token::new(kind, span));
    }

    match u32::try_from(source.len()) {
        Ok(eof) => output.tokens.push(Token::new(TokenKind::Eof, Span::point(eof))),
        Err(_) => output
            .errors
            .push(LexError::new(Span::DUMMY, LexErrorKind::FileTooLarge)),
    }
    output
}

/// Convert a raw token to a `TokenKind`, interning text.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f.to_bits()),
        RawToken::String => {
            let content = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            TokenKind::String(interner.intern(content))
        }
        RawToken::MultilineString(_) => {
            let content = slice
                .strip_prefix(r#"""""#)
                .and_then(|s| s.strip_suffix(r#"""""#))
                .unwrap_or(slice);
            TokenKind::String(interner.intern(content))
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::BacktickIdent => TokenKind::Ident(interner.intern(slice.trim_matches('`'))),

        RawToken::Protocol => TokenKind::Protocol,
        RawToken::Struct => TokenKind::Struct,
        RawToken::Class => TokenKind::Class,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Actor => TokenKind::Actor,
        RawToken::Extension => TokenKind::Extension,
        RawToken::Func => TokenKind::Func,
        RawToken::Var => TokenKind::Var,
        RawToken::Let => TokenKind::Let,
        RawToken::Init => TokenKind::Init,
        RawToken::Subscript => TokenKind::Subscript,
        RawToken::AssociatedType => TokenKind::AssociatedType,
        RawToken::TypeAlias => TokenKind::TypeAlias,
        RawToken::Import => TokenKind::Import,
        RawToken::Case => TokenKind::Case,

        RawToken::Static => TokenKind::Static,
        RawToken::Mutating => TokenKind::Mutating,
        RawToken::Nonmutating => TokenKind::Nonmutating,
        RawToken::Public => TokenKind::Public,
        RawToken::Private => TokenKind::Private,
        RawToken::Fileprivate => TokenKind::Fileprivate,
        RawToken::Internal => TokenKind::Internal,
        RawToken::Package => TokenKind::Package,
        RawToken::Open => TokenKind::Open,
        RawToken::Final => TokenKind::Final,
        RawToken::Override => TokenKind::Override,

        RawToken::Async => TokenKind::Async,
        RawToken::Throws => TokenKind::Throws,
        RawToken::Rethrows => TokenKind::Rethrows,
        RawToken::Where => TokenKind::Where,
        RawToken::Inout => TokenKind::Inout,
        RawToken::Some => TokenKind::Some,
        RawToken::Any => TokenKind::Any,

        RawToken::At => TokenKind::At,
        RawToken::Hash => TokenKind::Hash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Question => TokenKind::Question,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Operator => TokenKind::Operator,

        // Trivia and error-carrying tokens are handled in `lex`.
        RawToken::LineComment | RawToken::BlockComment(_) | RawToken::UnterminatedString => {
            TokenKind::Error
        }
    }
}

#[cfg(test)]
mod tests;
