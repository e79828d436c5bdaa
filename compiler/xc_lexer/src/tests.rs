use super::*;
use pretty_assertions::assert_eq;
use xc_diagnostic::ErrorCode;
use xc_ir::StringLookup;

fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    assert!(!output.has_errors(), "unexpected errors: {:?}", output.errors);
    let kinds = output.tokens.iter().map(|t| t.kind).collect();
    (kinds, interner)
}

#[test]
fn test_protocol_header() {
    let (tokens, interner) = kinds("@TypeErased protocol Printer: AnyObject {}");
    let printer = interner.intern("Printer");
    let type_erased = interner.intern("TypeErased");
    let any_object = interner.intern("AnyObject");
    assert_eq!(
        tokens,
        vec![
            TokenKind::At,
            TokenKind::Ident(type_erased),
            TokenKind::Protocol,
            TokenKind::Ident(printer),
            TokenKind::Colon,
            TokenKind::Ident(any_object),
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_function_signature_tokens() {
    let (tokens, _) = kinds("func fetch() async throws(E) -> [String: Int]?");
    assert_eq!(
        tokens[..],
        [
            TokenKind::Func,
            tokens[1],
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Async,
            TokenKind::Throws,
            TokenKind::LParen,
            tokens[7],
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::LBracket,
            tokens[11],
            TokenKind::Colon,
            tokens[13],
            TokenKind::RBracket,
            TokenKind::Question,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_and_newlines_are_trivia() {
    let (tokens, _) = kinds("// leading\nprotocol /* a /* nested */ comment */ P\n{\n}\n");
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0], TokenKind::Protocol);
    assert_eq!(tokens[2], TokenKind::LBrace);
}

#[test]
fn test_spans_point_into_source() {
    let source = "  func  run()";
    let interner = StringInterner::new();
    let output = lex(source, &interner);
    let tokens = output.tokens.as_slice();
    assert_eq!(tokens[0].span, Span::new(2, 6));
    assert_eq!(tokens[1].span.slice(source), "run");
    assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(13)));
}

#[test]
fn test_backticked_identifier_strips_backticks() {
    let (tokens, interner) = kinds("func `default`()");
    match tokens[1] {
        TokenKind::Ident(name) => assert_eq!(interner.lookup(name), "default"),
        other => panic!("expected identifier, got {other:?}"),
    }
}

#[test]
fn test_keywords_versus_identifiers() {
    let (tokens, interner) = kinds("protocols staticValue async");
    assert!(matches!(tokens[0], TokenKind::Ident(n) if interner.lookup(n) == "protocols"));
    assert!(matches!(tokens[1], TokenKind::Ident(n) if interner.lookup(n) == "staticValue"));
    assert_eq!(tokens[2], TokenKind::Async);
}

#[test]
fn test_numeric_literals() {
    let (tokens, _) = kinds("42 1_000 0xFF 0b101 0o17 3.5 1e3");
    assert_eq!(tokens[0], TokenKind::Int(42));
    assert_eq!(tokens[1], TokenKind::Int(1000));
    assert_eq!(tokens[2], TokenKind::Int(255));
    assert_eq!(tokens[3], TokenKind::Int(5));
    assert_eq!(tokens[4], TokenKind::Int(15));
    assert_eq!(tokens[5], TokenKind::Float(3.5f64.to_bits()));
    assert_eq!(tokens[6], TokenKind::Float(1000.0f64.to_bits()));
}

#[test]
fn test_integer_overflow_saturates() {
    let (tokens, _) = kinds("99999999999999999999999");
    assert_eq!(tokens[0], TokenKind::Int(u64::MAX));
}

#[test]
fn test_string_literals_keep_escapes() {
    let (tokens, interner) = kinds(r#"let s = "a\"b""#);
    match tokens[3] {
        TokenKind::String(name) => assert_eq!(interner.lookup(name), r#"a\"b"#),
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn test_multiline_string() {
    let (tokens, interner) = kinds("let s = \"\"\"\nline \"quoted\"\n\"\"\"");
    match tokens[3] {
        TokenKind::String(name) => assert_eq!(interner.lookup(name), "\nline \"quoted\"\n"),
        other => panic!("expected string, got {other:?}"),
    }
}

#[test]
fn test_punctuation_and_operators() {
    let (tokens, _) = kinds("... -> == = & ? ! ; # + / * %=");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Ellipsis,
            TokenKind::Arrow,
            TokenKind::EqEq,
            TokenKind::Eq,
            TokenKind::Amp,
            TokenKind::Question,
            TokenKind::Bang,
            TokenKind::Semicolon,
            TokenKind::Hash,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Operator,
            TokenKind::Eq,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_nested_generic_closers_stay_separate() {
    let (tokens, _) = kinds("Array<Array<Int>>");
    let gts = tokens.iter().filter(|k| **k == TokenKind::Gt).count();
    assert_eq!(gts, 2);
}

#[test]
fn test_invalid_character_reported_and_skipped() {
    let interner = StringInterner::new();
    let output = lex("func f() ' {}", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::InvalidCharacter('\''));
    assert!(!output.tokens.iter().any(|t| t.kind == TokenKind::Error));

    let diags = output.diagnostics();
    assert_eq!(diags[0].code, ErrorCode::E0001);
    assert_eq!(diags[0].primary_span(), Some(output.errors[0].span));
}

#[test]
fn test_unterminated_string() {
    let interner = StringInterner::new();
    let output = lex("let s = \"abc\nfunc f()", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].span, Span::new(8, 12));
    assert_eq!(output.diagnostics()[0].code, ErrorCode::E0002);
    assert!(output.tokens.iter().any(|t| t.kind == TokenKind::Func));
}

#[test]
fn test_unterminated_block_comment() {
    let interner = StringInterner::new();
    let output = lex("protocol P {} /* /* */", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedBlockComment);
    assert_eq!(output.errors[0].span, Span::new(14, 16));
    assert_eq!(output.diagnostics()[0].code, ErrorCode::E0003);
    assert_eq!(output.tokens.len(), 5);
}

#[test]
fn test_empty_source_is_just_eof() {
    let (tokens, _) = kinds("");
    assert_eq!(tokens, vec![TokenKind::Eof]);
}
