#![allow(clippy::unwrap_used)]

use super::*;
use crate::context::BasicExpansionContext;
use pretty_assertions::assert_eq;
use xc_diagnostic::fixes::ChangeTracker;
use xc_diagnostic::{Diagnostic, ErrorCode};

struct Outcome {
    result: Result<AnalyzedInterface, ErrorGuaranteed>,
    diagnostics: Vec<Diagnostic>,
}

fn run(source: &str, interner: &StringInterner) -> Outcome {
    let (file, parse_errors) = xc_parse::parse_source(source, interner);
    assert!(parse_errors.is_empty(), "{parse_errors:?}");
    let mut ctx = BasicExpansionContext::new(interner, source);
    let result = analyze(&file.decls[0], &mut ctx);
    Outcome {
        result,
        diagnostics: ctx.into_diagnostics(),
    }
}

fn codes(outcome: &Outcome) -> Vec<ErrorCode> {
    outcome.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn collects_methods_and_associated_types_in_order() {
    let interner = StringInterner::new();
    let source = "\
public protocol Store<Item>: Sendable {
    associatedtype Item: Codable
    var count: Int { get }
    func load() async throws -> [Item]
    init(path: String)
    associatedtype Key
    subscript(key: Key) -> Item? { get }
    @discardableResult
    func save(_ item: Item) -> Bool
}
";
    let outcome = run(source, &interner);
    let analyzed = outcome.result.unwrap();
    assert!(outcome.diagnostics.is_empty());

    assert_eq!(interner.lookup(analyzed.name), "Store");
    let methods: Vec<&str> = analyzed
        .methods
        .iter()
        .map(|m| interner.lookup(m.func.name))
        .collect();
    assert_eq!(methods, vec!["load", "save"]);
    assert_eq!(analyzed.methods[1].attributes.len(), 1);

    let associated: Vec<&str> = analyzed
        .associated_types
        .iter()
        .map(|a| interner.lookup(a.name))
        .collect();
    assert_eq!(associated, vec!["Item", "Key"]);
    assert_eq!(analyzed.access, Some(AccessLevel::Public));
    assert!(!analyzed.reference_semantics);
}

#[test]
fn reference_semantics_follow_the_inheritance_clause() {
    let interner = StringInterner::new();
    for (source, expected) in [
        ("protocol P: AnyObject { func f() }", true),
        ("protocol P: class, Sendable { func f() }", true),
        ("protocol P: Sendable { func f() }", false),
        ("protocol P { func f() }", false),
    ] {
        let analyzed = run(source, &interner).result.unwrap();
        assert_eq!(analyzed.reference_semantics, expected, "{source}");
    }
}

#[test]
fn non_protocols_are_rejected_without_fixes() {
    let interner = StringInterner::new();
    for source in [
        "struct Printer { func print() {} }",
        "enum Mode { case a }",
        "final class Cache {}",
        "func run() {}",
    ] {
        let outcome = run(source, &interner);
        assert!(outcome.result.is_err(), "{source}");
        assert_eq!(codes(&outcome), vec![ErrorCode::E2001], "{source}");
        assert!(!outcome.diagnostics[0].has_machine_applicable_fix());
    }
}

#[test]
fn not_interface_points_at_the_name() {
    let interner = StringInterner::new();
    let outcome = run("struct Printer {}", &interner);
    assert_eq!(outcome.diagnostics[0].primary_span(), Some(Span::new(7, 14)));
    assert_eq!(outcome.diagnostics[0].labels[0].message, "this is a struct");
}

#[test]
fn static_methods_yield_one_error_with_a_fix_each() {
    let interner = StringInterner::new();
    let source = "\
protocol Maker {
    static func make()
    func run()
    class func other()
}
";
    let outcome = run(source, &interner);
    assert!(outcome.result.is_err());
    assert_eq!(codes(&outcome), vec![ErrorCode::E2002]);

    let diag = &outcome.diagnostics[0];
    assert_eq!(diag.primary_span(), Some(Span::new(21, 27)));
    assert_eq!(diag.structured_suggestions.len(), 2);
    assert_eq!(diag.structured_suggestions[0].message, "remove 'static'");
    assert_eq!(diag.structured_suggestions[1].message, "remove 'class'");

    let fixed = ChangeTracker::from_fixes(&outcome.diagnostics).apply(source);
    assert_eq!(
        fixed,
        "protocol Maker {\n    func make()\n    func run()\n    func other()\n}\n"
    );
}

#[test]
fn static_check_runs_before_the_others() {
    let interner = StringInterner::new();
    let source = "\
protocol Messy {
    func load(id: Int)
    func load(name: String)
    func map<T>(_ value: T) -> T
    static func make()
}
";
    let outcome = run(source, &interner);
    assert_eq!(codes(&outcome), vec![ErrorCode::E2002]);
}

#[test]
fn overloads_are_rejected_at_the_second_declaration() {
    let interner = StringInterner::new();
    let source = "\
protocol Loader {
    func load(id: Int)
    func load(name: String)
}
";
    let outcome = run(source, &interner);
    assert_eq!(codes(&outcome), vec![ErrorCode::E2003]);
    let diag = &outcome.diagnostics[0];
    assert_eq!(diag.primary_span(), Some(Span::new(50, 54)));
    assert_eq!(diag.labels[1].span, Span::new(27, 31));
    assert!(!diag.labels[1].is_primary);
}

#[test]
fn generic_methods_are_rejected() {
    let interner = StringInterner::new();
    let source = "\
protocol Converter {
    func convert<T: Decodable>(_ data: Data) -> T
    func describe(_ value: some CustomStringConvertible) -> String
    func plain() -> Int
}
";
    let outcome = run(source, &interner);
    assert_eq!(codes(&outcome), vec![ErrorCode::E2004, ErrorCode::E2004]);
    assert!(outcome.diagnostics[0].message.contains("`convert`"));
    assert!(outcome.diagnostics[1].message.contains("`describe`"));
}

#[test]
fn variadic_parameters_are_rejected() {
    let interner = StringInterner::new();
    let outcome = run("protocol Logger { func log(_ items: Any...) }", &interner);
    assert_eq!(codes(&outcome), vec![ErrorCode::E2005]);
    assert_eq!(
        outcome.diagnostics[0].message,
        "variadic parameter `items` of `log` cannot be forwarded"
    );
}

#[test]
fn mutating_methods_are_rejected() {
    let interner = StringInterner::new();
    let outcome = run(
        "protocol Counter { mutating func increment(); func value() -> Int }",
        &interner,
    );
    assert!(outcome.result.is_err());
    assert_eq!(codes(&outcome), vec![ErrorCode::E2006]);
    let diag = &outcome.diagnostics[0];
    assert_eq!(diag.message, "mutating method `increment` cannot be type-erased");
    assert_eq!(diag.primary_span(), Some(Span::new(19, 27)));
}

#[test]
fn variadic_is_reported_before_mutating() {
    let interner = StringInterner::new();
    let outcome = run(
        "protocol Sink { mutating func push(_ items: Int...) }",
        &interner,
    );
    assert_eq!(codes(&outcome), vec![ErrorCode::E2005]);
}

#[test]
fn empty_protocols_pass() {
    let interner = StringInterner::new();
    let analyzed = run("protocol Marker {}", &interner).result.unwrap();
    assert!(analyzed.methods.is_empty());
    assert!(analyzed.associated_types.is_empty());
}
