#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use xc_ir::{
    Decl, DeclKind, Expr, FuncDecl, FunctionBody, Modifier, Name, NominalDecl, Span, Stmt,
    StringInterner, TypeExpr, VarDecl,
};

use super::{format_decl, format_file};

fn reprint(source: &str) -> String {
    let interner = StringInterner::new();
    let (file, diagnostics) = xc_parse::parse_source(source, &interner);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    format_file(&file, &interner)
}

#[test]
fn canonical_protocol_is_stable() {
    let source = "\
@TypeErased
public protocol Fetcher<Value>: AnyObject, Sendable {
    associatedtype Value
    associatedtype ErrorType: Error

    var name: String { get }

    func fetch() async throws(ErrorType) -> Value
    mutating func update(_ value: inout [String], at index: Int = 0)
    static func == (lhs: Self, rhs: Self) -> Bool
}
";
    assert_eq!(reprint(source), source);
}

#[test]
fn layout_is_normalized() {
    let source = "struct   Box<T:Equatable&Hashable>:Codable where T:Sendable{let a:Int\nlet b:Int\nfunc f()->Int{ 1 }\ninit(){}}";
    let expected = "\
struct Box<T: Equatable & Hashable>: Codable where T: Sendable {
    let a: Int
    let b: Int

    func f() -> Int { 1 }

    init() {}
}
";
    assert_eq!(reprint(source), expected);
}

#[test]
fn nested_types_indent() {
    let source = "enum Outer { case a, b(Int), c = 3\nstruct Inner { var x = 1 } }";
    let expected = "\
enum Outer {
    case a, b(Int), c = 3

    struct Inner {
        var x = 1
    }
}
";
    assert_eq!(reprint(source), expected);
}

#[test]
fn imports_group_and_attributes_inline_on_members() {
    let source = "import Foundation\nimport os.log\nclass C {\n@discardableResult public func run() -> Int { 0 }\nprivate(set) var count = 0\n}";
    let expected = "\
import Foundation
import os.log

class C {
    @discardableResult public func run() -> Int { 0 }

    private(set) var count = 0
}
";
    assert_eq!(reprint(source), expected);
}

#[test]
fn reserved_names_are_escaped() {
    let source = "protocol P { func `default`(`in` value: Int) }";
    let expected = "protocol P {\n    func `default`(`in` value: Int)\n}\n";
    assert_eq!(reprint(source), expected);
}

#[test]
fn synthesized_block_bodies() {
    let interner = StringInterner::new();
    let name = |s: &str| -> Name { interner.intern(s) };
    let stored = Decl::new(DeclKind::Var(VarDecl {
        is_let: true,
        name: name("_print"),
        name_span: Span::DUMMY,
        ty: Some(TypeExpr::named(name("Void"))),
        initializer: None,
        accessors: None,
    }))
    .with_modifier(Modifier::Private);
    let method = Decl::new(DeclKind::Func(FuncDecl {
        name: name("print"),
        name_span: Span::DUMMY,
        generics: Vec::new(),
        params: Vec::new(),
        effects: xc_ir::Effects::NONE,
        ret: None,
        where_clause: Vec::new(),
        body: Some(FunctionBody::Block(vec![Stmt::Expr(Expr::call(
            Expr::Ident(name("_print")),
            Vec::new(),
        ))])),
    }));
    let wrapper = Decl::new(DeclKind::Struct(NominalDecl {
        name: name("AnyPrinter"),
        name_span: Span::DUMMY,
        generics: Vec::new(),
        inherited: vec![TypeExpr::named(name("Printer"))],
        where_clause: Vec::new(),
        members: vec![stored, method],
    }));

    assert_eq!(
        format_decl(&wrapper, &interner),
        "\
struct AnyPrinter: Printer {
    private let _print: Void

    func print() {
        _print()
    }
}"
    );
}

#[test]
fn empty_file_prints_nothing() {
    assert_eq!(reprint(""), "");
}
