#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use xc_diagnostic::ErrorCode;
use xc_ir::{
    DeclKind, FunctionBody, Modifier, Requirement, Span, StringInterner, StringLookup, Throws,
    TypeExpr,
};

use crate::{parse_source, ParseOutput};

fn parse(source: &str, interner: &StringInterner) -> ParseOutput {
    let lexed = xc_lexer::lex(source, interner);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    crate::parse(&lexed.tokens, source, interner)
}

fn parse_ok(source: &str, interner: &StringInterner) -> Vec<xc_ir::Decl> {
    let output = parse(source, interner);
    assert!(!output.has_errors(), "parse errors: {:?}", output.errors);
    output.file.decls
}

#[test]
fn test_protocol_with_attribute() {
    let interner = StringInterner::new();
    let source = "@TypeErased\nprotocol Printer {\n    func print()\n}\n";
    let decls = parse_ok(source, &interner);
    assert_eq!(decls.len(), 1);
    let decl = &decls[0];
    assert_eq!(decl.attributes.len(), 1);
    assert_eq!(interner.lookup(decl.attributes[0].name), "TypeErased");
    assert_eq!(decl.attributes[0].span, Span::new(0, 11));
    assert_eq!(decl.span, Span::new(0, source.len() as u32 - 1));

    let DeclKind::Protocol(protocol) = &decl.kind else {
        panic!("expected protocol");
    };
    assert_eq!(interner.lookup(protocol.name), "Printer");
    assert_eq!(protocol.name_span.slice(source), "Printer");
    assert_eq!(protocol.members.len(), 1);
    let DeclKind::Func(func) = &protocol.members[0].kind else {
        panic!("expected func");
    };
    assert_eq!(interner.lookup(func.name), "print");
    assert!(func.params.is_empty());
    assert_eq!(func.ret, None);
    assert!(func.effects.is_empty());
    assert_eq!(func.body, None);
}

#[test]
fn test_attribute_arguments_kept_verbatim() {
    let interner = StringInterner::new();
    let decls = parse_ok("@available(iOS 15, *) @objc protocol P {}", &interner);
    let attrs = &decls[0].attributes;
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].arguments.map(|n| interner.lookup(n)), Some("(iOS 15, *)"));
    assert_eq!(attrs[1].arguments, None);
}

#[test]
fn test_method_signatures() {
    let interner = StringInterner::new();
    let source = "protocol Mapper {
    func map(x: Int, y: Int) -> Int
    func fetch() async throws(ErrorType) -> Value
    mutating func update(_ value: inout [String], at index: Int = 0)
    func log(_ items: Any..., separator: String)
}";
    let decls = parse_ok(source, &interner);
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    let funcs: Vec<_> = protocol
        .members
        .iter()
        .map(|m| match &m.kind {
            DeclKind::Func(f) => f,
            other => panic!("expected func, got {other:?}"),
        })
        .collect();

    assert_eq!(funcs[0].params.len(), 2);
    assert_eq!(interner.lookup(funcs[0].params[0].first_name), "x");
    assert_eq!(funcs[0].params[0].second_name, None);
    assert_eq!(funcs[0].ret, Some(TypeExpr::named(interner.intern("Int"))));

    assert!(funcs[1].effects.is_async);
    assert_eq!(
        funcs[1].effects.throws,
        Throws::Typed(Box::new(TypeExpr::named(interner.intern("ErrorType"))))
    );

    assert!(protocol.members[2].has_modifier(Modifier::Mutating));
    let update = &funcs[2].params;
    assert_eq!(interner.lookup(update[0].first_name), "_");
    assert_eq!(update[0].second_name.map(|n| interner.lookup(n)), Some("value"));
    assert_eq!(update[0].ty.specifier(), Some(xc_ir::Specifier::Inout));
    assert_eq!(interner.lookup(update[1].effective_name()), "index");
    assert_eq!(update[1].default.map(|n| interner.lookup(n)), Some("0"));

    assert!(funcs[3].params[0].variadic);
}

#[test]
fn test_static_and_class_modifiers_have_spans() {
    let interner = StringInterner::new();
    let source = "protocol Maker {\n    static func make()\n    class func other()\n}";
    let decls = parse_ok(source, &interner);
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    let first = protocol.members[0].type_level_modifier().unwrap();
    assert_eq!(first.kind, Modifier::Static);
    assert_eq!(first.span.slice(source), "static");
    let second = protocol.members[1].type_level_modifier().unwrap();
    assert_eq!(second.kind, Modifier::Class);
    assert_eq!(second.span.slice(source), "class");
}

#[test]
fn test_class_declaration_versus_class_modifier() {
    let interner = StringInterner::new();
    let decls = parse_ok("final class Box { class var shared: Box { fatalError() } }", &interner);
    assert!(decls[0].has_modifier(Modifier::Final));
    let DeclKind::Class(class) = &decls[0].kind else {
        panic!("expected class");
    };
    assert!(class.members[0].has_modifier(Modifier::Class));
    assert!(matches!(class.members[0].kind, DeclKind::Var(_)));
}

#[test]
fn test_associated_types_and_inheritance() {
    let interner = StringInterner::new();
    let source = "public protocol Fetcher: AnyObject, Sendable where Value: Equatable {
    associatedtype Value
    associatedtype ErrorType: Error & Sendable = Never
}";
    let decls = parse_ok(source, &interner);
    assert!(decls[0].has_modifier(Modifier::Public));
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    assert_eq!(protocol.inherited.len(), 2);
    assert_eq!(protocol.inherited[0].as_simple_name(), Some(interner.intern("AnyObject")));
    assert!(matches!(protocol.where_clause[0], Requirement::Conformance { .. }));

    let DeclKind::AssociatedType(error_type) = &protocol.members[1].kind else {
        panic!("expected associatedtype");
    };
    assert_eq!(error_type.inherited.len(), 1);
    assert!(matches!(error_type.inherited[0], TypeExpr::Composition(ref parts) if parts.len() == 2));
    assert_eq!(error_type.default, Some(TypeExpr::named(interner.intern("Never"))));
}

#[test]
fn test_legacy_class_constraint() {
    let interner = StringInterner::new();
    let decls = parse_ok("protocol P: class {}", &interner);
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    assert_eq!(protocol.inherited[0].as_simple_name(), Some(interner.intern("class")));
}

#[test]
fn test_properties_and_other_members() {
    let interner = StringInterner::new();
    let source = "protocol Store {
    var count: Int { get }
    var name: String { get set }
    init(name: String)
    init?(raw: Int)
    subscript(index: Int) -> Element { get }
    typealias Key = String
}";
    let decls = parse_ok(source, &interner);
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    let keywords: Vec<&str> = protocol.members.iter().map(xc_ir::Decl::keyword).collect();
    assert_eq!(keywords, vec!["var", "var", "init", "init", "subscript", "typealias"]);
    let DeclKind::Var(count) = &protocol.members[0].kind else {
        panic!("expected var");
    };
    assert_eq!(
        count.accessors,
        Some(FunctionBody::Verbatim(interner.intern("{ get }")))
    );
}

#[test]
fn test_function_body_kept_verbatim() {
    let interner = StringInterner::new();
    let source = "struct S {\n    func f() -> Int {\n        if x { return 1 }\n        return 2\n    }\n}";
    let decls = parse_ok(source, &interner);
    let DeclKind::Struct(s) = &decls[0].kind else {
        panic!("expected struct");
    };
    let DeclKind::Func(f) = &s.members[0].kind else {
        panic!("expected func");
    };
    let Some(FunctionBody::Verbatim(body)) = f.body else {
        panic!("expected body");
    };
    assert_eq!(
        interner.lookup(body),
        "{\n        if x { return 1 }\n        return 2\n    }"
    );
}

#[test]
fn test_stored_property_initializers() {
    let interner = StringInterner::new();
    let source = "struct S {\n    let a = compute(1, 2)\n    var b: [Int] = []\n    func f()\n}";
    let decls = parse_ok(source, &interner);
    let DeclKind::Struct(s) = &decls[0].kind else {
        panic!("expected struct");
    };
    assert_eq!(s.members.len(), 3);
    let DeclKind::Var(a) = &s.members[0].kind else {
        panic!("expected var");
    };
    assert_eq!(a.initializer.map(|n| interner.lookup(n)), Some("compute(1, 2)"));
}

#[test]
fn test_operator_function_names() {
    let interner = StringInterner::new();
    let decls = parse_ok("protocol Eq { static func == (lhs: Self, rhs: Self) -> Bool }", &interner);
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    assert_eq!(protocol.members[0].name().map(|n| interner.lookup(n)), Some("=="));
}

#[test]
fn test_generic_method_and_where_clause() {
    let interner = StringInterner::new();
    let decls = parse_ok(
        "protocol P { func convert<T: Decodable, U>(_ t: T) -> U where U: Encodable }",
        &interner,
    );
    let DeclKind::Protocol(protocol) = &decls[0].kind else {
        panic!("expected protocol");
    };
    let DeclKind::Func(f) = &protocol.members[0].kind else {
        panic!("expected func");
    };
    assert!(f.is_generic());
    assert_eq!(f.generics.len(), 2);
    assert_eq!(f.generics[0].bounds.len(), 1);
    assert_eq!(f.where_clause.len(), 1);
}

#[test]
fn test_enum_extension_import() {
    let interner = StringInterner::new();
    let source = "import Foundation\n\nenum Mode: Int { case a = 1, b\n case c(value: Int) }\nextension Mode: CustomStringConvertible where Self: Sendable {}";
    let decls = parse_ok(source, &interner);
    assert_eq!(decls.len(), 3);
    assert!(matches!(decls[0].kind, DeclKind::Import(ref i) if i.path.len() == 1));
    let DeclKind::Enum(mode) = &decls[1].kind else {
        panic!("expected enum");
    };
    assert_eq!(mode.members.len(), 2);
    let DeclKind::Extension(ext) = &decls[2].kind else {
        panic!("expected extension");
    };
    assert_eq!(ext.inherited.len(), 1);
    assert_eq!(ext.where_clause.len(), 1);
}

#[test]
fn test_access_modifier_detail() {
    let interner = StringInterner::new();
    let decls = parse_ok("public struct S { public private(set) var x: Int }", &interner);
    let DeclKind::Struct(s) = &decls[0].kind else {
        panic!("expected struct");
    };
    let modifiers = &s.members[0].modifiers;
    assert_eq!(modifiers.len(), 2);
    assert_eq!(modifiers[1].kind, Modifier::Private);
    assert_eq!(modifiers[1].detail.map(|n| interner.lookup(n)), Some("set"));
    assert_eq!(s.members[0].access_level(), Some(xc_ir::AccessLevel::Public));
}

#[test]
fn test_compiler_directives_skipped() {
    let interner = StringInterner::new();
    let source = "#if DEBUG\nprotocol A {}\n#else\nprotocol B {}\n#endif\n#warning(\"todo\")\nprotocol C {}";
    let decls = parse_ok(source, &interner);
    assert_eq!(decls.len(), 3);
}

#[test]
fn test_contextual_modifiers() {
    let interner = StringInterner::new();
    let decls = parse_ok("class C { nonisolated func f() {} lazy var x = 1 }", &interner);
    let DeclKind::Class(c) = &decls[0].kind else {
        panic!("expected class");
    };
    assert!(c.members[0].has_modifier(Modifier::Nonisolated));
    assert!(c.members[1].has_modifier(Modifier::Lazy));
}

#[test]
fn test_recovers_after_bad_member() {
    let interner = StringInterner::new();
    let output = parse("protocol P {\n    func (x: Int)\n    func ok()\n}\nprotocol Q {}", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1004);
    assert_eq!(output.file.decls.len(), 2);
    let DeclKind::Protocol(p) = &output.file.decls[0].kind else {
        panic!("expected protocol");
    };
    assert_eq!(p.members.len(), 1);
}

#[test]
fn test_top_level_garbage_reports_e1002() {
    let interner = StringInterner::new();
    let output = parse("print(1)\nprotocol P {}", &interner);
    assert_eq!(output.errors[0].code, ErrorCode::E1002);
    assert_eq!(output.file.decls.len(), 1);
}

#[test]
fn test_unclosed_protocol_body() {
    let interner = StringInterner::new();
    let output = parse("protocol P {\n    func f()\n", &interner);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1003);
    assert_eq!(output.diagnostics()[0].labels.len(), 2);
}

#[test]
fn test_parse_source_collects_lexer_diagnostics() {
    let interner = StringInterner::new();
    let (file, diagnostics) = parse_source("protocol P { func f() } '", &interner);
    assert_eq!(file.decls.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0001);
}
