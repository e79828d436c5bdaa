use super::*;
use crate::StringInterner;

fn func(interner: &StringInterner, name: &str) -> Decl {
    Decl::new(DeclKind::Func(FuncDecl {
        name: interner.intern(name),
        name_span: Span::new(5, 10),
        generics: Vec::new(),
        params: Vec::new(),
        effects: Effects::NONE,
        ret: None,
        where_clause: Vec::new(),
        body: None,
    }))
}

#[test]
fn test_decl_keyword_and_name() {
    let interner = StringInterner::new();
    let decl = func(&interner, "print");
    assert_eq!(decl.keyword(), "func");
    assert_eq!(decl.name(), Some(interner.intern("print")));
    assert_eq!(decl.name_span(), Span::new(5, 10));
}

#[test]
fn test_type_level_modifier_detection() {
    let interner = StringInterner::new();
    let plain = func(&interner, "make");
    assert!(plain.type_level_modifier().is_none());

    let stat = func(&interner, "make")
        .with_modifier(Modifier::Public)
        .with_modifier(Modifier::Static);
    assert_eq!(
        stat.type_level_modifier().map(|m| m.kind),
        Some(Modifier::Static)
    );
    assert!(stat.has_modifier(Modifier::Public));

    let class = func(&interner, "make").with_modifier(Modifier::Class);
    assert!(class.type_level_modifier().is_some());
}

#[test]
fn test_access_level_skips_setter_detail() {
    let interner = StringInterner::new();
    let mut decl = func(&interner, "f");
    decl.modifiers.push(DeclModifier {
        kind: Modifier::Private,
        detail: Some(interner.intern("set")),
        span: Span::DUMMY,
    });
    assert_eq!(decl.access_level(), None);

    let decl = decl.with_modifier(Modifier::Public);
    assert_eq!(decl.access_level(), Some(AccessLevel::Public));
    assert!(AccessLevel::Open > AccessLevel::Public);
}

#[test]
fn test_param_effective_name() {
    let interner = StringInterner::new();
    let labelled = Param {
        first_name: interner.intern("with"),
        second_name: Some(interner.intern("value")),
        ty: TypeExpr::named(interner.intern("Int")),
        variadic: false,
        default: None,
        span: Span::DUMMY,
    };
    assert_eq!(labelled.effective_name(), interner.intern("value"));

    let plain = Param {
        second_name: None,
        ..labelled
    };
    assert_eq!(plain.effective_name(), interner.intern("with"));
}

#[test]
fn test_compose_bounds() {
    let interner = StringInterner::new();
    let a = TypeExpr::named(interner.intern("A"));
    let b = TypeExpr::named(interner.intern("B"));

    assert_eq!(TypeExpr::compose(Vec::new()), None);
    assert_eq!(TypeExpr::compose(vec![a.clone()]), Some(a.clone()));
    assert_eq!(
        TypeExpr::compose(vec![a.clone(), b.clone()]),
        Some(TypeExpr::Composition(vec![a, b]))
    );
}

#[test]
fn test_effects_flags() {
    let interner = StringInterner::new();
    assert!(Effects::NONE.is_empty());
    let typed = Effects {
        is_async: true,
        throws: Throws::Typed(Box::new(TypeExpr::named(interner.intern("E")))),
    };
    assert!(typed.is_throwing());
    assert!(!typed.is_empty());
    let rethrows = Effects {
        is_async: false,
        throws: Throws::Rethrows,
    };
    assert!(rethrows.is_throwing());
}

#[test]
fn test_modifier_from_contextual() {
    assert_eq!(
        Modifier::from_contextual("nonisolated"),
        Some(Modifier::Nonisolated)
    );
    assert_eq!(Modifier::from_contextual("static"), None);
    assert!(Modifier::Class.is_type_level());
    assert!(!Modifier::Mutating.is_type_level());
}
