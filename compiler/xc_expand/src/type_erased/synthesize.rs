//! Builds the `Any<Protocol>` wrapper from an analyzed protocol.
//!
//! The wrapper stores one closure per method, captured from the erased value
//! in a generic initializer, and forwards each method through its closure:
//!
//! ```text
//! struct AnyPrinter: Printer {
//!     private let _print: () -> Void
//!
//!     init<C: Printer>(_ printer: C) {
//!         _print = printer.print
//!     }
//!
//!     func print() {
//!         _print()
//!     }
//! }
//! ```
//!
//! Each piece comes from its own builder; [`WrapperType::to_decl`] puts them
//! together. Nothing here can fail once analysis passed.

use xc_ir::{
    AccessLevel, Decl, DeclKind, DeclModifier, Effects, Expr, FuncDecl, FunctionBody,
    GenericParam, InitDecl, Modifier, Name, NominalDecl, Param, Requirement, Span, Stmt,
    StringInterner, TypeExpr, VarDecl,
};

use super::analyze::{AnalyzedInterface, Method};
use super::signature::{closure_type, forwarding_expr, forwarding_params, property_name};
use crate::context::MacroExpansionContext;

/// Value or reference wrapper.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WrapperKind {
    Struct,
    FinalClass,
}

/// `private let _name: ty`
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StoredProperty {
    pub name: Name,
    pub ty: TypeExpr,
}

/// The generated wrapper, before it becomes a declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WrapperType {
    pub name: Name,
    pub kind: WrapperKind,
    /// Access modifier of the type itself.
    pub access: Option<AccessLevel>,
    /// Access modifier of the initializer and forwarding methods.
    pub member_access: Option<AccessLevel>,
    pub protocol: Name,
    /// One per associated type.
    pub generics: Vec<GenericParam>,
    pub where_clause: Vec<Requirement>,
    /// Initializer-level parameter standing for the erased type.
    pub conformer: Name,
    pub stored: Vec<StoredProperty>,
    pub initializer: InitDecl,
    pub methods: Vec<Decl>,
}

/// Build the wrapper for `analyzed`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn synthesize(analyzed: &AnalyzedInterface, ctx: &mut dyn MacroExpansionContext) -> WrapperType {
    let conformer = ctx.fresh_name("C");
    let interner = ctx.interner();

    let protocol_name = interner.lookup(analyzed.name);
    let name = interner.intern(&format!("Any{protocol_name}"));
    let kind = if analyzed.reference_semantics {
        WrapperKind::FinalClass
    } else {
        WrapperKind::Struct
    };
    let (access, member_access) = wrapper_access(analyzed.access);

    let wrapper = WrapperType {
        name,
        kind,
        access,
        member_access,
        protocol: analyzed.name,
        generics: generic_params(analyzed),
        where_clause: type_requirements(analyzed),
        conformer,
        stored: stored_properties(&analyzed.methods, interner),
        initializer: initializer(analyzed, conformer, interner),
        methods: forwarding_methods(&analyzed.methods, member_access, interner),
    };
    tracing::debug!(
        wrapper = interner.lookup(name),
        kind = ?wrapper.kind,
        generics = wrapper.generics.len(),
        methods = wrapper.methods.len(),
        "synthesized wrapper"
    );
    wrapper
}

/// Access of the type and of its members.
///
/// `open` has no meaning for a final wrapper and becomes `public`. Members
/// only repeat levels above `internal`; below that the type's own level
/// already caps them.
pub fn wrapper_access(
    protocol: Option<AccessLevel>,
) -> (Option<AccessLevel>, Option<AccessLevel>) {
    let access = match protocol {
        Some(AccessLevel::Open) => Some(AccessLevel::Public),
        Some(AccessLevel::Internal) | None => None,
        other => other,
    };
    let member_access = access.filter(|level| *level >= AccessLevel::Package);
    (access, member_access)
}

/// One generic parameter per associated type, carrying its bounds.
pub fn generic_params(analyzed: &AnalyzedInterface) -> Vec<GenericParam> {
    analyzed
        .associated_types
        .iter()
        .map(|assoc| GenericParam {
            name: assoc.name,
            bounds: assoc
                .inherited
                .iter()
                .flat_map(|bound| match bound {
                    TypeExpr::Composition(parts) => parts.clone(),
                    other => vec![other.clone()],
                })
                .collect(),
        })
        .collect()
}

/// Constraints the protocol puts on its associated types, restated on the
/// wrapper's generic parameters.
fn type_requirements(analyzed: &AnalyzedInterface) -> Vec<Requirement> {
    analyzed
        .where_clause
        .iter()
        .chain(
            analyzed
                .associated_types
                .iter()
                .flat_map(|assoc| assoc.where_clause.iter()),
        )
        .cloned()
        .collect()
}

pub fn stored_properties(methods: &[Method], interner: &StringInterner) -> Vec<StoredProperty> {
    methods
        .iter()
        .map(|method| StoredProperty {
            name: property_name(&method.func, interner),
            ty: closure_type(&method.func, interner),
        })
        .collect()
}

/// `init<C: P>(_ p: C) where C.T == T { _m = p.m }`
pub fn initializer(
    analyzed: &AnalyzedInterface,
    conformer: Name,
    interner: &StringInterner,
) -> InitDecl {
    let param = interner.intern(&lower_camel(interner.lookup(analyzed.name)));
    let conformer_ty = TypeExpr::named(conformer);

    let where_clause = analyzed
        .associated_types
        .iter()
        .map(|assoc| Requirement::SameType {
            left: TypeExpr::member(conformer_ty.clone(), assoc.name),
            right: TypeExpr::named(assoc.name),
        })
        .collect();

    let body = analyzed
        .methods
        .iter()
        .map(|method| Stmt::Assign {
            target: Expr::Ident(property_name(&method.func, interner)),
            value: Expr::member(Expr::Ident(param), method.func.name),
        })
        .collect();

    InitDecl {
        failability: None,
        generics: vec![GenericParam {
            name: conformer,
            bounds: vec![TypeExpr::named(analyzed.name)],
        }],
        params: vec![Param {
            first_name: interner.intern("_"),
            second_name: Some(param),
            ty: conformer_ty,
            variadic: false,
            default: None,
            span: Span::DUMMY,
        }],
        effects: Effects::NONE,
        where_clause,
        body: Some(FunctionBody::Block(body)),
    }
}

/// The protocol's methods again, each calling its stored closure.
///
/// Declaration modifiers are replaced by the wrapper's member access.
pub fn forwarding_methods(
    methods: &[Method],
    access: Option<AccessLevel>,
    interner: &StringInterner,
) -> Vec<Decl> {
    methods
        .iter()
        .map(|method| {
            let mut func = FuncDecl {
                params: forwarding_params(&method.func.params, interner),
                body: None,
                ..method.func.clone()
            };
            let call = forwarding_expr(&func, property_name(&func, interner));
            func.body = Some(FunctionBody::Block(vec![Stmt::Expr(call)]));

            let mut decl = Decl::new(DeclKind::Func(func));
            decl.attributes = method.attributes.clone();
            decl.modifiers = access_modifiers(access);
            decl
        })
        .collect()
}

/// `Printer` -> `printer`, `URLSession` -> `urlSession`.
pub fn lower_camel(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let upper = chars.iter().take_while(|c| c.is_uppercase()).count();
    let lower = if upper > 1 && chars.get(upper).is_some_and(|c| c.is_lowercase()) {
        upper - 1
    } else {
        upper
    };
    chars
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            let lowered: Vec<char> = if i < lower {
                c.to_lowercase().collect()
            } else {
                vec![*c]
            };
            lowered
        })
        .collect()
}

fn access_modifiers(access: Option<AccessLevel>) -> Vec<DeclModifier> {
    access
        .map(|level| DeclModifier::new(level.modifier()))
        .into_iter()
        .collect()
}

impl WrapperType {
    /// The wrapper as a declaration ready to print.
    pub fn to_decl(&self) -> Decl {
        let stored = self.stored.iter().map(|property| {
            Decl::new(DeclKind::Var(VarDecl {
                is_let: true,
                name: property.name,
                name_span: Span::DUMMY,
                ty: Some(property.ty.clone()),
                initializer: None,
                accessors: None,
            }))
            .with_modifier(Modifier::Private)
        });

        let mut initializer = Decl::new(DeclKind::Init(self.initializer.clone()));
        initializer.modifiers = access_modifiers(self.member_access);

        let members = stored
            .chain(std::iter::once(initializer))
            .chain(self.methods.iter().cloned())
            .collect();

        let nominal = NominalDecl {
            name: self.name,
            name_span: Span::DUMMY,
            generics: self.generics.clone(),
            inherited: vec![TypeExpr::named(self.protocol)],
            where_clause: self.where_clause.clone(),
            members,
        };

        let mut decl = match self.kind {
            WrapperKind::Struct => Decl::new(DeclKind::Struct(nominal)),
            WrapperKind::FinalClass => Decl::new(DeclKind::Class(nominal)),
        };
        decl.modifiers = access_modifiers(self.access);
        if self.kind == WrapperKind::FinalClass {
            decl.modifiers.push(DeclModifier::new(Modifier::Final));
        }
        decl
    }
}
