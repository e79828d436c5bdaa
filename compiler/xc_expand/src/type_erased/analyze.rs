//! Validates the declaration `@TypeErased` is attached to and extracts what
//! the wrapper is built from.
//!
//! Checks run in a fixed order and the first failing check stops analysis:
//! not a protocol, type-level methods, overloads, generic methods, variadic
//! parameters, mutating methods. A protocol with static methods therefore reports exactly one
//! error, whatever else is wrong with it.

use rustc_hash::FxHashMap;
use xc_diagnostic::ErrorGuaranteed;
use xc_ir::{
    AccessLevel, AssociatedTypeDecl, Attribute, Decl, DeclKind, FuncDecl, Modifier, Name,
    ProtocolDecl, Requirement, Span, StringInterner, TypeExpr,
};

use super::diagnostics::{with_trailing_whitespace, EraseError, ModifierRemoval};
use crate::context::MacroExpansionContext;

/// A protocol that passed every check.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AnalyzedInterface {
    pub name: Name,
    pub name_span: Span,
    /// In declaration order.
    pub methods: Vec<Method>,
    /// In declaration order.
    pub associated_types: Vec<AssociatedTypeDecl>,
    /// The protocol's inheritance clause.
    pub inherited: Vec<TypeExpr>,
    /// The protocol's own `where` clause.
    pub where_clause: Vec<Requirement>,
    /// Inherits `AnyObject` (or the legacy `class`).
    pub reference_semantics: bool,
    pub access: Option<AccessLevel>,
}

/// A method requirement plus the attributes written on it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Method {
    pub attributes: Vec<Attribute>,
    pub func: FuncDecl,
}

/// Check `decl` and collect its methods and associated types.
#[tracing::instrument(level = "debug", skip_all)]
pub fn analyze(
    decl: &Decl,
    ctx: &mut dyn MacroExpansionContext,
) -> Result<AnalyzedInterface, ErrorGuaranteed> {
    let DeclKind::Protocol(protocol) = &decl.kind else {
        tracing::debug!(keyword = decl.keyword(), "not a protocol");
        let error = EraseError::NotInterface {
            span: decl.name_span(),
            keyword: decl.keyword(),
        };
        return Err(ctx.diagnose(error.report()));
    };

    let methods: Vec<&Decl> = protocol
        .members
        .iter()
        .filter(|member| matches!(member.kind, DeclKind::Func(_)))
        .collect();

    if let Some(error) = check_type_level(&methods, ctx.source_text()) {
        return Err(ctx.diagnose(error.report()));
    }
    let errors = check_overloads(&methods, ctx.interner());
    report_all(ctx, errors)?;
    let errors = check_generic(&methods, ctx.interner());
    report_all(ctx, errors)?;
    let errors = check_variadic(&methods, ctx.interner());
    report_all(ctx, errors)?;
    let errors = check_mutating(&methods, ctx.interner());
    report_all(ctx, errors)?;

    let analyzed = collect(decl, protocol, &methods, ctx.interner());
    tracing::debug!(
        protocol = ctx.interner().lookup(analyzed.name),
        methods = analyzed.methods.len(),
        associated_types = analyzed.associated_types.len(),
        reference = analyzed.reference_semantics,
        "analyzed protocol"
    );
    Ok(analyzed)
}

fn collect(
    decl: &Decl,
    protocol: &ProtocolDecl,
    methods: &[&Decl],
    interner: &StringInterner,
) -> AnalyzedInterface {
    let methods = methods
        .iter()
        .filter_map(|member| match &member.kind {
            DeclKind::Func(func) => Some(Method {
                attributes: member.attributes.clone(),
                func: func.clone(),
            }),
            _ => None,
        })
        .collect();

    let associated_types = protocol
        .members
        .iter()
        .filter_map(|member| match &member.kind {
            DeclKind::AssociatedType(assoc) => Some(assoc.clone()),
            _ => None,
        })
        .collect();

    AnalyzedInterface {
        name: protocol.name,
        name_span: protocol.name_span,
        methods,
        associated_types,
        inherited: protocol.inherited.clone(),
        where_clause: protocol.where_clause.clone(),
        reference_semantics: has_reference_semantics(&protocol.inherited, interner),
        access: decl.access_level(),
    }
}

/// True when the inheritance clause names `AnyObject` or `class`.
pub fn has_reference_semantics(inherited: &[TypeExpr], interner: &StringInterner) -> bool {
    inherited.iter().any(|ty| {
        ty.as_simple_name()
            .is_some_and(|name| matches!(interner.lookup(name), "AnyObject" | "class"))
    })
}

fn report_all(
    ctx: &mut dyn MacroExpansionContext,
    errors: Vec<EraseError>,
) -> Result<(), ErrorGuaranteed> {
    let mut guarantee = None;
    for error in errors {
        guarantee = Some(ctx.diagnose(error.report()));
    }
    match guarantee {
        Some(guarantee) => Err(guarantee),
        None => Ok(()),
    }
}

fn check_type_level(methods: &[&Decl], source: &str) -> Option<EraseError> {
    let removals: Vec<ModifierRemoval> = methods
        .iter()
        .filter_map(|method| method.type_level_modifier())
        .map(|modifier| ModifierRemoval {
            keyword: modifier.kind.as_str(),
            span: modifier.span,
            delete: with_trailing_whitespace(modifier.span, source),
        })
        .collect();
    (!removals.is_empty()).then_some(EraseError::StaticMethodNotAllowed { removals })
}

fn check_overloads(methods: &[&Decl], interner: &StringInterner) -> Vec<EraseError> {
    let mut seen: FxHashMap<Name, Span> = FxHashMap::default();
    let mut errors = Vec::new();
    for func in funcs(methods) {
        match seen.get(&func.name) {
            Some(first) => errors.push(EraseError::OverloadedMethod {
                name: interner.lookup(func.name).to_string(),
                first: *first,
                second: func.name_span,
            }),
            None => {
                seen.insert(func.name, func.name_span);
            }
        }
    }
    errors
}

/// Own generic parameters, or an opaque `some P` anywhere in the signature.
fn check_generic(methods: &[&Decl], interner: &StringInterner) -> Vec<EraseError> {
    funcs(methods)
        .filter(|func| {
            func.is_generic()
                || func.params.iter().any(|p| mentions_opaque(&p.ty))
                || func.ret.as_ref().is_some_and(mentions_opaque)
        })
        .map(|func| EraseError::GenericMethodNotSupported {
            name: interner.lookup(func.name).to_string(),
            span: func.name_span,
        })
        .collect()
}

fn check_variadic(methods: &[&Decl], interner: &StringInterner) -> Vec<EraseError> {
    funcs(methods)
        .flat_map(|func| {
            func.params
                .iter()
                .filter(|param| param.variadic)
                .map(move |param| EraseError::VariadicParameterNotSupported {
                    method: interner.lookup(func.name).to_string(),
                    param: interner.lookup(param.effective_name()).to_string(),
                    span: param.span,
                })
        })
        .collect()
}

fn check_mutating(methods: &[&Decl], interner: &StringInterner) -> Vec<EraseError> {
    methods
        .iter()
        .filter_map(|method| {
            let DeclKind::Func(func) = &method.kind else {
                return None;
            };
            let modifier = method
                .modifiers
                .iter()
                .find(|m| m.kind == Modifier::Mutating)?;
            Some(EraseError::MutatingMethodNotSupported {
                name: interner.lookup(func.name).to_string(),
                span: modifier.span,
            })
        })
        .collect()
}

fn funcs<'a>(methods: &'a [&'a Decl]) -> impl Iterator<Item = &'a FuncDecl> + 'a {
    methods.iter().filter_map(|method| match &method.kind {
        DeclKind::Func(func) => Some(func),
        _ => None,
    })
}

fn mentions_opaque(ty: &TypeExpr) -> bool {
    match ty {
        TypeExpr::Opaque(_) => true,
        TypeExpr::Named { args, .. } | TypeExpr::Member { args, .. } => {
            args.iter().any(mentions_opaque)
        }
        TypeExpr::Optional(inner)
        | TypeExpr::ImplicitlyUnwrapped(inner)
        | TypeExpr::Array(inner)
        | TypeExpr::Existential(inner)
        | TypeExpr::Metatype { base: inner, .. }
        | TypeExpr::Attributed { base: inner, .. } => mentions_opaque(inner),
        TypeExpr::Dictionary { key, value } => mentions_opaque(key) || mentions_opaque(value),
        TypeExpr::Tuple(elements) => elements.iter().any(|e| mentions_opaque(&e.ty)),
        TypeExpr::Function(function) => {
            function.params.iter().any(mentions_opaque) || mentions_opaque(&function.ret)
        }
        TypeExpr::Composition(parts) => parts.iter().any(mentions_opaque),
    }
}

#[cfg(test)]
mod tests;
