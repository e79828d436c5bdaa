//! Method signature to closure type, and the call that forwards to it.
//!
//! Each function here is pure: it reads a [`FuncDecl`] and builds a new
//! syntax piece without touching the input.

use rustc_hash::FxHashSet;
use xc_ir::{
    Argument, Effects, Expr, FuncDecl, FunctionType, Name, Param, Specifier, StringInterner,
    Throws, TypeExpr,
};

/// Name of the stored closure for `method`: `_` plus the method name.
pub fn property_name(method: &FuncDecl, interner: &StringInterner) -> Name {
    interner.intern(&format!("_{}", interner.lookup(method.name)))
}

/// Parameters of the forwarding method.
///
/// An unnamed parameter (`_: Int`) cannot be referenced in the body, so it
/// gets the internal name `argN`, N being its position. A name already taken
/// by another parameter gets a numeric suffix (`arg0_1`). Labels are kept.
pub fn forwarding_params(params: &[Param], interner: &StringInterner) -> Vec<Param> {
    let mut taken: FxHashSet<Name> = params
        .iter()
        .map(Param::effective_name)
        .filter(|name| interner.lookup(*name) != "_")
        .collect();
    params
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let mut param = param.clone();
            if interner.lookup(param.effective_name()) == "_" {
                let name = unused_name(&format!("arg{i}"), &taken, interner);
                taken.insert(name);
                param.second_name = Some(name);
            }
            param
        })
        .collect()
}

/// `base`, or `base_1`, `base_2`, ... if `base` is taken.
fn unused_name(base: &str, taken: &FxHashSet<Name>, interner: &StringInterner) -> Name {
    let mut name = interner.intern(base);
    let mut suffix = 1;
    while taken.contains(&name) {
        name = interner.intern(&format!("{base}_{suffix}"));
        suffix += 1;
    }
    name
}

/// `(A, B) async throws -> R` for a method `m(a: A, b: B) async throws -> R`.
///
/// Labels are dropped and parameter specifiers such as `inout` kept. A
/// missing result becomes `Void`.
pub fn closure_type(method: &FuncDecl, interner: &StringInterner) -> TypeExpr {
    let ret = method
        .ret
        .clone()
        .unwrap_or_else(|| TypeExpr::named(interner.intern("Void")));
    TypeExpr::Function(FunctionType {
        params: method.params.iter().map(|p| p.ty.clone()).collect(),
        effects: closure_effects(&method.effects),
        ret: Box::new(ret),
    })
}

/// Effects a stored closure can carry: `rethrows` only makes sense on a
/// declaration, so it widens to `throws`.
pub fn closure_effects(effects: &Effects) -> Effects {
    let throws = match &effects.throws {
        Throws::Rethrows => Throws::Untyped,
        other => other.clone(),
    };
    Effects {
        is_async: effects.is_async,
        throws,
    }
}

/// `try await property(a, &b)`: call the stored closure with the method's
/// arguments in order.
///
/// Expects the parameters of the forwarding method, i.e. after
/// [`forwarding_params`].
pub fn forwarding_expr(method: &FuncDecl, property: Name) -> Expr {
    let args = method
        .params
        .iter()
        .map(|param| {
            let value = Expr::Ident(param.effective_name());
            if param.ty.specifier() == Some(Specifier::Inout) {
                Argument::positional(Expr::InOut(Box::new(value)))
            } else {
                Argument::positional(value)
            }
        })
        .collect();

    let mut expr = Expr::call(Expr::Ident(property), args);
    if method.effects.is_async {
        expr = Expr::Await(Box::new(expr));
    }
    if method.effects.is_throwing() {
        expr = Expr::Try(Box::new(expr));
    }
    expr
}
