//! Type expression printing.

use xc_ir::{Effects, StringLookup, Throws, TupleElement, TypeExpr};

/// Render a type as Swift source.
pub fn format_type<I: StringLookup>(ty: &TypeExpr, interner: &I) -> String {
    let mut out = String::new();
    write_type(&mut out, ty, interner);
    out
}

/// Render `async`, `throws`, `throws(E)` or `rethrows` with a leading space
/// per effect; empty for no effects.
pub fn format_effects<I: StringLookup>(effects: &Effects, interner: &I) -> String {
    let mut out = String::new();
    if effects.is_async {
        out.push_str(" async");
    }
    match &effects.throws {
        Throws::None => {}
        Throws::Untyped => out.push_str(" throws"),
        Throws::Typed(error) => {
            out.push_str(" throws(");
            write_type(&mut out, error, interner);
            out.push(')');
        }
        Throws::Rethrows => out.push_str(" rethrows"),
    }
    out
}

pub(crate) fn write_type<I: StringLookup>(out: &mut String, ty: &TypeExpr, interner: &I) {
    match ty {
        TypeExpr::Named { name, args } => {
            out.push_str(interner.lookup(*name));
            write_generic_args(out, args, interner);
        }
        TypeExpr::Member { base, name, args } => {
            write_operand(out, base, interner);
            out.push('.');
            out.push_str(interner.lookup(*name));
            write_generic_args(out, args, interner);
        }
        TypeExpr::Optional(base) => {
            write_operand(out, base, interner);
            out.push('?');
        }
        TypeExpr::ImplicitlyUnwrapped(base) => {
            write_operand(out, base, interner);
            out.push('!');
        }
        TypeExpr::Array(element) => {
            out.push('[');
            write_type(out, element, interner);
            out.push(']');
        }
        TypeExpr::Dictionary { key, value } => {
            out.push('[');
            write_type(out, key, interner);
            out.push_str(": ");
            write_type(out, value, interner);
            out.push(']');
        }
        TypeExpr::Tuple(elements) => write_tuple(out, elements, interner),
        TypeExpr::Function(function) => {
            out.push('(');
            for (i, param) in function.params.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_type(out, param, interner);
            }
            out.push(')');
            out.push_str(&format_effects(&function.effects, interner));
            out.push_str(" -> ");
            write_type(out, &function.ret, interner);
        }
        TypeExpr::Opaque(base) => {
            out.push_str("some ");
            write_type(out, base, interner);
        }
        TypeExpr::Existential(base) => {
            out.push_str("any ");
            write_type(out, base, interner);
        }
        TypeExpr::Composition(parts) => {
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    out.push_str(" & ");
                }
                if matches!(part, TypeExpr::Function(_)) {
                    out.push('(');
                    write_type(out, part, interner);
                    out.push(')');
                } else {
                    write_type(out, part, interner);
                }
            }
        }
        TypeExpr::Metatype { base, kind } => {
            write_operand(out, base, interner);
            out.push('.');
            out.push_str(kind.as_str());
        }
        TypeExpr::Attributed {
            specifier,
            attributes,
            base,
        } => {
            if let Some(specifier) = specifier {
                out.push_str(specifier.as_str());
                out.push(' ');
            }
            for attribute in attributes {
                out.push('@');
                out.push_str(interner.lookup(attribute.name));
                if let Some(arguments) = attribute.arguments {
                    out.push_str(interner.lookup(arguments));
                }
                out.push(' ');
            }
            write_type(out, base, interner);
        }
    }
}

/// A type in postfix-operand position; loosely binding forms get parens.
fn write_operand<I: StringLookup>(out: &mut String, ty: &TypeExpr, interner: &I) {
    let needs_parens = matches!(
        ty,
        TypeExpr::Function(_)
            | TypeExpr::Composition(_)
            | TypeExpr::Opaque(_)
            | TypeExpr::Existential(_)
            | TypeExpr::Attributed { .. }
    );
    if needs_parens {
        out.push('(');
        write_type(out, ty, interner);
        out.push(')');
    } else {
        write_type(out, ty, interner);
    }
}

fn write_generic_args<I: StringLookup>(out: &mut String, args: &[TypeExpr], interner: &I) {
    if args.is_empty() {
        return;
    }
    out.push('<');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_type(out, arg, interner);
    }
    out.push('>');
}

pub(crate) fn write_tuple<I: StringLookup>(
    out: &mut String,
    elements: &[TupleElement],
    interner: &I,
) {
    out.push('(');
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(label) = element.label {
            out.push_str(interner.lookup(label));
            out.push_str(": ");
        }
        write_type(out, &element.ty, interner);
    }
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xc_ir::StringInterner;

    fn round_trip(text: &str) -> String {
        let interner = StringInterner::new();
        let ty = xc_parse::parse_type(text, &interner).unwrap_or_else(|e| panic!("{e:?}"));
        format_type(&ty, &interner)
    }

    #[test]
    fn canonical_types_print_unchanged() {
        for text in [
            "Int",
            "[String: [Int]]?",
            "Result<Value, any Error>",
            "(Int, String) async throws -> Void",
            "() async throws(ErrorType) -> Value",
            "(x: Int, y: Int)",
            "(() -> Void)?",
            "(any Hashable & Sendable)?",
            "some Collection<Int>",
            "Swift.Result<Int, Never>.Type",
            "(any P).Type",
            "@escaping @Sendable (Int) -> Void",
            "inout [Int]",
            "T.Element!",
        ] {
            assert_eq!(round_trip(text), text);
        }
    }

    #[test]
    fn spacing_is_normalized() {
        assert_eq!(round_trip("[ String : Int ]"), "[String: Int]");
        assert_eq!(round_trip("( Int )->Int"), "(Int) -> Int");
    }

    #[test]
    fn effects_render_with_leading_spaces() {
        let interner = StringInterner::new();
        let effects = Effects {
            is_async: true,
            throws: Throws::Rethrows,
        };
        assert_eq!(format_effects(&effects, &interner), " async rethrows");
        assert_eq!(format_effects(&Effects::NONE, &interner), "");
    }
}
