//! Errors the type-erasure macro reports, and how they render.

use xc_diagnostic::{Diagnostic, ErrorCode, Suggestion};
use xc_ir::Span;

/// A `static` or `class` modifier and the text a fix-it deletes for it.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ModifierRemoval {
    pub keyword: &'static str,
    /// The modifier token.
    pub span: Span,
    /// The token plus the whitespace after it.
    pub delete: Span,
}

/// Why a declaration cannot be type-erased.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum EraseError {
    /// Attached to something other than a protocol.
    NotInterface { span: Span, keyword: &'static str },
    /// One or more type-level methods. Anchored at the first.
    StaticMethodNotAllowed { removals: Vec<ModifierRemoval> },
    /// Two methods share a base name.
    OverloadedMethod {
        name: String,
        first: Span,
        second: Span,
    },
    /// A method with its own generic parameters.
    GenericMethodNotSupported { name: String, span: Span },
    /// A `T...` parameter.
    VariadicParameterNotSupported {
        method: String,
        param: String,
        span: Span,
    },
    /// A `mutating` requirement. Anchored at the modifier.
    MutatingMethodNotSupported { name: String, span: Span },
}

impl EraseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EraseError::NotInterface { .. } => ErrorCode::E2001,
            EraseError::StaticMethodNotAllowed { .. } => ErrorCode::E2002,
            EraseError::OverloadedMethod { .. } => ErrorCode::E2003,
            EraseError::GenericMethodNotSupported { .. } => ErrorCode::E2004,
            EraseError::VariadicParameterNotSupported { .. } => ErrorCode::E2005,
            EraseError::MutatingMethodNotSupported { .. } => ErrorCode::E2006,
        }
    }

    /// Render as a diagnostic, fix-its included.
    pub fn report(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code());
        match self {
            EraseError::NotInterface { span, keyword } => diag
                .with_message("`@TypeErased` can only be attached to a protocol")
                .with_label(*span, format!("this is {} {keyword}", article(keyword))),

            EraseError::StaticMethodNotAllowed { removals } => {
                let mut diag = diag.with_message(
                    "`@TypeErased` protocols must not declare static methods",
                );
                for (i, removal) in removals.iter().enumerate() {
                    diag = if i == 0 {
                        diag.with_label(removal.span, "static method declared here")
                    } else {
                        diag.with_secondary_label(removal.span, "another static method")
                    };
                }
                let mut diag = diag.with_note(
                    "the wrapper forwards calls to a stored value; type-level methods have no value to forward to",
                );
                for removal in removals {
                    diag = diag.with_fix(
                        format!("remove '{}'", removal.keyword),
                        removal.delete,
                        "",
                    );
                }
                diag
            }

            EraseError::OverloadedMethod {
                name,
                first,
                second,
            } => diag
                .with_message(format!(
                    "`@TypeErased` cannot erase overloaded method `{name}`"
                ))
                .with_label(*second, format!("`{name}` declared again here"))
                .with_secondary_label(*first, "first declared here")
                .with_note(format!(
                    "both methods would be stored in the property `_{name}`"
                ))
                .with_structured_suggestion(Suggestion::text(
                    "give each method a distinct base name",
                )),

            EraseError::GenericMethodNotSupported { name, span } => diag
                .with_message(format!("generic method `{name}` cannot be type-erased"))
                .with_label(*span, "declares its own generic parameters")
                .with_note("a stored closure cannot hold a generic function"),

            EraseError::VariadicParameterNotSupported {
                method,
                param,
                span,
            } => diag
                .with_message(format!(
                    "variadic parameter `{param}` of `{method}` cannot be forwarded"
                ))
                .with_label(*span, "variadic parameter")
                .with_suggestion("take an array `[T]` instead of `T...`"),

            EraseError::MutatingMethodNotSupported { name, span } => diag
                .with_message(format!("mutating method `{name}` cannot be type-erased"))
                .with_label(*span, "mutating requirement")
                .with_note("a mutating method cannot be stored as a closure of the wrapped value"),
        }
    }
}

fn article(keyword: &str) -> &'static str {
    match keyword.as_bytes().first() {
        Some(b'a' | b'e' | b'i' | b'o' | b'u') => "an",
        _ => "a",
    }
}

/// `span` widened over the spaces and tabs that follow it in `source`.
pub(crate) fn with_trailing_whitespace(span: Span, source: &str) -> Span {
    let start = span.end as usize;
    let Some(rest) = source.get(start..) else {
        return span;
    };
    let skipped = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    let skipped = u32::try_from(skipped).unwrap_or(0);
    Span::new(span.start, span.end + skipped)
}
