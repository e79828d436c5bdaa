//! xc Printer
//!
//! Renders declarations, types and expressions back to canonical Swift
//! source: four-space indentation, one declaration per line, reserved
//! identifiers back-ticked.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`declarations`]: declaration printing and member layout
//! - `types`: type expressions and effect clauses
//! - `exprs`: expressions and statements

pub mod declarations;
pub mod emitter;
mod exprs;
mod keywords;
mod types;

pub use declarations::{format_decl, format_file, DeclPrinter};
pub use emitter::{Emitter, StringEmitter, INDENT_WIDTH};
pub use exprs::{format_expr, format_stmt};
pub use keywords::{escape_identifier, is_reserved};
pub use types::{format_effects, format_type};

/// Prefix every non-empty line of `text` with `indent`.
pub fn indent_lines(text: &str, indent: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str(indent);
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::indent_lines;

    #[test]
    fn indent_skips_empty_lines() {
        assert_eq!(
            indent_lines("struct S {\n\n    let x: Int\n}", "  "),
            "  struct S {\n\n      let x: Int\n  }"
        );
    }
}
