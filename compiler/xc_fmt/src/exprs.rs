//! Expression and statement printing.

use xc_ir::{Expr, Stmt, StringLookup};

use crate::keywords::escape_identifier;

pub fn format_expr<I: StringLookup>(expr: &Expr, interner: &I) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, interner);
    out
}

pub fn format_stmt<I: StringLookup>(stmt: &Stmt, interner: &I) -> String {
    match stmt {
        Stmt::Expr(expr) => format_expr(expr, interner),
        Stmt::Assign { target, value } => {
            format!(
                "{} = {}",
                format_expr(target, interner),
                format_expr(value, interner)
            )
        }
    }
}

fn write_expr<I: StringLookup>(out: &mut String, expr: &Expr, interner: &I) {
    match expr {
        Expr::Ident(name) => out.push_str(&escape_identifier(interner.lookup(*name))),
        Expr::Member { base, name } => {
            write_expr(out, base, interner);
            out.push('.');
            out.push_str(&escape_identifier(interner.lookup(*name)));
        }
        Expr::Call { callee, args } => {
            write_expr(out, callee, interner);
            out.push('(');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if let Some(label) = arg.label {
                    out.push_str(interner.lookup(label));
                    out.push_str(": ");
                }
                write_expr(out, &arg.value, interner);
            }
            out.push(')');
        }
        Expr::InOut(inner) => {
            out.push('&');
            write_expr(out, inner, interner);
        }
        Expr::Try(inner) => {
            out.push_str("try ");
            write_expr(out, inner, interner);
        }
        Expr::Await(inner) => {
            out.push_str("await ");
            write_expr(out, inner, interner);
        }
    }
}
