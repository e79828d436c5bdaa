//! Expressions and statements.
//!
//! Only the shapes the expander generates are modelled. Bodies read from
//! source are kept verbatim and never parsed.

use crate::Name;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    Ident(Name),
    /// `base.name`
    Member { base: Box<Expr>, name: Name },
    /// `callee(args)`
    Call { callee: Box<Expr>, args: Vec<Argument> },
    /// `&expr`
    InOut(Box<Expr>),
    /// `try expr`
    Try(Box<Expr>),
    /// `await expr`
    Await(Box<Expr>),
}

impl Expr {
    pub fn member(base: Expr, name: Name) -> Self {
        Expr::Member {
            base: Box::new(base),
            name,
        }
    }

    pub fn call(callee: Expr, args: Vec<Argument>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Argument {
    pub label: Option<Name>,
    pub value: Expr,
}

impl Argument {
    pub fn positional(value: Expr) -> Self {
        Argument { label: None, value }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    Expr(Expr),
    /// `target = value`
    Assign { target: Expr, value: Expr },
}

/// Body of a function, initializer or accessor block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionBody {
    /// Source text including the braces, kept as written.
    Verbatim(Name),
    /// Generated statements.
    Block(Vec<Stmt>),
}
