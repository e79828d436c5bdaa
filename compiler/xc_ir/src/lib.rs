//! xc IR - syntax representation for the xcoders macro expander.
//!
//! This crate contains the data structures every other stage shares:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The declaration/type/expression syntax tree
//!
//! # Design
//!
//! - **Intern Everything**: identifiers and verbatim source snippets become
//!   `Name(u32)`, so syntax nodes compare and hash cheaply.
//! - **Tagged variants**: declarations and types are enums matched
//!   exhaustively; there is no dynamic node casting.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    AccessLevel, Argument, AssociatedTypeDecl, Attribute, Decl, DeclKind, DeclModifier, Effects,
    EnumCaseDecl, EnumCaseElement, Expr, ExtensionDecl, Failability, FuncDecl, FunctionBody,
    FunctionType, GenericParam, ImportDecl, InitDecl, MetatypeKind, Modifier, NominalDecl, Param,
    ProtocolDecl, Requirement, SourceFile, Specifier, Stmt, SubscriptDecl, Throws, TupleElement,
    TypeAliasDecl, TypeExpr, VarDecl,
};
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
