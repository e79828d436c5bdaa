//! Syntax tree for the declaration subset of Swift.
//!
//! Declarations are a tagged variant ([`DeclKind`]) wrapped in a [`Decl`]
//! that carries what every declaration can have: attributes, modifiers and a
//! span. Consumers match on the kind once and never downcast.

mod decl;
mod expr;
mod ty;

pub use decl::{
    AssociatedTypeDecl, EnumCaseDecl, EnumCaseElement, ExtensionDecl, Failability, FuncDecl,
    GenericParam, ImportDecl, InitDecl, NominalDecl, Param, ProtocolDecl, Requirement,
    SubscriptDecl, TypeAliasDecl, VarDecl,
};
pub use expr::{Argument, Expr, FunctionBody, Stmt};
pub use ty::{
    Effects, FunctionType, MetatypeKind, Specifier, Throws, TupleElement, TypeExpr,
};

use crate::{Name, Span};

/// A parsed source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SourceFile {
    pub decls: Vec<Decl>,
}

/// `@Name` or `@Name(arguments)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub name: Name,
    /// Argument list source text including the parentheses.
    pub arguments: Option<Name>,
    pub span: Span,
}

impl Attribute {
    pub fn new(name: Name) -> Self {
        Attribute {
            name,
            arguments: None,
            span: Span::DUMMY,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Modifier {
    Static,
    Class,
    Mutating,
    Nonmutating,
    Public,
    Private,
    Fileprivate,
    Internal,
    Package,
    Open,
    Final,
    Override,
    Convenience,
    Required,
    Nonisolated,
    Lazy,
    Weak,
    Unowned,
    Dynamic,
    Optional,
    Indirect,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Static => "static",
            Modifier::Class => "class",
            Modifier::Mutating => "mutating",
            Modifier::Nonmutating => "nonmutating",
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Fileprivate => "fileprivate",
            Modifier::Internal => "internal",
            Modifier::Package => "package",
            Modifier::Open => "open",
            Modifier::Final => "final",
            Modifier::Override => "override",
            Modifier::Convenience => "convenience",
            Modifier::Required => "required",
            Modifier::Nonisolated => "nonisolated",
            Modifier::Lazy => "lazy",
            Modifier::Weak => "weak",
            Modifier::Unowned => "unowned",
            Modifier::Dynamic => "dynamic",
            Modifier::Optional => "optional",
            Modifier::Indirect => "indirect",
        }
    }

    /// Modifiers Swift spells as plain identifiers.
    pub fn from_contextual(text: &str) -> Option<Self> {
        match text {
            "convenience" => Some(Modifier::Convenience),
            "required" => Some(Modifier::Required),
            "nonisolated" => Some(Modifier::Nonisolated),
            "lazy" => Some(Modifier::Lazy),
            "weak" => Some(Modifier::Weak),
            "unowned" => Some(Modifier::Unowned),
            "dynamic" => Some(Modifier::Dynamic),
            "optional" => Some(Modifier::Optional),
            "indirect" => Some(Modifier::Indirect),
            _ => None,
        }
    }

    /// True for `static` and `class`: the member belongs to the type, not
    /// to instances.
    #[inline]
    pub fn is_type_level(self) -> bool {
        matches!(self, Modifier::Static | Modifier::Class)
    }

    pub fn access_level(self) -> Option<AccessLevel> {
        match self {
            Modifier::Private => Some(AccessLevel::Private),
            Modifier::Fileprivate => Some(AccessLevel::Fileprivate),
            Modifier::Internal => Some(AccessLevel::Internal),
            Modifier::Package => Some(AccessLevel::Package),
            Modifier::Public => Some(AccessLevel::Public),
            Modifier::Open => Some(AccessLevel::Open),
            _ => None,
        }
    }
}

/// A modifier as written, e.g. `private(set)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeclModifier {
    pub kind: Modifier,
    /// Parenthesized detail such as `set` in `private(set)`.
    pub detail: Option<Name>,
    pub span: Span,
}

impl DeclModifier {
    pub fn new(kind: Modifier) -> Self {
        DeclModifier {
            kind,
            detail: None,
            span: Span::DUMMY,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AccessLevel {
    Private,
    Fileprivate,
    Internal,
    Package,
    Public,
    Open,
}

impl AccessLevel {
    pub fn modifier(self) -> Modifier {
        match self {
            AccessLevel::Private => Modifier::Private,
            AccessLevel::Fileprivate => Modifier::Fileprivate,
            AccessLevel::Internal => Modifier::Internal,
            AccessLevel::Package => Modifier::Package,
            AccessLevel::Public => Modifier::Public,
            AccessLevel::Open => Modifier::Open,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    Protocol(ProtocolDecl),
    Struct(NominalDecl),
    Class(NominalDecl),
    Enum(NominalDecl),
    Actor(NominalDecl),
    Extension(ExtensionDecl),
    Func(FuncDecl),
    Var(VarDecl),
    AssociatedType(AssociatedTypeDecl),
    TypeAlias(TypeAliasDecl),
    Init(InitDecl),
    Subscript(SubscriptDecl),
    EnumCase(EnumCaseDecl),
    Import(ImportDecl),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Decl {
    pub attributes: Vec<Attribute>,
    pub modifiers: Vec<DeclModifier>,
    pub kind: DeclKind,
    /// From the first attribute or modifier to the end of the declaration.
    pub span: Span,
}

impl Decl {
    /// Declaration without attributes or modifiers.
    pub fn new(kind: DeclKind) -> Self {
        Decl {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            kind,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(DeclModifier::new(modifier));
        self
    }

    /// Keyword that introduces this kind of declaration.
    pub fn keyword(&self) -> &'static str {
        match &self.kind {
            DeclKind::Protocol(_) => "protocol",
            DeclKind::Struct(_) => "struct",
            DeclKind::Class(_) => "class",
            DeclKind::Enum(_) => "enum",
            DeclKind::Actor(_) => "actor",
            DeclKind::Extension(_) => "extension",
            DeclKind::Func(_) => "func",
            DeclKind::Var(v) => {
                if v.is_let {
                    "let"
                } else {
                    "var"
                }
            }
            DeclKind::AssociatedType(_) => "associatedtype",
            DeclKind::TypeAlias(_) => "typealias",
            DeclKind::Init(_) => "init",
            DeclKind::Subscript(_) => "subscript",
            DeclKind::EnumCase(_) => "case",
            DeclKind::Import(_) => "import",
        }
    }

    /// Declared name, for declarations that have one.
    pub fn name(&self) -> Option<Name> {
        match &self.kind {
            DeclKind::Protocol(p) => Some(p.name),
            DeclKind::Struct(n) | DeclKind::Class(n) | DeclKind::Enum(n) | DeclKind::Actor(n) => {
                Some(n.name)
            }
            DeclKind::Func(f) => Some(f.name),
            DeclKind::Var(v) => Some(v.name),
            DeclKind::AssociatedType(a) => Some(a.name),
            DeclKind::TypeAlias(t) => Some(t.name),
            DeclKind::Extension(_)
            | DeclKind::Init(_)
            | DeclKind::Subscript(_)
            | DeclKind::EnumCase(_)
            | DeclKind::Import(_) => None,
        }
    }

    /// Span of the declared name, or of the whole declaration.
    pub fn name_span(&self) -> Span {
        match &self.kind {
            DeclKind::Protocol(p) => p.name_span,
            DeclKind::Struct(n) | DeclKind::Class(n) | DeclKind::Enum(n) | DeclKind::Actor(n) => {
                n.name_span
            }
            DeclKind::Func(f) => f.name_span,
            DeclKind::Var(v) => v.name_span,
            DeclKind::AssociatedType(a) => a.name_span,
            DeclKind::TypeAlias(t) => t.name_span,
            _ => self.span,
        }
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.iter().any(|m| m.kind == modifier)
    }

    /// First `static` or `class` modifier.
    pub fn type_level_modifier(&self) -> Option<&DeclModifier> {
        self.modifiers.iter().find(|m| m.kind.is_type_level())
    }

    /// Explicit access level; `private(set)` style setter restrictions are
    /// not the declaration's own access level and are skipped.
    pub fn access_level(&self) -> Option<AccessLevel> {
        self.modifiers
            .iter()
            .filter(|m| m.detail.is_none())
            .find_map(|m| m.kind.access_level())
    }

    pub fn attribute(&self, name: Name) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests;
