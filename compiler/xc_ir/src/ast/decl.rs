//! Declaration payloads.

use super::{Decl, Effects, FunctionBody, TupleElement, TypeExpr};
use crate::{Name, Span};

/// `protocol Name<Primary>: Inherited where ... { members }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProtocolDecl {
    pub name: Name,
    pub name_span: Span,
    pub primary_associated_types: Vec<Name>,
    pub inherited: Vec<TypeExpr>,
    pub where_clause: Vec<Requirement>,
    pub members: Vec<Decl>,
}

/// Body shared by `struct`, `class`, `enum` and `actor`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NominalDecl {
    pub name: Name,
    pub name_span: Span,
    pub generics: Vec<GenericParam>,
    pub inherited: Vec<TypeExpr>,
    pub where_clause: Vec<Requirement>,
    pub members: Vec<Decl>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExtensionDecl {
    pub extended: TypeExpr,
    pub inherited: Vec<TypeExpr>,
    pub where_clause: Vec<Requirement>,
    pub members: Vec<Decl>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncDecl {
    pub name: Name,
    pub name_span: Span,
    pub generics: Vec<GenericParam>,
    pub params: Vec<Param>,
    pub effects: Effects,
    /// `None` means the implicit `Void` result.
    pub ret: Option<TypeExpr>,
    pub where_clause: Vec<Requirement>,
    pub body: Option<FunctionBody>,
}

impl FuncDecl {
    #[inline]
    pub fn is_generic(&self) -> bool {
        !self.generics.is_empty()
    }
}

/// One function parameter: `first second: Type = default`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    /// External label, or `_`.
    pub first_name: Name,
    /// Internal name when it differs from the label.
    pub second_name: Option<Name>,
    pub ty: TypeExpr,
    pub variadic: bool,
    /// Default value source text.
    pub default: Option<Name>,
    pub span: Span,
}

impl Param {
    /// Name the parameter is bound to inside the body.
    #[inline]
    pub fn effective_name(&self) -> Name {
        self.second_name.unwrap_or(self.first_name)
    }
}

/// `T: A & B` in a generic parameter clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GenericParam {
    pub name: Name,
    pub bounds: Vec<TypeExpr>,
}

/// Entry of a `where` clause.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Requirement {
    /// `T: P`
    Conformance { subject: TypeExpr, bound: TypeExpr },
    /// `A == B`
    SameType { left: TypeExpr, right: TypeExpr },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub is_let: bool,
    pub name: Name,
    pub name_span: Span,
    pub ty: Option<TypeExpr>,
    /// Initializer expression source text.
    pub initializer: Option<Name>,
    /// `{ get set }` or a computed body, kept verbatim.
    pub accessors: Option<FunctionBody>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AssociatedTypeDecl {
    pub name: Name,
    pub name_span: Span,
    pub inherited: Vec<TypeExpr>,
    pub default: Option<TypeExpr>,
    pub where_clause: Vec<Requirement>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeAliasDecl {
    pub name: Name,
    pub name_span: Span,
    pub generics: Vec<GenericParam>,
    pub ty: TypeExpr,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Failability {
    /// `init?`
    Optional,
    /// `init!`
    ImplicitlyUnwrapped,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InitDecl {
    pub failability: Option<Failability>,
    pub generics: Vec<GenericParam>,
    pub params: Vec<Param>,
    pub effects: Effects,
    pub where_clause: Vec<Requirement>,
    pub body: Option<FunctionBody>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SubscriptDecl {
    pub generics: Vec<GenericParam>,
    pub params: Vec<Param>,
    pub ret: TypeExpr,
    pub where_clause: Vec<Requirement>,
    pub accessors: Option<FunctionBody>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImportDecl {
    pub path: Vec<Name>,
}

/// `case a, b(Int), c = "raw"`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumCaseDecl {
    pub elements: Vec<EnumCaseElement>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumCaseElement {
    pub name: Name,
    pub associated: Option<Vec<TupleElement>>,
    /// Raw value source text.
    pub raw_value: Option<Name>,
}
