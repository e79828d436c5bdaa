//! Type syntax.
//!
//! Types carry no spans: they are compared structurally (a forwarding
//! method must repeat its source signature exactly) and most of them are
//! synthesized.

use super::Attribute;
use crate::Name;

/// A type as written in source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// `Int`, `Array<T>`
    Named { name: Name, args: Vec<TypeExpr> },
    /// `C.Value`, `Swift.Result<T, E>`
    Member {
        base: Box<TypeExpr>,
        name: Name,
        args: Vec<TypeExpr>,
    },
    /// `T?`
    Optional(Box<TypeExpr>),
    /// `T!`
    ImplicitlyUnwrapped(Box<TypeExpr>),
    /// `[T]`
    Array(Box<TypeExpr>),
    /// `[K: V]`
    Dictionary {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `()`, `(Int, String)`, `(x: Int, y: Int)`
    Tuple(Vec<TupleElement>),
    /// `(A, B) async throws -> R`
    Function(FunctionType),
    /// `some P`
    Opaque(Box<TypeExpr>),
    /// `any P`
    Existential(Box<TypeExpr>),
    /// `A & B`
    Composition(Vec<TypeExpr>),
    /// `T.Type`, `P.Protocol`
    Metatype {
        base: Box<TypeExpr>,
        kind: MetatypeKind,
    },
    /// `inout T`, `@escaping () -> Void`
    Attributed {
        specifier: Option<Specifier>,
        attributes: Vec<Attribute>,
        base: Box<TypeExpr>,
    },
}

impl TypeExpr {
    /// Plain named type without generic arguments.
    #[inline]
    pub fn named(name: Name) -> Self {
        TypeExpr::Named {
            name,
            args: Vec::new(),
        }
    }

    /// `base.name`
    pub fn member(base: TypeExpr, name: Name) -> Self {
        TypeExpr::Member {
            base: Box::new(base),
            name,
            args: Vec::new(),
        }
    }

    /// Bounds joined into a single type: one bound stays as is, several
    /// become an `A & B` composition.
    pub fn compose(mut bounds: Vec<TypeExpr>) -> Option<Self> {
        match bounds.len() {
            0 => None,
            1 => bounds.pop(),
            _ => Some(TypeExpr::Composition(bounds)),
        }
    }

    /// Simple name if this is an unqualified, non-generic named type.
    pub fn as_simple_name(&self) -> Option<Name> {
        match self {
            TypeExpr::Named { name, args } if args.is_empty() => Some(*name),
            _ => None,
        }
    }

    /// Parameter specifier (`inout`, ...) if the type carries one.
    pub fn specifier(&self) -> Option<Specifier> {
        match self {
            TypeExpr::Attributed { specifier, .. } => *specifier,
            _ => None,
        }
    }
}

/// Element of a tuple type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleElement {
    pub label: Option<Name>,
    pub ty: TypeExpr,
}

impl TupleElement {
    pub fn unlabeled(ty: TypeExpr) -> Self {
        TupleElement { label: None, ty }
    }
}

/// Function type: positional parameter types, effects, result.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionType {
    pub params: Vec<TypeExpr>,
    pub effects: Effects,
    pub ret: Box<TypeExpr>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MetatypeKind {
    Type,
    Protocol,
}

impl MetatypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetatypeKind::Type => "Type",
            MetatypeKind::Protocol => "Protocol",
        }
    }
}

/// Ownership specifier written before a parameter type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Specifier {
    Inout,
    Borrowing,
    Consuming,
}

impl Specifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Specifier::Inout => "inout",
            Specifier::Borrowing => "borrowing",
            Specifier::Consuming => "consuming",
        }
    }

    pub fn from_ident(text: &str) -> Option<Self> {
        match text {
            "borrowing" => Some(Specifier::Borrowing),
            "consuming" => Some(Specifier::Consuming),
            _ => None,
        }
    }
}

/// Effect clause of a function or function type.
///
/// Swift fixes the order (`async` before `throws`), so only presence is kept.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Effects {
    pub is_async: bool,
    pub throws: Throws,
}

impl Effects {
    pub const NONE: Effects = Effects {
        is_async: false,
        throws: Throws::None,
    };

    #[inline]
    pub fn is_throwing(&self) -> bool {
        !matches!(self.throws, Throws::None)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.is_async && !self.is_throwing()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Throws {
    #[default]
    None,
    /// `throws`
    Untyped,
    /// `throws(E)`
    Typed(Box<TypeExpr>),
    /// `rethrows`
    Rethrows,
}
