//! Generic parameter clauses, inheritance clauses and `where` clauses.

use xc_ir::{GenericParam, Name, Requirement, TokenKind, TypeExpr};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `<T, U: Equatable & Hashable>`; empty when there is no clause.
    pub(crate) fn parse_generic_params(&mut self) -> Result<Vec<GenericParam>, ParseError> {
        if !self.cursor.check(TokenKind::Lt) {
            return Ok(Vec::new());
        }
        self.cursor.advance();
        let mut params = Vec::new();
        loop {
            // Parameter packs: `each T`.
            if matches!(self.cursor.current_kind(), TokenKind::Ident(n) if self.interner.lookup(n) == "each")
                && matches!(self.cursor.peek_kind(), TokenKind::Ident(_))
            {
                self.cursor.advance();
            }
            let (name, _) = self.ident()?;
            let bounds = if self.cursor.eat(TokenKind::Colon) {
                split_composition(self.parse_type()?)
            } else {
                Vec::new()
            };
            params.push(GenericParam { name, bounds });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Gt, "`>`")?;
        Ok(params)
    }

    /// Primary associated types of a protocol: `protocol Sequence<Element>`.
    pub(crate) fn parse_primary_associated_types(&mut self) -> Result<Vec<Name>, ParseError> {
        if !self.cursor.check(TokenKind::Lt) {
            return Ok(Vec::new());
        }
        self.cursor.advance();
        let mut names = Vec::new();
        loop {
            names.push(self.ident()?.0);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Gt, "`>`")?;
        Ok(names)
    }

    /// `: A, B & C`. The legacy `class` constraint is kept as a named type.
    pub(crate) fn parse_inheritance(&mut self) -> Result<Vec<TypeExpr>, ParseError> {
        if !self.cursor.eat(TokenKind::Colon) {
            return Ok(Vec::new());
        }
        let mut inherited = Vec::new();
        loop {
            if self.cursor.eat(TokenKind::Class) {
                inherited.push(TypeExpr::named(self.intern("class")));
            } else {
                inherited.push(self.parse_type()?);
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(inherited)
    }

    /// `where T: P, T.Element == U`; empty when there is no clause.
    pub(crate) fn parse_where_clause(&mut self) -> Result<Vec<Requirement>, ParseError> {
        if !self.cursor.eat(TokenKind::Where) {
            return Ok(Vec::new());
        }
        let mut requirements = Vec::new();
        loop {
            let subject = self.parse_type()?;
            let requirement = if self.cursor.eat(TokenKind::EqEq) {
                Requirement::SameType {
                    left: subject,
                    right: self.parse_type()?,
                }
            } else if self.cursor.eat(TokenKind::Colon) {
                Requirement::Conformance {
                    subject,
                    bound: self.parse_type()?,
                }
            } else {
                let token = self.cursor.current();
                return Err(ParseError::unexpected("`:` or `==`", token.kind, token.span));
            };
            requirements.push(requirement);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(requirements)
    }
}

/// `A & B` as a bound list.
fn split_composition(ty: TypeExpr) -> Vec<TypeExpr> {
    match ty {
        TypeExpr::Composition(parts) => parts,
        other => vec![other],
    }
}
