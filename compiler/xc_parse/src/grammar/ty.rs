//! Type grammar.
//!
//! ```text
//! type        = specifier? attribute* bare
//! bare        = "some" composition | "any" composition
//!             | "(" elements ")" effects "->" type
//!             | composition
//! composition = postfix ("&" postfix)*
//! postfix     = primary ("?" | "!" | ".Type" | ".Protocol" | "." name args?)*
//! primary     = name args? | "[" type "]" | "[" type ":" type "]" | "(" elements ")"
//! ```

use xc_ir::{
    Attribute, Effects, FunctionType, MetatypeKind, Specifier, Throws, TokenKind, TupleElement,
    TypeExpr,
};

use crate::{ParseError, Parser};

/// A primary before postfix operators: either a finished type or a
/// parenthesized list that may still turn out to be a parameter list.
enum Primary {
    Type(TypeExpr),
    Parens(Vec<TupleElement>),
}

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let specifier = self.parse_specifier();
        let attributes = self.parse_type_attributes()?;
        let base = self.parse_bare_type()?;
        if specifier.is_none() && attributes.is_empty() {
            Ok(base)
        } else {
            Ok(TypeExpr::Attributed {
                specifier,
                attributes,
                base: Box::new(base),
            })
        }
    }

    fn parse_specifier(&mut self) -> Option<Specifier> {
        match self.cursor.current_kind() {
            TokenKind::Inout => {
                self.cursor.advance();
                Some(Specifier::Inout)
            }
            TokenKind::Ident(name) if starts_type(self.cursor.peek_kind()) => {
                let specifier = Specifier::from_ident(self.interner.lookup(name))?;
                self.cursor.advance();
                Some(specifier)
            }
            _ => None,
        }
    }

    fn parse_type_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        if self.cursor.check(TokenKind::At) {
            self.parse_attributes()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_bare_type(&mut self) -> Result<TypeExpr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Some => {
                self.cursor.advance();
                Ok(TypeExpr::Opaque(Box::new(self.parse_composition()?)))
            }
            TokenKind::Any => {
                self.cursor.advance();
                Ok(TypeExpr::Existential(Box::new(self.parse_composition()?)))
            }
            _ => {
                let primary = self.parse_primary()?;
                if let Primary::Parens(elements) = &primary {
                    if matches!(
                        self.cursor.current_kind(),
                        TokenKind::Async | TokenKind::Throws | TokenKind::Rethrows | TokenKind::Arrow
                    ) {
                        let params = elements.iter().map(|e| e.ty.clone()).collect();
                        return self.parse_function_rest(params);
                    }
                }
                let first = self.parse_postfix(primary)?;
                self.parse_composition_rest(first)
            }
        }
    }

    fn parse_composition(&mut self) -> Result<TypeExpr, ParseError> {
        let primary = self.parse_primary()?;
        let first = self.parse_postfix(primary)?;
        self.parse_composition_rest(first)
    }

    fn parse_composition_rest(&mut self, first: TypeExpr) -> Result<TypeExpr, ParseError> {
        if !self.cursor.check(TokenKind::Amp) {
            return Ok(first);
        }
        let mut parts = vec![first];
        while self.cursor.eat(TokenKind::Amp) {
            let primary = self.parse_primary()?;
            parts.push(self.parse_postfix(primary)?);
        }
        Ok(TypeExpr::Composition(parts))
    }

    /// Effects and result of a function type whose parameters were parsed.
    fn parse_function_rest(&mut self, params: Vec<TypeExpr>) -> Result<TypeExpr, ParseError> {
        let effects = self.parse_effects()?;
        self.expect(TokenKind::Arrow, "`->`")?;
        let ret = self.parse_type()?;
        Ok(TypeExpr::Function(FunctionType {
            params,
            effects,
            ret: Box::new(ret),
        }))
    }

    /// `async`, `throws`, `throws(E)`, `rethrows`, in that order.
    pub(crate) fn parse_effects(&mut self) -> Result<Effects, ParseError> {
        let is_async = self.cursor.eat(TokenKind::Async);
        let throws = match self.cursor.current_kind() {
            TokenKind::Throws => {
                self.cursor.advance();
                if self.cursor.check(TokenKind::LParen) {
                    self.cursor.advance();
                    let error = self.parse_type()?;
                    self.expect(TokenKind::RParen, "`)`")?;
                    Throws::Typed(Box::new(error))
                } else {
                    Throws::Untyped
                }
            }
            TokenKind::Rethrows => {
                self.cursor.advance();
                Throws::Rethrows
            }
            _ => Throws::None,
        };
        if !is_async && throws != Throws::None && self.cursor.check(TokenKind::Async) {
            let token = self.cursor.current();
            return Err(ParseError::unexpected("`->`", token.kind, token.span)
                .with_hint("`async` must precede `throws`"));
        }
        Ok(Effects { is_async, throws })
    }

    fn parse_primary(&mut self) -> Result<Primary, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Ident(name) => {
                self.cursor.advance();
                let args = self.parse_generic_args()?;
                Ok(Primary::Type(TypeExpr::Named { name, args }))
            }
            TokenKind::LBracket => {
                self.cursor.advance();
                let element = self.parse_type()?;
                let ty = if self.cursor.eat(TokenKind::Colon) {
                    let value = self.parse_type()?;
                    TypeExpr::Dictionary {
                        key: Box::new(element),
                        value: Box::new(value),
                    }
                } else {
                    TypeExpr::Array(Box::new(element))
                };
                if !self.cursor.eat(TokenKind::RBracket) {
                    return Err(ParseError::unclosed(token.span, self.cursor.current_span(), '['));
                }
                Ok(Primary::Type(ty))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let mut elements = Vec::new();
                while !self.cursor.check(TokenKind::RParen) {
                    elements.push(self.parse_tuple_element()?);
                    if !self.cursor.eat(TokenKind::Comma) {
                        break;
                    }
                }
                if !self.cursor.eat(TokenKind::RParen) {
                    return Err(ParseError::unclosed(token.span, self.cursor.current_span(), '('));
                }
                Ok(Primary::Parens(elements))
            }
            kind => Err(ParseError::expected_type(kind, token.span)),
        }
    }

    /// `label: T`, `_ name: T` (function-type parameter names) or `T`.
    fn parse_tuple_element(&mut self) -> Result<TupleElement, ParseError> {
        let current = self.cursor.current_kind();
        let next = self.cursor.peek_kind();
        let label = if self.is_label(current) && next == TokenKind::Colon {
            let label = self.label().map(|(name, _)| name);
            self.cursor.advance();
            label
        } else if self.is_label(current) && self.is_label(next) && self.cursor.nth(2).kind == TokenKind::Colon {
            self.cursor.advance();
            let label = self.label().map(|(name, _)| name);
            self.cursor.advance();
            label
        } else {
            None
        };
        let ty = self.parse_type()?;
        self.cursor.eat(TokenKind::Ellipsis);
        Ok(TupleElement { label, ty })
    }

    /// `<A, B>` directly after a type name.
    fn parse_generic_args(&mut self) -> Result<Vec<TypeExpr>, ParseError> {
        if !self.cursor.check(TokenKind::Lt) {
            return Ok(Vec::new());
        }
        self.cursor.advance();
        let mut args = Vec::new();
        loop {
            args.push(self.parse_type()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Gt, "`>`")?;
        Ok(args)
    }

    fn parse_postfix(&mut self, primary: Primary) -> Result<TypeExpr, ParseError> {
        let mut ty = match primary {
            Primary::Type(ty) => ty,
            Primary::Parens(mut elements) => {
                if elements.len() == 1 && elements[0].label.is_none() {
                    elements.remove(0).ty
                } else {
                    TypeExpr::Tuple(elements)
                }
            }
        };
        loop {
            match self.cursor.current_kind() {
                TokenKind::Question => {
                    self.cursor.advance();
                    ty = TypeExpr::Optional(Box::new(ty));
                }
                TokenKind::Bang => {
                    self.cursor.advance();
                    ty = TypeExpr::ImplicitlyUnwrapped(Box::new(ty));
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let token = self.cursor.current();
                    let metatype = match token.kind {
                        TokenKind::Protocol => Some(MetatypeKind::Protocol),
                        TokenKind::Ident(name) if self.interner.lookup(name) == "Type" => {
                            Some(MetatypeKind::Type)
                        }
                        _ => None,
                    };
                    if let Some(kind) = metatype {
                        self.cursor.advance();
                        ty = TypeExpr::Metatype {
                            base: Box::new(ty),
                            kind,
                        };
                        continue;
                    }
                    let Some((name, _)) = self.label() else {
                        return Err(ParseError::expected_identifier(token.kind, token.span));
                    };
                    let args = self.parse_generic_args()?;
                    ty = TypeExpr::Member {
                        base: Box::new(ty),
                        name,
                        args,
                    };
                }
                _ => return Ok(ty),
            }
        }
    }
}

fn starts_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident(_)
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::At
            | TokenKind::Some
            | TokenKind::Any
    )
}
