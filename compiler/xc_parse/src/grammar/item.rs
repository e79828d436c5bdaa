//! Declaration forms.

use xc_ir::{
    AssociatedTypeDecl, EnumCaseDecl, EnumCaseElement, ExtensionDecl, Failability, FuncDecl,
    FunctionBody, ImportDecl, InitDecl, Name, NominalDecl, Param, ProtocolDecl, Span,
    SubscriptDecl, TokenKind, TupleElement, TypeAliasDecl, VarDecl,
};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_protocol(&mut self) -> Result<ProtocolDecl, ParseError> {
        self.cursor.advance();
        let (name, name_span) = self.ident()?;
        let primary_associated_types = self.parse_primary_associated_types()?;
        let inherited = self.parse_inheritance()?;
        let where_clause = self.parse_where_clause()?;
        let members = self.parse_member_block()?;
        Ok(ProtocolDecl {
            name,
            name_span,
            primary_associated_types,
            inherited,
            where_clause,
            members,
        })
    }

    /// `struct`, `class`, `enum` and `actor` share one shape.
    pub(crate) fn parse_nominal(&mut self) -> Result<NominalDecl, ParseError> {
        self.cursor.advance();
        let (name, name_span) = self.ident()?;
        let generics = self.parse_generic_params()?;
        let inherited = self.parse_inheritance()?;
        let where_clause = self.parse_where_clause()?;
        let members = self.parse_member_block()?;
        Ok(NominalDecl {
            name,
            name_span,
            generics,
            inherited,
            where_clause,
            members,
        })
    }

    pub(crate) fn parse_extension(&mut self) -> Result<ExtensionDecl, ParseError> {
        self.cursor.advance();
        let extended = self.parse_type()?;
        let inherited = self.parse_inheritance()?;
        let where_clause = self.parse_where_clause()?;
        let members = self.parse_member_block()?;
        Ok(ExtensionDecl {
            extended,
            inherited,
            where_clause,
            members,
        })
    }

    pub(crate) fn parse_func(&mut self) -> Result<FuncDecl, ParseError> {
        self.cursor.advance();
        let (name, name_span) = self.parse_func_name()?;
        let generics = self.parse_generic_params()?;
        let params = self.parse_params()?;
        let effects = self.parse_effects()?;
        let ret = if self.cursor.eat(TokenKind::Arrow) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let where_clause = self.parse_where_clause()?;
        let body = self.parse_body()?;
        Ok(FuncDecl {
            name,
            name_span,
            generics,
            params,
            effects,
            ret,
            where_clause,
            body,
        })
    }

    /// A plain name, any keyword, or an operator spelled by adjacent
    /// operator tokens (`==`, `<=`, `+`).
    fn parse_func_name(&mut self) -> Result<(Name, Span), ParseError> {
        let token = self.cursor.current();
        if is_operator_piece(token.kind) {
            let mut span = token.span;
            self.cursor.advance();
            while is_operator_piece(self.cursor.current_kind()) && self.cursor.current_span().start == span.end {
                span = span.merge(self.cursor.advance().span);
            }
            return Ok((self.intern_span(span), span));
        }
        self.label()
            .ok_or_else(|| ParseError::expected_identifier(token.kind, token.span))
    }

    /// `(label name: Type = default, ...)`.
    pub(crate) fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) && !self.cursor.is_at_end() {
            params.push(self.parse_param()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(TokenKind::RParen) {
            let token = self.cursor.current();
            if token.kind == TokenKind::Eof {
                return Err(ParseError::unclosed(open, token.span, '('));
            }
            return Err(ParseError::unexpected("`,` or `)`", token.kind, token.span));
        }
        Ok(params)
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let start = self.cursor.current_span();
        let token = self.cursor.current();
        let Some((first_name, _)) = self.label() else {
            return Err(ParseError::expected_identifier(token.kind, token.span));
        };
        let second_name = if self.cursor.check(TokenKind::Colon) {
            None
        } else {
            let token = self.cursor.current();
            match self.label() {
                Some((name, _)) => Some(name),
                None => return Err(ParseError::unexpected("`:`", token.kind, token.span)),
            }
        };
        self.expect(TokenKind::Colon, "`:`")?;
        let ty = self.parse_type()?;
        let variadic = self.cursor.eat(TokenKind::Ellipsis);
        let default = if self.cursor.eat(TokenKind::Eq) {
            self.skip_expression(true)?.map(|span| self.intern_span(span))
        } else {
            None
        };
        Ok(Param {
            first_name,
            second_name,
            ty,
            variadic,
            default,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// Optional `{ ... }` body, kept verbatim.
    fn parse_body(&mut self) -> Result<Option<FunctionBody>, ParseError> {
        if !self.cursor.check(TokenKind::LBrace) {
            return Ok(None);
        }
        let span = self.skip_balanced()?;
        Ok(Some(FunctionBody::Verbatim(self.intern_span(span))))
    }

    pub(crate) fn parse_var(&mut self) -> Result<VarDecl, ParseError> {
        let is_let = self.cursor.advance().kind == TokenKind::Let;
        let (name, name_span) = self.ident()?;
        let ty = if self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let initializer = if self.cursor.eat(TokenKind::Eq) {
            self.skip_expression(false)?.map(|span| self.intern_span(span))
        } else {
            None
        };
        let accessors = self.parse_body()?;
        Ok(VarDecl {
            is_let,
            name,
            name_span,
            ty,
            initializer,
            accessors,
        })
    }

    pub(crate) fn parse_associated_type(&mut self) -> Result<AssociatedTypeDecl, ParseError> {
        self.cursor.advance();
        let (name, name_span) = self.ident()?;
        let inherited = self.parse_inheritance()?;
        let default = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let where_clause = self.parse_where_clause()?;
        Ok(AssociatedTypeDecl {
            name,
            name_span,
            inherited,
            default,
            where_clause,
        })
    }

    pub(crate) fn parse_typealias(&mut self) -> Result<TypeAliasDecl, ParseError> {
        self.cursor.advance();
        let (name, name_span) = self.ident()?;
        let generics = self.parse_generic_params()?;
        self.expect(TokenKind::Eq, "`=`")?;
        let ty = self.parse_type()?;
        Ok(TypeAliasDecl {
            name,
            name_span,
            generics,
            ty,
        })
    }

    pub(crate) fn parse_init(&mut self) -> Result<InitDecl, ParseError> {
        self.cursor.advance();
        let failability = match self.cursor.current_kind() {
            TokenKind::Question => Some(Failability::Optional),
            TokenKind::Bang => Some(Failability::ImplicitlyUnwrapped),
            _ => None,
        };
        if failability.is_some() {
            self.cursor.advance();
        }
        let generics = self.parse_generic_params()?;
        let params = self.parse_params()?;
        let effects = self.parse_effects()?;
        let where_clause = self.parse_where_clause()?;
        let body = self.parse_body()?;
        Ok(InitDecl {
            failability,
            generics,
            params,
            effects,
            where_clause,
            body,
        })
    }

    pub(crate) fn parse_subscript(&mut self) -> Result<SubscriptDecl, ParseError> {
        self.cursor.advance();
        let generics = self.parse_generic_params()?;
        let params = self.parse_params()?;
        self.expect(TokenKind::Arrow, "`->`")?;
        let ret = self.parse_type()?;
        let where_clause = self.parse_where_clause()?;
        let accessors = self.parse_body()?;
        Ok(SubscriptDecl {
            generics,
            params,
            ret,
            where_clause,
            accessors,
        })
    }

    /// `case a, b(Int), c = 1`.
    pub(crate) fn parse_enum_case(&mut self) -> Result<EnumCaseDecl, ParseError> {
        self.cursor.advance();
        let mut elements = Vec::new();
        loop {
            let token = self.cursor.current();
            let Some((name, _)) = self.label() else {
                return Err(ParseError::expected_identifier(token.kind, token.span));
            };
            let associated = if self.cursor.check(TokenKind::LParen) {
                Some(self.parse_case_payload()?)
            } else {
                None
            };
            let raw_value = if self.cursor.eat(TokenKind::Eq) {
                self.skip_expression(true)?.map(|span| self.intern_span(span))
            } else {
                None
            };
            elements.push(EnumCaseElement {
                name,
                associated,
                raw_value,
            });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(EnumCaseDecl { elements })
    }

    /// Associated values reuse the tuple-element grammar.
    fn parse_case_payload(&mut self) -> Result<Vec<TupleElement>, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let mut elements = Vec::new();
        while !self.cursor.check(TokenKind::RParen) && !self.cursor.is_at_end() {
            let current = self.cursor.current_kind();
            let label = if self.is_label(current) && self.cursor.peek_kind() == TokenKind::Colon {
                let label = self.label().map(|(name, _)| name);
                self.cursor.advance();
                label
            } else {
                None
            };
            let ty = self.parse_type()?;
            if self.cursor.eat(TokenKind::Eq) {
                self.skip_expression(true)?;
            }
            elements.push(TupleElement { label, ty });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        if !self.cursor.eat(TokenKind::RParen) {
            return Err(ParseError::unclosed(open, self.cursor.current_span(), '('));
        }
        Ok(elements)
    }

    /// `import Foundation`, `import struct Foo.Bar`, `@testable import X`.
    pub(crate) fn parse_import(&mut self) -> Result<ImportDecl, ParseError> {
        self.cursor.advance();
        if matches!(
            self.cursor.current_kind(),
            TokenKind::Struct
                | TokenKind::Class
                | TokenKind::Enum
                | TokenKind::Protocol
                | TokenKind::Func
                | TokenKind::Var
                | TokenKind::Let
                | TokenKind::TypeAlias
        ) {
            self.cursor.advance();
        }
        let mut path = vec![self.ident()?.0];
        while self.cursor.eat(TokenKind::Dot) {
            let token = self.cursor.current();
            let Some((name, _)) = self.label() else {
                return Err(ParseError::expected_identifier(token.kind, token.span));
            };
            path.push(name);
        }
        Ok(ImportDecl { path })
    }
}

fn is_operator_piece(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Operator
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::EqEq
            | TokenKind::Bang
            | TokenKind::Amp
            | TokenKind::Question
            | TokenKind::Dot
            | TokenKind::Ellipsis
    )
}
