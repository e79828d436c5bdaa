//! Grammar productions.
//!
//! - `mod.rs`: declaration lists, attributes, modifiers and dispatch
//! - `item.rs`: the individual declaration forms
//! - `generics.rs`: generic parameter, inheritance and `where` clauses
//! - `ty.rs`: the type grammar

mod generics;
mod item;
mod ty;

use xc_ir::{Attribute, Decl, DeclKind, DeclModifier, Modifier, TokenKind};

use crate::recovery::is_decl_start;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse declarations until `}` (inside a body) or end of file.
    pub(crate) fn parse_decl_list(&mut self, in_body: bool) -> Vec<Decl> {
        let mut decls = Vec::new();
        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof => break,
                TokenKind::RBrace if in_body => break,
                TokenKind::RBrace => {
                    let token = self.cursor.advance();
                    self.errors
                        .push(ParseError::expected_declaration(token.kind, token.span));
                }
                TokenKind::Semicolon => {
                    self.cursor.advance();
                }
                TokenKind::Hash => self.skip_directive(),
                _ => match self.parse_decl() {
                    Ok(decl) => decls.push(decl),
                    Err(error) => {
                        tracing::trace!(code = %error.code, span = ?error.span, "recovering");
                        self.errors.push(error);
                        self.synchronize();
                    }
                },
            }
        }
        decls
    }

    /// `{ decls }`, returning the members and the span of the braces.
    pub(crate) fn parse_member_block(&mut self) -> Result<Vec<Decl>, ParseError> {
        let open = self.expect(TokenKind::LBrace, "`{`")?;
        let members = self.parse_decl_list(true);
        if self.cursor.eat(TokenKind::RBrace) {
            Ok(members)
        } else {
            Err(ParseError::unclosed(open, self.cursor.current_span(), '{'))
        }
    }

    pub(crate) fn parse_decl(&mut self) -> Result<Decl, ParseError> {
        let start = self.cursor.current_span();
        let attributes = self.parse_attributes()?;
        let modifiers = self.parse_modifiers();

        let token = self.cursor.current();
        let kind = match token.kind {
            TokenKind::Protocol => DeclKind::Protocol(self.parse_protocol()?),
            TokenKind::Struct => DeclKind::Struct(self.parse_nominal()?),
            TokenKind::Class => DeclKind::Class(self.parse_nominal()?),
            TokenKind::Enum => DeclKind::Enum(self.parse_nominal()?),
            TokenKind::Actor => DeclKind::Actor(self.parse_nominal()?),
            TokenKind::Extension => DeclKind::Extension(self.parse_extension()?),
            TokenKind::Func => DeclKind::Func(self.parse_func()?),
            TokenKind::Var | TokenKind::Let => DeclKind::Var(self.parse_var()?),
            TokenKind::AssociatedType => DeclKind::AssociatedType(self.parse_associated_type()?),
            TokenKind::TypeAlias => DeclKind::TypeAlias(self.parse_typealias()?),
            TokenKind::Init => DeclKind::Init(self.parse_init()?),
            TokenKind::Subscript => DeclKind::Subscript(self.parse_subscript()?),
            TokenKind::Case => DeclKind::EnumCase(self.parse_enum_case()?),
            TokenKind::Import => DeclKind::Import(self.parse_import()?),
            kind => return Err(ParseError::expected_declaration(kind, token.span)),
        };

        Ok(Decl {
            attributes,
            modifiers,
            kind,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// `@Name` or `@Name(arguments)`; the argument list must touch the name.
    pub(crate) fn parse_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = Vec::new();
        while self.cursor.check(TokenKind::At) {
            let at = self.cursor.advance().span;
            let Some((name, name_span)) = self.label() else {
                let token = self.cursor.current();
                return Err(ParseError::expected_identifier(token.kind, token.span));
            };
            let mut span = at.merge(name_span);
            let mut arguments = None;
            if self.cursor.check(TokenKind::LParen) && self.cursor.current_span().start == name_span.end {
                let args = self.skip_balanced()?;
                arguments = Some(self.intern_span(args));
                span = span.merge(args);
            }
            attributes.push(Attribute {
                name,
                arguments,
                span,
            });
        }
        Ok(attributes)
    }

    fn parse_modifiers(&mut self) -> Vec<DeclModifier> {
        let mut modifiers = Vec::new();
        while let Some(kind) = self.modifier_at_cursor() {
            let span = self.cursor.advance().span;
            let mut modifier = DeclModifier {
                kind,
                detail: None,
                span,
            };
            // `private(set)`, `unowned(safe)`
            if self.cursor.check(TokenKind::LParen)
                && matches!(self.cursor.peek_kind(), TokenKind::Ident(_))
                && self.cursor.nth(2).kind == TokenKind::RParen
            {
                self.cursor.advance();
                if let TokenKind::Ident(detail) = self.cursor.advance().kind {
                    modifier.detail = Some(detail);
                }
                modifier.span = span.merge(self.cursor.advance().span);
            }
            modifiers.push(modifier);
        }
        modifiers
    }

    fn modifier_at_cursor(&self) -> Option<Modifier> {
        let next = self.cursor.peek_kind();
        let modifier = match self.cursor.current_kind() {
            TokenKind::Static => Modifier::Static,
            TokenKind::Mutating => Modifier::Mutating,
            TokenKind::Nonmutating => Modifier::Nonmutating,
            TokenKind::Public => Modifier::Public,
            TokenKind::Private => Modifier::Private,
            TokenKind::Fileprivate => Modifier::Fileprivate,
            TokenKind::Internal => Modifier::Internal,
            TokenKind::Package => Modifier::Package,
            TokenKind::Open => Modifier::Open,
            TokenKind::Final => Modifier::Final,
            TokenKind::Override => Modifier::Override,
            // `class func` / `class var`, as opposed to `class Name`.
            TokenKind::Class if is_decl_start(next) && next != TokenKind::At => Modifier::Class,
            TokenKind::Ident(name)
                if is_decl_start(next) || matches!(next, TokenKind::Ident(_) | TokenKind::LParen) =>
            {
                Modifier::from_contextual(self.interner.lookup(name))?
            }
            _ => return None,
        };
        Some(modifier)
    }
}
