//! Declaration printing.
//!
//! Members are indented one level per nesting depth and separated by a
//! blank line, except runs of compact declarations of the same kind
//! (stored properties, associated types, cases, type aliases, imports and
//! body-less requirements) which stay on consecutive lines. Verbatim bodies
//! are reproduced exactly as they were parsed.

mod signature;

use xc_ir::{
    Attribute, Decl, DeclKind, FunctionBody, SourceFile, StringLookup, TypeExpr,
};

use crate::emitter::{Emitter, StringEmitter};
use crate::exprs::format_stmt;
use crate::keywords::escape_identifier;
use crate::types::{format_effects, format_type};

/// Print one declaration without a trailing newline.
pub fn format_decl<I: StringLookup>(decl: &Decl, interner: &I) -> String {
    let mut printer = DeclPrinter::new(interner);
    printer.print_decl(decl);
    printer.finish()
}

/// Print a whole file, ending with a newline.
pub fn format_file<I: StringLookup>(file: &SourceFile, interner: &I) -> String {
    let mut printer = DeclPrinter::new(interner);
    printer.print_decls(&file.decls);
    let mut out = printer.finish();
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Stateful printer tracking the current nesting level.
pub struct DeclPrinter<'a, I: StringLookup> {
    interner: &'a I,
    out: StringEmitter,
    level: usize,
}

impl<'a, I: StringLookup> DeclPrinter<'a, I> {
    pub fn new(interner: &'a I) -> Self {
        DeclPrinter {
            interner,
            out: StringEmitter::new(),
            level: 0,
        }
    }

    pub fn finish(mut self) -> String {
        self.out.trim_trailing_blank_lines();
        self.out.output()
    }

    fn name(&self, name: xc_ir::Name) -> &'a str {
        self.interner.lookup(name)
    }

    fn ty(&self, ty: &TypeExpr) -> String {
        format_type(ty, self.interner)
    }

    /// Declarations at the current level, one per line with layout blank lines.
    pub fn print_decls(&mut self, decls: &[Decl]) {
        let mut previous: Option<&Decl> = None;
        for decl in decls {
            if let Some(prev) = previous {
                self.out.emit_newline();
                if !groups_with(prev, decl) {
                    self.out.emit_newline();
                }
            }
            self.print_decl(decl);
            previous = Some(decl);
        }
    }

    pub fn print_decl(&mut self, decl: &Decl) {
        self.out.emit_indent(self.level);
        self.print_attributes(&decl.attributes, opens_type_body(&decl.kind));
        for modifier in &decl.modifiers {
            self.out.emit(modifier.kind.as_str());
            if let Some(detail) = modifier.detail {
                self.out.emit("(");
                self.out.emit(self.name(detail));
                self.out.emit(")");
            }
            self.out.emit_space();
        }
        self.out.emit(decl.keyword());

        match &decl.kind {
            DeclKind::Protocol(protocol) => {
                self.out.emit_space();
                self.out.emit(&escape_identifier(self.name(protocol.name)));
                if !protocol.primary_associated_types.is_empty() {
                    let names: Vec<&str> = protocol
                        .primary_associated_types
                        .iter()
                        .map(|n| self.name(*n))
                        .collect();
                    self.out.emit(&format!("<{}>", names.join(", ")));
                }
                self.print_inheritance(&protocol.inherited);
                self.print_where(&protocol.where_clause);
                self.print_member_block(&protocol.members);
            }
            DeclKind::Struct(nominal)
            | DeclKind::Class(nominal)
            | DeclKind::Enum(nominal)
            | DeclKind::Actor(nominal) => {
                self.out.emit_space();
                self.out.emit(&escape_identifier(self.name(nominal.name)));
                self.print_generic_params(&nominal.generics);
                self.print_inheritance(&nominal.inherited);
                self.print_where(&nominal.where_clause);
                self.print_member_block(&nominal.members);
            }
            DeclKind::Extension(extension) => {
                self.out.emit_space();
                self.out.emit(&self.ty(&extension.extended));
                self.print_inheritance(&extension.inherited);
                self.print_where(&extension.where_clause);
                self.print_member_block(&extension.members);
            }
            DeclKind::Func(func) => {
                self.out.emit_space();
                let name = self.name(func.name);
                self.out.emit(&escape_identifier(name));
                if name.starts_with(|c: char| !c.is_alphanumeric() && c != '_' && c != '$') {
                    self.out.emit_space();
                }
                self.print_generic_params(&func.generics);
                self.print_params(&func.params);
                self.out.emit(&format_effects(&func.effects, self.interner));
                if let Some(ret) = &func.ret {
                    self.out.emit(" -> ");
                    self.out.emit(&self.ty(ret));
                }
                self.print_where(&func.where_clause);
                self.print_body(func.body.as_ref());
            }
            DeclKind::Var(var) => {
                self.out.emit_space();
                self.out.emit(&escape_identifier(self.name(var.name)));
                if let Some(ty) = &var.ty {
                    self.out.emit(": ");
                    self.out.emit(&self.ty(ty));
                }
                if let Some(init) = var.initializer {
                    self.out.emit(" = ");
                    self.out.emit(self.name(init));
                }
                self.print_body(var.accessors.as_ref());
            }
            DeclKind::AssociatedType(assoc) => {
                self.out.emit_space();
                self.out.emit(self.name(assoc.name));
                self.print_inheritance(&assoc.inherited);
                if let Some(default) = &assoc.default {
                    self.out.emit(" = ");
                    self.out.emit(&self.ty(default));
                }
                self.print_where(&assoc.where_clause);
            }
            DeclKind::TypeAlias(alias) => {
                self.out.emit_space();
                self.out.emit(self.name(alias.name));
                self.print_generic_params(&alias.generics);
                self.out.emit(" = ");
                self.out.emit(&self.ty(&alias.ty));
            }
            DeclKind::Init(init) => {
                match init.failability {
                    Some(xc_ir::Failability::Optional) => self.out.emit("?"),
                    Some(xc_ir::Failability::ImplicitlyUnwrapped) => self.out.emit("!"),
                    None => {}
                }
                self.print_generic_params(&init.generics);
                self.print_params(&init.params);
                self.out.emit(&format_effects(&init.effects, self.interner));
                self.print_where(&init.where_clause);
                self.print_body(init.body.as_ref());
            }
            DeclKind::Subscript(subscript) => {
                self.print_generic_params(&subscript.generics);
                self.print_params(&subscript.params);
                self.out.emit(" -> ");
                self.out.emit(&self.ty(&subscript.ret));
                self.print_where(&subscript.where_clause);
                self.print_body(subscript.accessors.as_ref());
            }
            DeclKind::EnumCase(case) => {
                self.out.emit_space();
                for (i, element) in case.elements.iter().enumerate() {
                    if i > 0 {
                        self.out.emit(", ");
                    }
                    self.out.emit(&escape_identifier(self.name(element.name)));
                    if let Some(associated) = &element.associated {
                        let mut tuple = String::new();
                        crate::types::write_tuple(&mut tuple, associated, self.interner);
                        self.out.emit(&tuple);
                    }
                    if let Some(raw) = element.raw_value {
                        self.out.emit(" = ");
                        self.out.emit(self.name(raw));
                    }
                }
            }
            DeclKind::Import(import) => {
                self.out.emit_space();
                let path: Vec<&str> = import.path.iter().map(|n| self.name(*n)).collect();
                self.out.emit(&path.join("."));
            }
        }
    }

    /// Type-like declarations put each attribute on its own line.
    fn print_attributes(&mut self, attributes: &[Attribute], own_lines: bool) {
        for attribute in attributes {
            self.out.emit("@");
            self.out.emit(self.name(attribute.name));
            if let Some(arguments) = attribute.arguments {
                self.out.emit(self.name(arguments));
            }
            if own_lines {
                self.out.emit_newline();
                self.out.emit_indent(self.level);
            } else {
                self.out.emit_space();
            }
        }
    }

    fn print_member_block(&mut self, members: &[Decl]) {
        if members.is_empty() {
            self.out.emit(" {}");
            return;
        }
        self.out.emit(" {");
        self.out.emit_newline();
        self.level += 1;
        self.print_decls(members);
        self.level -= 1;
        self.out.emit_newline();
        self.out.emit_indent(self.level);
        self.out.emit("}");
    }

    fn print_body(&mut self, body: Option<&FunctionBody>) {
        match body {
            None => {}
            Some(FunctionBody::Verbatim(text)) => {
                self.out.emit_space();
                self.out.emit(self.name(*text));
            }
            Some(FunctionBody::Block(stmts)) if stmts.is_empty() => self.out.emit(" {}"),
            Some(FunctionBody::Block(stmts)) => {
                self.out.emit(" {");
                self.out.emit_newline();
                for stmt in stmts {
                    self.out.emit_indent(self.level + 1);
                    self.out.emit(&format_stmt(stmt, self.interner));
                    self.out.emit_newline();
                }
                self.out.emit_indent(self.level);
                self.out.emit("}");
            }
        }
    }
}

fn opens_type_body(kind: &DeclKind) -> bool {
    matches!(
        kind,
        DeclKind::Protocol(_)
            | DeclKind::Struct(_)
            | DeclKind::Class(_)
            | DeclKind::Enum(_)
            | DeclKind::Actor(_)
            | DeclKind::Extension(_)
    )
}

/// Compact declarations of the same kind share a block without blank lines.
fn groups_with(previous: &Decl, current: &Decl) -> bool {
    let compact = |decl: &Decl| match &decl.kind {
        DeclKind::Var(var) => var.accessors.is_none(),
        DeclKind::Func(func) => func.body.is_none(),
        DeclKind::AssociatedType(_)
        | DeclKind::EnumCase(_)
        | DeclKind::TypeAlias(_)
        | DeclKind::Import(_) => true,
        _ => false,
    };
    compact(previous)
        && compact(current)
        && std::mem::discriminant(&previous.kind) == std::mem::discriminant(&current.kind)
}

#[cfg(test)]
mod tests;
