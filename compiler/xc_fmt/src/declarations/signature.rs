//! Generic clauses, parameter lists and inheritance.

use xc_ir::{GenericParam, Param, Requirement, StringLookup, TypeExpr};

use super::DeclPrinter;
use crate::emitter::Emitter;
use crate::keywords::escape_identifier;

impl<I: StringLookup> DeclPrinter<'_, I> {
    pub(super) fn print_generic_params(&mut self, generics: &[GenericParam]) {
        if generics.is_empty() {
            return;
        }
        let rendered: Vec<String> = generics
            .iter()
            .map(|param| {
                let name = self.name(param.name);
                if param.bounds.is_empty() {
                    name.to_string()
                } else {
                    let bounds: Vec<String> = param.bounds.iter().map(|b| self.ty(b)).collect();
                    format!("{name}: {}", bounds.join(" & "))
                }
            })
            .collect();
        self.out.emit(&format!("<{}>", rendered.join(", ")));
    }

    pub(super) fn print_params(&mut self, params: &[Param]) {
        let rendered: Vec<String> = params.iter().map(|p| self.param(p)).collect();
        self.out.emit(&format!("({})", rendered.join(", ")));
    }

    fn param(&self, param: &Param) -> String {
        let mut out = escape_identifier(self.name(param.first_name)).into_owned();
        if let Some(second) = param.second_name {
            out.push(' ');
            out.push_str(&escape_identifier(self.name(second)));
        }
        out.push_str(": ");
        out.push_str(&self.ty(&param.ty));
        if param.variadic {
            out.push_str("...");
        }
        if let Some(default) = param.default {
            out.push_str(" = ");
            out.push_str(self.name(default));
        }
        out
    }

    pub(super) fn print_inheritance(&mut self, inherited: &[TypeExpr]) {
        if inherited.is_empty() {
            return;
        }
        let rendered: Vec<String> = inherited.iter().map(|t| self.ty(t)).collect();
        self.out.emit(": ");
        self.out.emit(&rendered.join(", "));
    }

    pub(super) fn print_where(&mut self, requirements: &[Requirement]) {
        if requirements.is_empty() {
            return;
        }
        let rendered: Vec<String> = requirements
            .iter()
            .map(|req| match req {
                Requirement::Conformance { subject, bound } => {
                    format!("{}: {}", self.ty(subject), self.ty(bound))
                }
                Requirement::SameType { left, right } => {
                    format!("{} == {}", self.ty(left), self.ty(right))
                }
            })
            .collect();
        self.out.emit(" where ");
        self.out.emit(&rendered.join(", "));
    }
}
