//! Expansion host: runs registered peer macros over a source file and
//! splices their output into the text.
//!
//! For every top-level declaration carrying a registered attribute the host
//! removes the attribute, calls the macro, and inserts the printed peers
//! after the declaration, separated by a blank line and indented like the
//! declaration. A failed expansion still removes the attribute but inserts
//! nothing. Files with syntax errors are returned unchanged.

use xc_diagnostic::fixes::ChangeTracker;
use xc_diagnostic::{Diagnostic, ErrorCode};
use xc_fmt::{format_decl, indent_lines};
use xc_ir::{Attribute, Decl, DeclKind, Span, StringInterner};

use crate::context::BasicExpansionContext;
use crate::registry::MacroRegistry;

/// Expanded text plus everything reported on the way.
#[derive(Clone, Debug, Default)]
pub struct ExpansionOutput {
    pub text: String,
    /// Lexer, parser, macro and host diagnostics, in that order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of successful macro expansions.
    pub expanded: usize,
}

impl ExpansionOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Expand `source` with a private interner.
pub fn expand_source(source: &str, registry: &MacroRegistry) -> ExpansionOutput {
    let interner = StringInterner::new();
    expand_source_with(source, registry, &interner)
}

/// Expand `source`, interning into `interner`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn expand_source_with(
    source: &str,
    registry: &MacroRegistry,
    interner: &StringInterner,
) -> ExpansionOutput {
    let (file, diagnostics) = xc_parse::parse_source(source, interner);
    if diagnostics.iter().any(Diagnostic::is_error) {
        tracing::debug!(errors = diagnostics.len(), "syntax errors, nothing expanded");
        return ExpansionOutput {
            text: source.to_string(),
            diagnostics,
            expanded: 0,
        };
    }

    let mut host = Host {
        source,
        registry,
        interner,
        edits: ChangeTracker::new(),
        diagnostics,
        expanded: 0,
    };
    for decl in &file.decls {
        host.expand_decl(decl);
        host.reject_nested(decl);
    }

    let Host {
        edits,
        mut diagnostics,
        expanded,
        ..
    } = host;
    let text = match edits.apply_checked(source) {
        Ok(text) => text,
        Err(conflict) => {
            diagnostics.push(
                Diagnostic::error(ErrorCode::E9001)
                    .with_message(format!("generated edits overlap ({conflict})"))
                    .with_label(conflict.second.span, "second edit"),
            );
            source.to_string()
        }
    };
    tracing::debug!(expanded, edits = edits.len(), "expansion finished");
    ExpansionOutput {
        text,
        diagnostics,
        expanded,
    }
}

struct Host<'a> {
    source: &'a str,
    registry: &'a MacroRegistry,
    interner: &'a StringInterner,
    edits: ChangeTracker,
    diagnostics: Vec<Diagnostic>,
    expanded: usize,
}

impl Host<'_> {
    fn expand_decl(&mut self, decl: &Decl) {
        let mut peers = Vec::new();
        for attribute in &decl.attributes {
            let name = self.interner.lookup(attribute.name);
            let Some(mac) = self.registry.get(name) else {
                continue;
            };
            self.remove_attribute(attribute);

            if let Some(arguments) = attribute.arguments {
                let arguments = self.interner.lookup(arguments);
                self.diagnostics
                    .push(unexpected_arguments(name, attribute.span, arguments));
                continue;
            }

            let mut ctx = BasicExpansionContext::new(self.interner, self.source)
                .with_call_site(attribute.span);
            let result = mac.expansion(attribute, decl, &mut ctx);
            self.diagnostics.extend(ctx.into_diagnostics());
            let Ok(generated) = result else {
                tracing::debug!(name, "expansion failed");
                continue;
            };

            tracing::debug!(name, peers = generated.len(), "expanded");
            self.expanded += 1;
            peers.extend(generated.iter().map(|peer| format_decl(peer, self.interner)));
        }

        if !peers.is_empty() {
            let indent = line_indent(self.source, decl.span.start);
            let text: String = peers
                .iter()
                .map(|peer| format!("\n\n{}", indent_lines(peer, indent)))
                .collect();
            self.edits.insert(decl.span.end, text);
        }
    }

    /// Registered attributes below the top level are reported and removed.
    fn reject_nested(&mut self, decl: &Decl) {
        let members = match &decl.kind {
            DeclKind::Protocol(protocol) => &protocol.members,
            DeclKind::Struct(nominal)
            | DeclKind::Class(nominal)
            | DeclKind::Enum(nominal)
            | DeclKind::Actor(nominal) => &nominal.members,
            DeclKind::Extension(extension) => &extension.members,
            _ => return,
        };
        for member in members {
            for attribute in &member.attributes {
                let name = self.interner.lookup(attribute.name);
                if self.registry.contains(name) {
                    self.remove_attribute(attribute);
                    self.diagnostics.push(nested_attachment(name, attribute.span));
                }
            }
            self.reject_nested(member);
        }
    }

    fn remove_attribute(&mut self, attribute: &Attribute) {
        self.edits
            .delete(with_trailing_whitespace(attribute.span, self.source));
    }
}

fn unexpected_arguments(name: &str, span: Span, arguments: &str) -> Diagnostic {
    let len = u32::try_from(arguments.len()).unwrap_or(0);
    let arguments_span = Span::new(span.end.saturating_sub(len).max(span.start), span.end);
    Diagnostic::error(ErrorCode::E3002)
        .with_message(format!("`@{name}` takes no arguments"))
        .with_label(arguments_span, "unexpected arguments")
        .with_fix("remove the arguments", arguments_span, "")
}

fn nested_attachment(name: &str, span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E3001)
        .with_message(format!("`@{name}` can only expand top-level declarations"))
        .with_label(span, "attached to a nested declaration")
        .with_suggestion("move the declaration to the top level of the file")
}

/// `span` plus all whitespace after it, newlines included.
fn with_trailing_whitespace(span: Span, source: &str) -> Span {
    let Some(rest) = source.get(span.end as usize..) else {
        return span;
    };
    let skipped = rest.len() - rest.trim_start().len();
    Span::new(span.start, span.end + u32::try_from(skipped).unwrap_or(0))
}

/// Leading whitespace of the line containing `offset`.
fn line_indent(source: &str, offset: u32) -> &str {
    let before = source.get(..offset as usize).unwrap_or(source);
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}
