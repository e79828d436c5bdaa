//! Services a macro may use while it expands one declaration.

use xc_diagnostic::{Diagnostic, ErrorGuaranteed};
use xc_ir::{Name, Span, StringInterner};

/// What the host hands a macro for the duration of one expansion call.
pub trait MacroExpansionContext {
    fn interner(&self) -> &StringInterner;

    /// A name that cannot collide with anything the user wrote.
    ///
    /// Every call returns a new name; `seed` only makes it readable.
    fn fresh_name(&mut self, seed: &str) -> Name;

    /// Report an error and get the proof that one was reported.
    fn diagnose(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed;

    /// Span of the attribute that triggered the expansion.
    fn call_site(&self) -> Span;

    /// Source text the declaration was parsed from. Empty for synthesized
    /// declarations.
    fn source_text(&self) -> &str;
}

/// Context backed by a counter and a diagnostic buffer, scoped to one call.
pub struct BasicExpansionContext<'a> {
    interner: &'a StringInterner,
    source: &'a str,
    call_site: Span,
    next_fresh: u32,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> BasicExpansionContext<'a> {
    pub fn new(interner: &'a StringInterner, source: &'a str) -> Self {
        BasicExpansionContext {
            interner,
            source,
            call_site: Span::DUMMY,
            next_fresh: 0,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_call_site(mut self, span: Span) -> Self {
        self.call_site = span;
        self
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl MacroExpansionContext for BasicExpansionContext<'_> {
    fn interner(&self) -> &StringInterner {
        self.interner
    }

    /// Candidates spelled anywhere in the source are skipped.
    fn fresh_name(&mut self, seed: &str) -> Name {
        loop {
            let n = self.next_fresh;
            self.next_fresh += 1;
            let candidate = format!("__macro_local_{seed}{n}_");
            if !mentions_identifier(self.source, &candidate) {
                return self.interner.intern(&candidate);
            }
        }
    }

    fn diagnose(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        ErrorGuaranteed::emit(diagnostic, &mut self.diagnostics)
    }

    fn call_site(&self) -> Span {
        self.call_site
    }

    fn source_text(&self) -> &str {
        self.source
    }
}

/// `ident` occurs in `source` as a whole identifier.
fn mentions_identifier(source: &str, ident: &str) -> bool {
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';
    source.match_indices(ident).any(|(at, _)| {
        let before = source[..at].chars().next_back();
        let after = source[at + ident.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}
