//! Text edits and fix-it application.
//!
//! Edits are accumulated in a [`ChangeTracker`] and applied from the end of
//! the file towards the start so earlier spans stay valid. The expansion host
//! uses the same machinery to splice generated peers into a file.

use xc_ir::Span;

use crate::Diagnostic;

/// Replace the text at `span` with `new_text`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEdit {
    /// Empty span for an insertion.
    pub span: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn replace(span: Span, new_text: impl Into<String>) -> Self {
        TextEdit {
            span,
            new_text: new_text.into(),
        }
    }

    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        TextEdit {
            span: Span::point(at),
            new_text: text.into(),
        }
    }

    pub fn delete(span: Span) -> Self {
        TextEdit {
            span,
            new_text: String::new(),
        }
    }

    pub fn is_insert(&self) -> bool {
        self.span.is_empty() && !self.new_text.is_empty()
    }

    pub fn is_delete(&self) -> bool {
        self.new_text.is_empty() && !self.span.is_empty()
    }
}

/// Two edits touch overlapping text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditConflict {
    pub first: TextEdit,
    pub second: TextEdit,
}

impl std::fmt::Display for EditConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "edits overlap: {:?} and {:?}",
            self.first.span, self.second.span
        )
    }
}

impl std::error::Error for EditConflict {}

/// Collects edits and applies them in one pass.
#[derive(Clone, Debug, Default)]
pub struct ChangeTracker {
    edits: Vec<TextEdit>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        ChangeTracker { edits: Vec::new() }
    }

    /// Every substitution of every machine-applicable fix-it in `diagnostics`.
    pub fn from_fixes<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Self {
        let mut tracker = ChangeTracker::new();
        for diag in diagnostics {
            for suggestion in diag.machine_applicable_fixes() {
                for sub in &suggestion.substitutions {
                    tracker.replace(sub.span, sub.snippet.clone());
                }
            }
        }
        tracker
    }

    pub fn replace(&mut self, span: Span, text: impl Into<String>) {
        self.edits.push(TextEdit::replace(span, text));
    }

    pub fn insert(&mut self, at: u32, text: impl Into<String>) {
        self.edits.push(TextEdit::insert(at, text));
    }

    pub fn delete(&mut self, span: Span) {
        self.edits.push(TextEdit::delete(span));
    }

    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// First pair of overlapping edits, if any. Insertions at the same
    /// point do not conflict.
    pub fn check_conflicts(&self) -> Option<EditConflict> {
        let mut sorted = self.edits.clone();
        sorted.sort_by_key(|e| (e.span.start, e.span.end));

        sorted.windows(2).find_map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            let overlaps = a.span.end > b.span.start;
            let same_delete = a == b && a.is_delete();
            (overlaps && !same_delete).then(|| EditConflict {
                first: a.clone(),
                second: b.clone(),
            })
        })
    }

    /// Apply all edits to `source`.
    ///
    /// Identical deletions are applied once; insertions at the same offset
    /// keep the order they were added in.
    pub fn apply(&self, source: &str) -> String {
        if self.edits.is_empty() {
            return source.to_string();
        }

        let mut indexed: Vec<(usize, &TextEdit)> = self.edits.iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| {
            b.span
                .start
                .cmp(&a.span.start)
                .then(b.span.end.cmp(&a.span.end))
                .then(ib.cmp(ia))
        });
        indexed.dedup_by(|(_, a), (_, b)| a == b && a.is_delete());

        let mut result = source.to_string();
        for (_, edit) in indexed {
            let start = (edit.span.start as usize).min(result.len());
            let end = (edit.span.end as usize).min(result.len()).max(start);
            if result.is_char_boundary(start) && result.is_char_boundary(end) {
                result.replace_range(start..end, &edit.new_text);
            }
        }
        result
    }

    /// Apply all edits, refusing overlapping ones.
    pub fn apply_checked(&self, source: &str) -> Result<String, EditConflict> {
        match self.check_conflicts() {
            Some(conflict) => Err(conflict),
            None => Ok(self.apply(source)),
        }
    }
}
