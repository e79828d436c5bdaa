use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("test error")
        .with_label(Span::new(0, 5), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert!(diag.labels[0].is_primary);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_span_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E2003)
        .with_secondary_label(Span::new(0, 3), "first declared here")
        .with_label(Span::new(10, 13), "redeclared here");
    assert_eq!(diag.primary_span(), Some(Span::new(10, 13)));
}

#[test]
fn test_machine_applicable_fixes() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_fix("remove 'static'", Span::new(4, 11), "")
        .with_structured_suggestion(Suggestion::maybe_incorrect(
            "rename",
            Span::new(0, 1),
            "x",
        ))
        .with_structured_suggestion(Suggestion::text("consider a factory protocol"));

    assert!(diag.has_machine_applicable_fix());
    let fixes: Vec<_> = diag.machine_applicable_fixes().collect();
    assert_eq!(fixes.len(), 1);
    assert_eq!(fixes[0].substitutions[0].span, Span::new(4, 11));
    assert!(diag.structured_suggestions[2].is_text_only());
}

#[test]
fn test_suggestion_with_substitution() {
    let suggestion = Suggestion::machine_applicable("fix", Span::new(0, 1), "a")
        .with_substitution(Span::new(5, 6), "b");
    assert_eq!(suggestion.substitutions.len(), 2);
    assert_eq!(suggestion.applicability.as_str(), "machine-applicable");
}

#[test]
fn test_diagnostic_display_format() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("test error")
        .with_label(Span::new(0, 5), "primary")
        .with_secondary_label(Span::new(10, 15), "secondary")
        .with_note("a note")
        .with_suggestion("a suggestion")
        .with_fix("remove it", Span::new(0, 5), "");

    let output = diag.to_string();
    assert!(output.contains("error [E2002]: test error"));
    assert!(output.contains("--> 0..5: primary"));
    assert!(output.contains("secondary"));
    assert!(output.contains("= note: a note"));
    assert!(output.contains("= help: a suggestion"));
    assert!(output.contains("= help: remove it"));
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E3001);
    assert!(!diag.is_error());
    assert_eq!(diag.severity.to_string(), "warning");
}
