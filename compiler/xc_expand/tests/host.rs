//! Expansion host behaviour on whole files.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use xc_diagnostic::fixes::ChangeTracker;
use xc_diagnostic::ErrorCode;
use xc_expand::{expand_source, ExpansionOutput, MacroRegistry};

fn run(source: &str) -> ExpansionOutput {
    expand_source(source, &MacroRegistry::with_builtins())
}

fn codes(output: &ExpansionOutput) -> Vec<ErrorCode> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn surrounding_code_is_left_alone() {
    let source = "\
import Foundation

/// Writes lines somewhere.
@TypeErased
public protocol Sink {
    func write(_ line: String)
}

struct Console: Sink {
    func write(_ line: String) { Swift.print(line) }
}
";
    let output = run(source);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(
        output.text,
        "\
import Foundation

/// Writes lines somewhere.
public protocol Sink {
    func write(_ line: String)
}

public struct AnySink: Sink {
    private let _write: (String) -> Void

    public init<__macro_local_C0_: Sink>(_ sink: __macro_local_C0_) {
        _write = sink.write
    }

    public func write(_ line: String) {
        _write(line)
    }
}

struct Console: Sink {
    func write(_ line: String) { Swift.print(line) }
}
"
    );
}

#[test]
fn every_annotated_protocol_gets_its_own_wrapper() {
    let source = "\
@TypeErased
protocol A { func a() }
protocol B { func b() }
@TypeErased
protocol C { func c() }
";
    let output = run(source);
    assert_eq!(output.expanded, 2);
    assert!(output.text.contains("struct AnyA: A {"));
    assert!(!output.text.contains("AnyB"));
    assert!(output.text.contains("struct AnyC: C {"));
    assert_eq!(output.text.matches("__macro_local_C0_: ").count(), 2);
    assert!(!output.text.contains('@'));
}

#[test]
fn wrappers_follow_the_declaration_indentation() {
    let source = "\
#if DEBUG
    @TypeErased
    protocol Probe {
        func ping()
    }
#endif
";
    assert_eq!(
        run(source).text,
        "\
#if DEBUG
    protocol Probe {
        func ping()
    }

    struct AnyProbe: Probe {
        private let _ping: () -> Void

        init<__macro_local_C0_: Probe>(_ probe: __macro_local_C0_) {
            _ping = probe.ping
        }

        func ping() {
            _ping()
        }
    }
#endif
"
    );
}

#[test]
fn other_attributes_stay() {
    let source = "@available(macOS 13, *)\n@TypeErased\nprotocol P { func f() }\n";
    let output = run(source);
    assert!(output
        .text
        .starts_with("@available(macOS 13, *)\nprotocol P { func f() }\n\nstruct AnyP: P {\n"));
}

#[test]
fn failed_expansion_removes_only_the_attribute() {
    let source = "\
@TypeErased
protocol Maker {
    static func make()
    func run()
}
";
    let output = run(source);
    assert_eq!(codes(&output), vec![ErrorCode::E2002]);
    assert_eq!(output.expanded, 0);
    assert_eq!(
        output.text,
        "protocol Maker {\n    static func make()\n    func run()\n}\n"
    );
}

#[test]
fn fixes_make_the_protocol_expandable() {
    let source = "\
@TypeErased
protocol Maker {
    static func make()
    func run()
}
";
    let first = run(source);
    let fixed = ChangeTracker::from_fixes(&first.diagnostics).apply(source);
    assert_eq!(
        fixed,
        "@TypeErased\nprotocol Maker {\n    func make()\n    func run()\n}\n"
    );

    let second = run(&fixed);
    assert!(second.diagnostics.is_empty());
    assert!(second.text.contains("    private let _make: () -> Void\n    private let _run: () -> Void\n"));
}

#[test]
fn non_protocols_are_reported() {
    let output = run("@TypeErased\nstruct Printer {}\n");
    assert_eq!(codes(&output), vec![ErrorCode::E2001]);
    assert_eq!(output.text, "struct Printer {}\n");
}

#[test]
fn nested_attachments_are_reported() {
    let source = "\
enum Namespace {
    @TypeErased
    protocol Printer {
        func print()
    }
}
";
    let output = run(source);
    assert_eq!(codes(&output), vec![ErrorCode::E3001]);
    assert_eq!(output.expanded, 0);
    assert_eq!(
        output.text,
        "enum Namespace {\n    protocol Printer {\n        func print()\n    }\n}\n"
    );
}

#[test]
fn arguments_are_rejected() {
    let source = "@TypeErased(name: \"Printer\")\nprotocol Printer { func print() }\n";
    let output = run(source);
    assert_eq!(codes(&output), vec![ErrorCode::E3002]);
    assert_eq!(output.text, "protocol Printer { func print() }\n");

    let fixed = ChangeTracker::from_fixes(&output.diagnostics).apply(source);
    assert_eq!(fixed, "@TypeErased\nprotocol Printer { func print() }\n");
}

#[test]
fn syntax_errors_leave_the_file_unchanged() {
    let source = "@TypeErased\nprotocol Printer {\n    func print(\n}\n";
    let output = run(source);
    assert!(output.has_errors());
    assert_eq!(output.text, source);
    assert!(output
        .diagnostics
        .iter()
        .all(|d| d.code.as_str().starts_with("E1") || d.code.as_str().starts_with("E0")));
}

#[test]
fn files_without_macros_round_trip() {
    let source = "struct S {\n    let x: Int\n}\n";
    let output = run(source);
    assert_eq!(output.text, source);
    assert_eq!(output.expanded, 0);
    assert!(!output.has_errors());
}

#[test]
fn unknown_registry_expands_nothing() {
    let source = "@TypeErased\nprotocol P { func f() }\n";
    let output = expand_source(source, &MacroRegistry::new());
    assert_eq!(output.text, source);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn positional_names_avoid_declared_parameters() {
    let output = run("@TypeErased\nprotocol P {\n    func f(_: Int, arg0: Int)\n}\n");
    assert!(output.diagnostics.is_empty());
    assert!(
        output
            .text
            .contains("    func f(_ arg0_1: Int, arg0: Int) {\n        _f(arg0_1, arg0)\n    }"),
        "{}",
        output.text
    );
}

#[test]
fn mutating_requirements_are_reported() {
    let source = "@TypeErased\nprotocol Counter {\n    mutating func increment()\n}\n";
    let output = run(source);
    assert_eq!(codes(&output), vec![ErrorCode::E2006]);
    assert_eq!(output.expanded, 0);
    assert_eq!(output.text, "protocol Counter {\n    mutating func increment()\n}\n");
}
