//! Driver commands run against files on disk.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use xc_expand::MacroRegistry;
use xcc::commands::{check_files, expand_files, fix_file};
use xcc::{parse_options, DriverError, OutputFormat};

fn scratch(test: &str, name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("xcc-driver-{}-{test}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn fix_writes_files_in_place() {
    let path = scratch(
        "fix",
        "maker.swift",
        "@TypeErased\nprotocol Maker {\n    static func make()\n    func run()\n}\n",
    );
    let path_str = path.to_string_lossy().into_owned();
    let options = parse_options(&args(&["--write", "--color=never", &path_str])).unwrap();

    let ok = fix_file(&options, &MacroRegistry::with_builtins()).unwrap();
    assert!(ok);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "@TypeErased\nprotocol Maker {\n    func make()\n    func run()\n}\n"
    );
}

#[test]
fn check_fails_on_expansion_errors() {
    let bad = scratch("check", "bad.swift", "@TypeErased\nstruct NotAProtocol {}\n");
    let good = scratch("check", "good.swift", "@TypeErased\nprotocol Ok {\n    func ok()\n}\n");
    let registry = MacroRegistry::with_builtins();

    let options = parse_options(&args(&["--format=json", &good.to_string_lossy()])).unwrap();
    assert_eq!(options.format, OutputFormat::Json);
    assert!(check_files(&options, &registry).unwrap());

    let options = parse_options(&args(&[
        "--format=json",
        &good.to_string_lossy(),
        &bad.to_string_lossy(),
    ]))
    .unwrap();
    assert!(!check_files(&options, &registry).unwrap());
}

#[test]
fn unreadable_inputs_fail_the_run() {
    let options = parse_options(&args(&["--color=never", "/no/such/file.swift"])).unwrap();
    assert!(!expand_files(&options, &MacroRegistry::with_builtins()).unwrap());
}

#[test]
fn commands_need_files() {
    let options = parse_options(&[]).unwrap();
    let err = expand_files(&options, &MacroRegistry::with_builtins()).unwrap_err();
    assert!(matches!(err, DriverError::MissingInput));
}
