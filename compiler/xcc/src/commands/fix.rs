//! The `fix` command: apply machine-applicable fix-its.

use std::io::Write;

use xc_diagnostic::fixes::ChangeTracker;
use xc_expand::{expand_source, MacroRegistry};

use super::{report_diagnostics, report_driver_error, run_expansion};
use crate::options::Options;
use crate::DriverError;

/// A source file with its fix-its applied.
pub struct FixedFile {
    pub path: String,
    pub text: String,
    pub edits: usize,
}

/// Apply the fix-its of one expansion to its source.
///
/// Overlapping fix-its abort the whole file; nothing is applied.
pub fn apply_fixes(
    path: &str,
    source: &str,
    diagnostics: &[xc_diagnostic::Diagnostic],
) -> Result<FixedFile, DriverError> {
    let tracker = ChangeTracker::from_fixes(diagnostics);
    let text = tracker.apply_checked(source)?;
    Ok(FixedFile {
        path: path.to_string(),
        text,
        edits: tracker.len(),
    })
}

/// Fix every file in `options.files`.
///
/// Without `--write` the fixed sources go to stdout. Diagnostics that remain
/// after fixing are reported; returns `false` if any are errors.
pub fn fix_file(options: &Options, registry: &MacroRegistry) -> Result<bool, DriverError> {
    if options.files.is_empty() {
        return Err(DriverError::MissingInput);
    }

    let mut ok = true;
    let mut fixed = Vec::new();
    for result in run_expansion(&options.files, registry) {
        let outcome = result.and_then(|report| {
            apply_fixes(&report.path, &report.source, &report.output.diagnostics)
        });
        match outcome {
            Ok(file) => fixed.push(file),
            Err(e) => {
                report_driver_error(&e);
                ok = false;
            }
        }
    }

    let headers = options.files.len() > 1;
    let mut stdout = std::io::stdout().lock();
    for (i, file) in fixed.iter().enumerate() {
        tracing::debug!(path = file.path.as_str(), edits = file.edits, "fix-its applied");
        if options.write {
            if file.edits > 0 {
                std::fs::write(&file.path, &file.text).map_err(|source| DriverError::Write {
                    path: file.path.clone(),
                    source,
                })?;
                eprintln!("fixed {} ({} edit{})", file.path, file.edits, plural_s(file.edits));
            }
        } else {
            if headers {
                if i > 0 {
                    let _ = writeln!(stdout);
                }
                let _ = writeln!(stdout, "==> {} <==", file.path);
            }
            let _ = stdout.write_all(file.text.as_bytes());
        }
    }
    let _ = stdout.flush();
    drop(stdout);

    let remaining: Vec<_> = fixed
        .iter()
        .map(|file| expand_source(&file.text, registry).diagnostics)
        .collect();
    let summary = report_diagnostics(
        fixed
            .iter()
            .zip(&remaining)
            .map(|(file, diags)| (file.path.as_str(), file.text.as_str(), diags.as_slice())),
        options,
    );
    Ok(ok && summary.errors == 0)
}

fn plural_s(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_modifiers_are_removed() {
        let source = "@TypeErased\nprotocol Maker {\n    static func make()\n}\n";
        let registry = MacroRegistry::with_builtins();
        let output = expand_source(source, &registry);
        let file = apply_fixes("maker.swift", source, &output.diagnostics).unwrap();
        assert_eq!(file.edits, 1);
        assert_eq!(
            file.text,
            "@TypeErased\nprotocol Maker {\n    func make()\n}\n"
        );
    }

    #[test]
    fn clean_files_are_untouched() {
        let source = "@TypeErased\nprotocol Ping {\n    func ping()\n}\n";
        let registry = MacroRegistry::with_builtins();
        let output = expand_source(source, &registry);
        let file = apply_fixes("ping.swift", source, &output.diagnostics).unwrap();
        assert_eq!(file.edits, 0);
        assert_eq!(file.text, source);
    }
}
