//! The `expand` command: print each file with its macros expanded.

use std::io::Write;

use xc_expand::MacroRegistry;

use super::{report_diagnostics, report_driver_error, run_expansion, FileReport};
use crate::options::Options;
use crate::DriverError;

/// Expand `options.files` and write the results to stdout.
///
/// With more than one file each output is preceded by a `==> path <==`
/// header. Returns `false` when any file failed to read or expand cleanly.
pub fn expand_files(options: &Options, registry: &MacroRegistry) -> Result<bool, DriverError> {
    if options.files.is_empty() {
        return Err(DriverError::MissingInput);
    }

    let mut ok = true;
    let mut reports = Vec::new();
    for result in run_expansion(&options.files, registry) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                report_driver_error(&e);
                ok = false;
            }
        }
    }

    let headers = options.files.len() > 1;
    let mut stdout = std::io::stdout().lock();
    for (i, report) in reports.iter().enumerate() {
        let _ = stdout.write_all(render(report, headers, i > 0).as_bytes());
    }
    let _ = stdout.flush();
    drop(stdout);

    let summary = report_diagnostics(
        reports.iter().map(|r| {
            (
                r.path.as_str(),
                r.source.as_str(),
                r.output.diagnostics.as_slice(),
            )
        }),
        options,
    );
    Ok(ok && summary.errors == 0)
}

/// Text printed for one file.
pub(super) fn render(report: &FileReport, header: bool, separated: bool) -> String {
    let mut out = String::new();
    if header {
        if separated {
            out.push('\n');
        }
        out.push_str("==> ");
        out.push_str(&report.path);
        out.push_str(" <==\n");
    }
    out.push_str(&report.output.text);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
