//! The `check` command: report expansion diagnostics without printing code.

use xc_expand::MacroRegistry;

use super::{report_diagnostics, report_driver_error, run_expansion};
use crate::options::Options;
use crate::DriverError;

/// Expand `options.files` and report what went wrong, if anything.
pub fn check_files(options: &Options, registry: &MacroRegistry) -> Result<bool, DriverError> {
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

    let expanded: usize = reports.iter().map(|r| r.output.expanded).sum();
    tracing::debug!(files = reports.len(), expanded, "check finished");

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
