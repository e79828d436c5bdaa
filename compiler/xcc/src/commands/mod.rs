//! Command handlers for the `xcc` CLI.
//!
//! Each submodule implements one command. Reading files, running the
//! expander over them in parallel and rendering diagnostics are shared and
//! live here.

use std::io::{IsTerminal, Write};

use rayon::prelude::*;
use xc_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, SourceContext, TerminalEmitter};
use xc_diagnostic::queue::{DiagnosticConfig, DiagnosticQueue};
use xc_diagnostic::Diagnostic;
use xc_expand::{expand_source_with, ExpansionOutput, MacroRegistry};
use xc_ir::StringInterner;

use crate::options::{Options, OutputFormat};
use crate::DriverError;

mod check;
mod expand;
mod explain;
mod fix;

pub use check::check_files;
pub use expand::expand_files;
pub use explain::{explain_error, explain_text};
pub use fix::{apply_fixes, fix_file, FixedFile};

/// One input file after expansion.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub source: String,
    pub output: ExpansionOutput,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        self.output.has_errors()
    }
}

/// Read a file, mapping I/O failures to [`DriverError`].
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::from_read(path, e))
}

/// Expand every file on the rayon pool, keeping input order.
///
/// All files share one interner; it is internally synchronized.
#[tracing::instrument(level = "debug", skip_all, fields(files = paths.len()))]
pub fn run_expansion(
    paths: &[String],
    registry: &MacroRegistry,
) -> Vec<Result<FileReport, DriverError>> {
    let interner = StringInterner::new();
    paths
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            let output = expand_source_with(&source, registry, &interner);
            tracing::debug!(
                path = path.as_str(),
                expanded = output.expanded,
                diagnostics = output.diagnostics.len(),
                "file expanded"
            );
            Ok(FileReport {
                path: path.clone(),
                source,
                output,
            })
        })
        .collect()
}

/// Sorted, deduplicated and limited diagnostics of one file.
pub fn queued(source: &str, diagnostics: &[Diagnostic], options: &Options) -> Vec<Diagnostic> {
    let mut queue = DiagnosticQueue::with_config(
        source,
        DiagnosticConfig {
            error_limit: options.error_limit,
            deduplicate: true,
        },
    );
    queue.extend(diagnostics.iter().cloned());
    queue.flush()
}

/// Counts of what was printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
}

impl Summary {
    fn add(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            if diag.is_error() {
                self.errors += 1;
            } else {
                self.warnings += 1;
            }
        }
    }
}

/// Print the diagnostics of several files in the chosen format.
///
/// Text goes to stderr with a final summary line; JSON goes to stdout as a
/// single array covering every file.
pub fn report_diagnostics<'a>(
    files: impl IntoIterator<Item = (&'a str, &'a str, &'a [Diagnostic])>,
    options: &Options,
) -> Summary {
    let mut summary = Summary::default();
    match options.format {
        OutputFormat::Text => {
            let is_tty = std::io::stderr().is_terminal();
            for (path, source, diagnostics) in files {
                let diagnostics = queued(source, diagnostics, options);
                if diagnostics.is_empty() {
                    continue;
                }
                summary.add(&diagnostics);
                let mut emitter = TerminalEmitter::stderr(options.color, is_tty)
                    .with_source(SourceContext::new(path, source));
                emitter.emit_all(&diagnostics);
                emitter.flush();
            }
            let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
            emitter.emit_summary(summary.errors, summary.warnings);
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut chunks = Vec::new();
            for (path, source, diagnostics) in files {
                let diagnostics = queued(source, diagnostics, options);
                if diagnostics.is_empty() {
                    continue;
                }
                summary.add(&diagnostics);
                let mut emitter =
                    JsonEmitter::new(Vec::new()).with_source(SourceContext::new(path, source));
                emitter.emit_all(&diagnostics);
                chunks.push(String::from_utf8_lossy(&emitter.into_inner()).into_owned());
            }
            let mut stdout = std::io::stdout().lock();
            let _ = writeln!(stdout, "{}", json_array(&chunks));
        }
    }
    summary
}

/// Join per-file JSON bodies into one array.
fn json_array(chunks: &[String]) -> String {
    if chunks.is_empty() {
        "[]".to_string()
    } else {
        format!("[\n{}\n]", chunks.join(",\n"))
    }
}

/// Print a driver failure.
pub fn report_driver_error(error: &DriverError) {
    eprintln!("error: {error}");
}
