//! Command-line flags shared by the `expand`, `check` and `fix` commands.

use xc_diagnostic::emitter::ColorMode;

use crate::DriverError;

/// How diagnostics are printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, with source snippets.
    #[default]
    Text,
    /// One JSON array on stdout.
    Json,
}

impl OutputFormat {
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub files: Vec<String>,
    pub format: OutputFormat,
    pub color: ColorMode,
    /// Errors reported per file before giving up; 0 means no limit.
    pub error_limit: usize,
    /// `fix` writes files in place instead of printing them.
    pub write: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            files: Vec::new(),
            format: OutputFormat::Text,
            color: ColorMode::Auto,
            error_limit: 20,
            write: false,
        }
    }
}

/// Parse the arguments after the command name.
///
/// Flags may appear anywhere; everything not starting with `-` is a file.
pub fn parse_options(args: &[String]) -> Result<Options, DriverError> {
    let mut options = Options::default();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::parse(value).ok_or_else(|| DriverError::InvalidValue {
                flag: "--format",
                value: value.to_string(),
            })?;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::parse(value).ok_or_else(|| DriverError::InvalidValue {
                flag: "--color",
                value: value.to_string(),
            })?;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.error_limit = value.parse().map_err(|_| DriverError::InvalidValue {
                flag: "--error-limit",
                value: value.to_string(),
            })?;
        } else if arg == "--write" || arg == "-w" {
            options.write = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(DriverError::UnknownOption(arg.clone()));
        } else {
            options.files.push(arg.clone());
        }
    }
    Ok(options)
}
