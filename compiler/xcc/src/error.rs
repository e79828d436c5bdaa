//! Driver failures that are not source diagnostics.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("error writing '{path}': {source}")]
    Write { path: String, source: io::Error },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("missing input file")]
    MissingInput,

    #[error("fix-its overlap and were not applied: {0}")]
    ConflictingFixes(#[from] xc_diagnostic::fixes::EditConflict),
}

impl DriverError {
    /// Classify a read failure the way users expect to see it.
    pub fn from_read(path: &str, error: io::Error) -> Self {
        let path = path.to_string();
        match error.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read {
                path,
                source: error,
            },
        }
    }
}
