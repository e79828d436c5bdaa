//! The `explain` command: show the documentation of a diagnostic code.

use xc_diagnostic::{ErrorCode, ErrorDocs};

/// Documentation for `code`, or a message saying why there is none.
pub fn explain_text(code: &str) -> Result<&'static str, String> {
    let Some(parsed) = ErrorCode::parse(code) else {
        return Err(format!(
            "unknown error code: {code}\n\nCodes have the format EXXXX where X is a digit, e.g. E2001."
        ));
    };
    ErrorDocs::get(parsed).ok_or_else(|| format!("no documentation available for {code}"))
}

/// Print the documentation for `code`; returns `false` if there is none.
pub fn explain_error(code: &str) -> bool {
    match explain_text(code) {
        Ok(doc) => {
            println!("{doc}");
            true
        }
        Err(message) => {
            eprintln!("{message}");
            false
        }
    }
}
