//! Diagnostic system for rich error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability (`xcc explain E2002`)
//! - A message (what went wrong)
//! - A primary span (where it went wrong)
//! - Context labels and notes (why it's wrong)
//! - Fix-its (how to fix it), applied by `xcc fix`
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type is proof that at least one error was emitted.
//! Expansion stages return `Result<T, ErrorGuaranteed>`, so a stage cannot
//! abort without reporting.
//!
//! ```text
//! let guarantee = ErrorGuaranteed::emit(diagnostic, &mut sink);
//! fn analyze(..) -> Result<AnalyzedInterface, ErrorGuaranteed> { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod fixes;
mod guarantee;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Applicability, Diagnostic, Label, Severity, Substitution, Suggestion};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use guarantee::ErrorGuaranteed;
