//! Driver for the `xcc` expansion tool.
//!
//! The binary in `main.rs` only dispatches; everything it runs lives here so
//! integration tests can reach it.

pub mod commands;
mod error;
pub mod logging;
pub mod options;

pub use error::DriverError;
pub use options::{parse_options, Options, OutputFormat};
