//! Peer macro expansion for xcoders.
//!
//! The crate hosts attached peer macros: a macro sees one declaration and
//! returns new declarations to place next to it. [`type_erased`] implements
//! `@TypeErased`, which turns
//!
//! ```text
//! @TypeErased
//! protocol Printer {
//!     func print()
//! }
//! ```
//!
//! into the protocol plus an `AnyPrinter` wrapper that stores one closure per
//! method. [`host::expand_source`] runs every registered macro over a file and
//! returns the expanded text with its diagnostics.

pub mod context;
pub mod host;
pub mod registry;
pub mod type_erased;

pub use context::{BasicExpansionContext, MacroExpansionContext};
pub use host::{expand_source, expand_source_with, ExpansionOutput};
pub use registry::{MacroRegistry, PeerMacro};
pub use type_erased::TypeErasedMacro;
