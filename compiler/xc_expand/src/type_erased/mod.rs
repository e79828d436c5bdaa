//! `@TypeErased`: generate an `Any<Protocol>` wrapper next to a protocol.
//!
//! Expansion runs in three stages, each usable on its own:
//!
//! 1. [`analyze`](analyze::analyze) rejects what cannot be erased and
//!    collects methods and associated types.
//! 2. [`signature`] turns each method into a closure type and a forwarding
//!    call.
//! 3. [`synthesize`](synthesize::synthesize) assembles the wrapper type.

pub mod analyze;
pub mod diagnostics;
pub mod signature;
pub mod synthesize;

use xc_diagnostic::ErrorGuaranteed;
use xc_ir::{Attribute, Decl};

use crate::context::MacroExpansionContext;
use crate::registry::PeerMacro;

pub use analyze::{analyze, AnalyzedInterface, Method};
pub use diagnostics::{EraseError, ModifierRemoval};
pub use synthesize::{synthesize, StoredProperty, WrapperKind, WrapperType};

/// The `@TypeErased` peer macro.
#[derive(Copy, Clone, Debug, Default)]
pub struct TypeErasedMacro;

impl PeerMacro for TypeErasedMacro {
    fn name(&self) -> &'static str {
        "TypeErased"
    }

    fn expansion(
        &self,
        _attribute: &Attribute,
        declaration: &Decl,
        ctx: &mut dyn MacroExpansionContext,
    ) -> Result<Vec<Decl>, ErrorGuaranteed> {
        let analyzed = analyze(declaration, ctx)?;
        let wrapper = synthesize(&analyzed, ctx);
        Ok(vec![wrapper.to_decl()])
    }
}
