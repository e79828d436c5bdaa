//! Attribute name to macro lookup.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use xc_diagnostic::ErrorGuaranteed;
use xc_ir::{Attribute, Decl};

use crate::context::MacroExpansionContext;
use crate::type_erased::TypeErasedMacro;

/// A macro attached to a declaration that produces sibling declarations.
pub trait PeerMacro: Send + Sync {
    /// Attribute name without the `@`.
    fn name(&self) -> &'static str;

    /// Peers to insert after `declaration`.
    ///
    /// Errors are reported through `ctx`; the `Err` side only proves that
    /// happened.
    fn expansion(
        &self,
        attribute: &Attribute,
        declaration: &Decl,
        ctx: &mut dyn MacroExpansionContext,
    ) -> Result<Vec<Decl>, ErrorGuaranteed>;
}

/// Registered peer macros, keyed by attribute name.
#[derive(Clone, Default)]
pub struct MacroRegistry {
    macros: FxHashMap<&'static str, Arc<dyn PeerMacro>>,
}

impl MacroRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        MacroRegistry::default()
    }

    /// Registry with every macro this crate ships.
    pub fn with_builtins() -> Self {
        let mut registry = MacroRegistry::new();
        registry.register(Arc::new(TypeErasedMacro));
        registry
    }

    /// Add `mac`, replacing any macro registered under the same name.
    pub fn register(&mut self, mac: Arc<dyn PeerMacro>) {
        self.macros.insert(mac.name(), mac);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn PeerMacro>> {
        self.macros.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.macros.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

impl std::fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("macros", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;

    impl PeerMacro for Nothing {
        fn name(&self) -> &'static str {
            "Nothing"
        }

        fn expansion(
            &self,
            _attribute: &Attribute,
            _declaration: &Decl,
            _ctx: &mut dyn MacroExpansionContext,
        ) -> Result<Vec<Decl>, ErrorGuaranteed> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn builtins_include_type_erased() {
        let registry = MacroRegistry::with_builtins();
        assert!(registry.contains("TypeErased"));
        assert_eq!(registry.get("TypeErased").map(|m| m.name()), Some("TypeErased"));
        assert!(registry.get("Observable").is_none());
    }

    #[test]
    fn register_adds_and_replaces() {
        let mut registry = MacroRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(Nothing));
        registry.register(Arc::new(Nothing));
        assert_eq!(registry.len(), 1);

        registry.register(Arc::new(TypeErasedMacro));
        assert_eq!(registry.names(), vec!["Nothing", "TypeErased"]);
        assert_eq!(
            format!("{registry:?}"),
            "MacroRegistry { macros: [\"Nothing\", \"TypeErased\"] }"
        );
    }
}
