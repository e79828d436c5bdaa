//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// The filter comes from `XC_LOG`, falling back to `RUST_LOG`; with neither
/// set nothing is installed. `XC_LOG_TREE=1` swaps the flat formatter for an
/// indented span tree. Calling this more than once has no effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) =
            EnvFilter::try_from_env("XC_LOG").or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };

        let tree = std::env::var("XC_LOG_TREE").is_ok_and(|v| v == "1");
        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
        });
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(tree_layer)
            .with(flat_layer)
            .init();
    });
}
