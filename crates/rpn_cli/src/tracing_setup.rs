//! Tracing subscriber setup for the `rpn` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rpn_eval=trace` or `RUST_LOG=debug`. Set
/// `RPN_LOG_TREE` as well for indented span trees instead of flat lines.
/// Output goes to stderr so it never mixes with results on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var_os("RPN_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
