//! Tracing bootstrap for the MOLT test binaries.
//!
//! Test binaries either call [`init_tracing_for_tests`] at the top of a test
//! or enable the `auto-init` feature to have it run before `main`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber for the current test binary.
///
/// Safe to call from every test; only the first call in the process installs
/// anything. Honors `RUST_LOG` when set. The default filter is `warn`, which
/// keeps test output quiet while still surfacing deprecation notices; set
/// `RUST_LOG=debug` to watch plan optimization and row expansion.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt().with_env_filter(filter).with_target(false).init();
    });
}

#[cfg(feature = "auto-init")]
mod auto {
    // ctor runs at binary init time so individual tests need no init call.
    use ctor::ctor;

    #[ctor]
    fn init() {
        super::init_tracing_for_tests();
    }
}
