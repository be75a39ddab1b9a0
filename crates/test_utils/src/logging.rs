//! Tracing for tests
//!
//! Installs a test-writer subscriber once per process. Filter with
//! `RUST_LOG`, e.g. `RUST_LOG=domain_policy=debug cargo test`.

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Another harness may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Installs the test subscriber; safe to call from every test
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
