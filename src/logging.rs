// ==========================================
// Logging initialization
// ==========================================
// tracing + tracing-subscriber, level via environment variable
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system.
///
/// # Environment
/// - RUST_LOG: filter expression (default: info),
///   e.g. RUST_LOG=debug or RUST_LOG=movement_dashboard=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialize logging for tests.
///
/// More verbose, and routed through the test writer so output stays
/// attached to the failing test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
