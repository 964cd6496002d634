// src/logging.rs
// =============================================================================
// Sets up structured logging with `tracing`.
//
// Log lines go to stderr. stdout is reserved for things other programs read:
// the JSON report and the shell commands printed by clean-storage.
//
// The level defaults to `info` and can be changed with RUST_LOG, e.g.
//   RUST_LOG=gitlink_audit=debug gitlink-audit check
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
