//! Shared logging setup for consistent tracing across binaries and tests

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for the solver process.
///
/// `log_level` overrides the default of `info` for the workspace crates;
/// everything else stays at warn so third-party noise is filtered out.
pub fn init_tracing(log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let env_filter = format!("solver={base_level},shared={base_level},warn");

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
