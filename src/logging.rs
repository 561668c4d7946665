//! Tracing subscriber setup used by the binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr so they never mix with the report on stdout.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
