//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging.
///
/// # Environment
/// - `RUST_LOG`: filter directives (default: `info`),
///   e.g. `RUST_LOG=beam_core=debug` to see derived solve values
///
/// Log lines go to stderr so stdout stays clean for `--json`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
