use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a console subscriber filtered by `RUST_LOG`, defaulting to `off`.
///
/// Returns `false` when a global subscriber was already set.
pub fn init_logger() -> bool {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    let console_layer = fmt::layer()
        .with_thread_names(true)
        .with_target(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_ok()
}
