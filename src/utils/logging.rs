//! Logging initialization
//!
//! Simple tracing setup that respects the RUST_LOG environment variable
//! and defaults to "info". Diagnostics go to stderr; the one-line patch
//! status stays on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging
///
/// * `filter` - Optional filter override (e.g., "debug"). RUST_LOG always
///   takes precedence; if neither is set, defaults to "info".
pub fn init_logging(filter: Option<&str>) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(filter.unwrap_or("info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(std::env::var("NO_COLOR").is_err()), // Respect NO_COLOR standard
        )
        .with(env_filter)
        .init();
}
