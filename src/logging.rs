use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset: debug for this crate, info elsewhere
pub const DEFAULT_LOG_FILTER: &str = "dy_widgets=debug,info";

/// Initializes the logging system with both console and file output.
///
/// Console output goes to stderr so command results on stdout stay clean.
/// The returned guard flushes the file writer when dropped.
pub fn init_logging() -> WorkerGuard {
    // Ensure logs directory exists
    let _ = fs::create_dir_all("logs");

    // Create a non-blocking file appender for daily log rotation
    let file_appender = tracing_appender::rolling::daily("logs", "dy_widgets.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Create a JSON layer for file logging
    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // Respect RUST_LOG if set; otherwise default to verbose for our crate
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_default_filter_levels() {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "dy_widgets::infra", Level::DEBUG));
            assert!(tracing::enabled!(target: "reqwest::connect", Level::INFO));
            assert!(!tracing::enabled!(target: "reqwest::connect", Level::DEBUG));
        });
    }
}
