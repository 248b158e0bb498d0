//! Structured logging initialization.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Environment;

/// Writer guards for the non-blocking file appenders.
///
/// Dropping these flushes and stops the background writer threads, so the
/// caller holds them for the life of the process.
pub struct LogGuards {
    _error: WorkerGuard,
    _combined: WorkerGuard,
}

/// Initialize the global subscriber.
///
/// Two JSON file sinks always exist: `error.log` with ERROR-level records
/// only and `combined.log` with everything at INFO and above. Outside
/// production a human-readable console layer is added on top.
pub fn init(environment: Environment, dir: impl AsRef<Path>) -> LogGuards {
    let dir = dir.as_ref();

    let (error_writer, error_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, "error.log"));
    let (combined_writer, combined_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, "combined.log"));

    let error_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(error_writer)
        .with_filter(LevelFilter::ERROR);
    let combined_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(combined_writer)
        .with_filter(LevelFilter::INFO);

    let console_layer = (!environment.is_production()).then(|| {
        tracing_subscriber::fmt::layer().with_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app_server=debug,tower_http=debug".into()),
        )
    });

    tracing_subscriber::registry()
        .with(error_layer)
        .with(combined_layer)
        .with(console_layer)
        .init();

    LogGuards {
        _error: error_guard,
        _combined: combined_guard,
    }
}
