//! Logging Infrastructure
//!
//! Structured logging setup for development (pretty stdout) and production
//! (JSON stdout plus a daily-rolling log file).

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger with defaults (info, plain text, stdout only)
pub fn init_logger() -> Option<WorkerGuard> {
    init_logger_with_file(None, false, None)
}

/// Initialize the logger with optional JSON output and file output.
///
/// `RUST_LOG` overrides `log_level` when set. The returned guard flushes the file
/// writer on drop and must be held for the lifetime of the process.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&Path>,
) -> Option<WorkerGuard> {
    let level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},tower_http=info,sqlx=warn")));

    let stdout_layer = if json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .boxed()
    };

    // Add file output if log_dir is provided
    let (file_layer, guard) = match log_dir {
        Some(dir) if std::fs::create_dir_all(dir).is_ok() => {
            let file_appender = tracing_appender::rolling::daily(dir, "kitchen-server.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    guard
}
