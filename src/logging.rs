use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "address_book=info,tower_http=info";

/// Initializes console logging plus a daily-rotated JSON log file under `logs/`.
///
/// The returned guard flushes the file writer on drop; hold it for the life of the process.
pub fn init_logging() -> WorkerGuard {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "address-book.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
