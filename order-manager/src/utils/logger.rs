//! Logging Infrastructure
//!
//! Structured logging setup for the driver.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter for the configured level directive (`info`, `order_manager=debug`, ...)
///
/// Falls back to `info` when the directive does not parse.
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|e| {
        eprintln!("Invalid LOG_LEVEL '{}': {}, using info", log_level, e);
        EnvFilter::new("info")
    })
}

/// Initialize the logger with optional file output
///
/// Logs go to a daily rolling file when `log_dir` exists, stderr otherwise.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level.unwrap_or("info")))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "order-manager");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.with_writer(std::io::stderr).init();
}
