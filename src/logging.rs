//! File logging. The terminal belongs to the UI, so nothing goes to stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE: &str = "habit-flow.log";
const DEFAULT_FILTER: &str = "info";

/// Filter directive: RUST_LOG, then the configured one, then "info"
pub fn filter_directive(env: Option<&str>, configured: Option<&str>) -> String {
    let usable = |s: Option<&str>| s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
    usable(env)
        .or_else(|| usable(configured))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber writing to a daily file under `logs_dir`.
/// The returned guard must be held for the app lifetime.
pub fn init_logging(logs_dir: &Path, configured: Option<&str>) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env.as_deref(), configured);
    let env_filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}
