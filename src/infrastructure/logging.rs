//! File logging setup.
//!
//! The terminal belongs to the UI, so log output goes to a daily rolling file
//! under the data directory instead of stdout.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "tcalc.log";
const DEFAULT_FILTER: &str = "info,tcalc=debug";

/// Initializes the global subscriber. The returned guard flushes buffered
/// lines on drop and must be held until the program exits.
///
/// Returns `None` if the log directory cannot be created.
pub fn init_logging(log_dir: &Path) -> Option<WorkerGuard> {
    std::fs::create_dir_all(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let initialized = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .is_ok();

    initialized.then_some(guard)
}
