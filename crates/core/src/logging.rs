use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_SUBDIR: &str = ".versemap/logs";

/// Log directory under `home`, or under the working directory when no home
/// is known.
fn log_dir_in(home: Option<OsString>) -> PathBuf {
    home.map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_SUBDIR)
}

/// Install the global subscriber for one subcommand.
///
/// Each `component` gets its own daily file under `~/.versemap/logs`
/// (`extract.2026-01-21`, `schema.2026-01-21`). With `to_stderr` the same
/// events also go to stderr. Keep the guard alive until exit so buffered
/// lines are flushed.
pub fn init_logging(component: &str, to_stderr: bool) -> io::Result<WorkerGuard> {
    let log_dir = log_dir_in(std::env::var_os("HOME"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    Ok(guard)
}
