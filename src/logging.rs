//! Tracing subscriber setup for the binary

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "version_up=info";

/// Install a file layer (when `log_path`'s directory is usable) and a
/// stderr layer limited to warnings.
///
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init_logging(log_path: &Path) -> Option<WorkerGuard> {
    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let mut guard = None;
    let file_layer = match (log_path.parent(), log_path.file_name()) {
        (Some(dir), Some(file_name)) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::never(dir, file_name);
                let (writer, worker_guard) = tracing_appender::non_blocking(appender);
                guard = Some(worker_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_filter(file_filter),
                )
            }
            Err(e) => {
                eprintln!("Warning: failed to create log directory {:?}: {}", dir, e);
                None
            }
        },
        _ => None,
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(EnvFilter::new("warn")),
        )
        .init();

    guard
}
