// src/log.rs
use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the global subscriber.
///
/// Everything goes to `.store/debug.log` with an uptime stamp. `echo_stderr`
/// additionally mirrors events to stderr (CLI). Level comes from `RUST_LOG`,
/// default `info`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the file writer. Returns `None` if a subscriber was
/// already installed (tests, embedding).
pub fn init(echo_stderr: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = fs::create_dir_all(STORE_DIR) {
        eprintln!("Warning: could not create {STORE_DIR}: {e}");
    }
    let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(fmt::time::uptime());

    let stderr_layer = echo_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .ok()
        .map(|_| guard)
}
