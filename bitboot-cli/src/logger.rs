//! Session log: timestamped, append-only, one dated file per day.

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Initializes tracing with a daily-rolling file in `config.log_dir`.
///
/// Returns the non-blocking writer guard; dropping it flushes pending
/// log lines, so `main` must hold it for the whole run. `--no-log`
/// skips subscriber installation entirely.
pub fn init(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    if config.no_log {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("cannot create log directory {}", config.log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, "bitboot.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("BITBOOT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(Some(guard))
}
