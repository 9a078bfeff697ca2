//! Tracing setup. The terminal belongs to the UI, so logs go to a file.
//!
//! Precedence: RUST_LOG env var > config file > default "info"

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tagfield_core::LoggingConfig;

use crate::io;

const LOG_FILE: &str = "tagfield.log";

/// Install the global subscriber. Keep the guard alive until exit so the
/// background writer flushes.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    let log_dir = io::tagfield_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;

    let default_filter = format!(
        "tagfield={level},tagfield_core={level}",
        level = config.level
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
