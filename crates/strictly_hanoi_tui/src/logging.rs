//! Tracing subscriber setup.

use crate::config::LogConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter()))
}

/// Logs to the configured file so the terminal UI owns the screen.
pub fn init_file(config: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr.
pub fn init_stderr(config: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
