//! Tracing subscriber setup.

use crate::config::RewindConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to the configured file so they never draw over the UI.
pub fn init_file_logging(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(config: &RewindConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::io::stderr)
        .try_init();
}
