//! Tracing subscriber setup for the binary.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to `path` so they don't interfere with the terminal UI.
///
/// # Errors
///
/// Fails if the log file cannot be created.
pub fn init_file(path: &Path, fallback_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback_filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, keeping stdout for program output.
pub fn init_stderr(fallback_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback_filter))
        .with_writer(std::io::stderr)
        .try_init();
}
