// src/logging.rs
use anyhow::{Result, anyhow};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Overrides the level chosen on the command line, e.g. `PYINITGEN_LOG=debug`.
pub const LOG_ENV_VAR: &str = "PYINITGEN_LOG";

/// Installs the global subscriber: plain messages on stderr at `level`,
/// unless [`LOG_ENV_VAR`] holds a filter.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
#[inline]
pub fn init_logging(level: LevelFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))
}

fn build_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}
