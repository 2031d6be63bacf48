// Rust guideline compliant 2026-10-16

//! Tracing setup for the commitgate binaries.

use commitgate_core::{Error, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "COMMITGATE_LOG";

/// Default log level; keeps a passing run silent.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs a stderr subscriber at `level`.
///
/// A second call is a no-op.
///
/// # Errors
///
/// Returns an error if `level` is not a known level name.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Resolves the log level from an explicit value, then `COMMITGATE_LOG`.
#[must_use]
pub fn resolve_log_level(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Parses a log level name.
///
/// # Errors
///
/// Returns an error for anything but error, warn, info, debug, or trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(Error::InvalidConfig(format!("unknown log level: {other}"))),
    }
}
