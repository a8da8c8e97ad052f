// src/logging.rs

//! Logging setup for `execplan` using `tracing` + `tracing-subscriber`.
//!
//! The log level is resolved from, in order: the `--log-level` flag, the
//! `EXECPLAN_LOG` environment variable, then a default of `info`. Logs go to
//! stderr so that stdout carries only the computed plan.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var("EXECPLAN_LOG").ok();
    let level = resolve_level(cli_level, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Resolve the effective log level: CLI flag wins, then the environment
/// value, then `info`.
///
/// `tracing::Level` already parses the usual level names case-insensitively,
/// so the environment value goes straight through its `FromStr`; anything
/// unparseable falls back to the default rather than failing startup.
pub fn resolve_level(cli_level: Option<LogLevel>, env_level: Option<&str>) -> Level {
    match cli_level {
        Some(LogLevel::Error) => Level::ERROR,
        Some(LogLevel::Warn) => Level::WARN,
        Some(LogLevel::Info) => Level::INFO,
        Some(LogLevel::Debug) => Level::DEBUG,
        Some(LogLevel::Trace) => Level::TRACE,
        None => env_level
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(Level::INFO),
    }
}
