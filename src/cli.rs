// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::loader::default_manifest_path;

/// Command-line arguments for `execplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "execplan",
    version,
    about = "Compute a dependency-respecting execution order for a set of tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task manifest (TOML).
    ///
    /// Default: [`default_manifest_path`] (`Execplan.toml` in the current
    /// working directory).
    #[arg(long, value_name = "PATH", default_value_os_t = default_manifest_path())]
    pub config: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EXECPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the task set, but don't compute a plan.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
