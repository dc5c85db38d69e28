// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `surveyor`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "surveyor",
    version,
    about = "Explore a transition system round by round under a concurrency budget.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the model file (TOML).
    ///
    /// Default: `Surveyor.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Maximum number of rounds; overrides `[surveyor].max_rounds`.
    #[arg(long, value_name = "N")]
    pub rounds: Option<u64>,

    /// Maximum number of active traces; overrides `[surveyor].max_concurrency`.
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    /// Stop as soon as an active trace reaches a state matching this regex.
    #[arg(long, value_name = "REGEX")]
    pub target: Option<String>,

    /// Start in single-step mode with an interactive console on stdin.
    #[arg(long)]
    pub interactive: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SURVEYOR_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the model, but don't explore it.
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
