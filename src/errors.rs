// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Recorded path errors are *not* represented here: they are domain data
//! carried by each path. This enum only covers configuration problems and
//! faults raised by pluggable hooks.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurveyorError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A step function, admission hook, termination predicate or pause
    /// handler failed. The underlying error is surfaced unchanged.
    #[error(transparent)]
    Hook(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SurveyorError>;
