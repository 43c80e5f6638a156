//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// A required column is absent from the input header or from a row.
///
/// This is the only domain failure; it aborts the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing required column `{column}`")]
pub struct MissingColumnError {
    pub column: String,
}

impl MissingColumnError {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration path `{0}` is empty")]
    EmptyPath(&'static str),
    #[error("dpi must be between 1 and {max}, got {got}")]
    InvalidDpi { got: u32, max: u32 },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum AppearanceError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("CSV error")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),

    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    /// Drawing backends carry their own generic error type, so only the
    /// message survives.
    #[error("failed to render chart `{path}`: {message}")]
    Chart { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, AppearanceError>;
