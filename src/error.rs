//! Error types.
//!
//! One enum per domain, folded into [`Error`] so callers can use `?` across
//! module boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all passkeep operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A lookup found nothing. Only raised by one-shot commands, where the
    /// exit status has to reflect it.
    #[error("no matching password found for {identity} at {target}")]
    NoMatch { identity: String, target: String },
}

/// Backing file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open {} for writing: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Rejected user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid type '{0}': expected Website or App")]
    UnknownKind(String),

    #[error("{field} cannot contain {found}")]
    ForbiddenChar { field: &'static str, found: &'static str },

    #[error("input is not valid UTF-8")]
    Encoding,
}

pub type Result<T> = std::result::Result<T, Error>;
