//! Error types for notecards-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised while loading or saving review state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode review state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised while scanning a notes directory.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read notes directory {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors raised while persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
}
