//! Errors raised while loading bank datasets and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading datasets or config files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid bank profile at index {index}: {source}")]
    Profile {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
