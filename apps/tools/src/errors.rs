use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading templates or writing env files.
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("Failed to read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid key pattern for '{key}': {source}")]
    Pattern {
        key: String,
        #[source]
        source: regex::Error,
    },
}

/// Failures raised by the interactive setup flow.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Prompt input exhausted while asking '{0}'")]
    InputExhausted(String),
}

/// Failures reported by a resume save backend.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Save backend unavailable: {0}")]
    Unavailable(String),

    #[error("Save rejected: {0}")]
    Rejected(String),
}
