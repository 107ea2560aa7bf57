//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Why a record cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a prompt needs a title")]
    MissingTitle,

    #[error("a prompt needs an image, a positive prompt or a negative prompt")]
    EmptyRecord,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid prompt: {0}")]
    Validation(#[from] ValidationError),

    #[error("no prompt at index {0}")]
    NotFound(usize),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Json { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
