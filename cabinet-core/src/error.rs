//! Error types for the catalog and project store.
//!
//! The pricing engine itself never fails; only loading and saving records
//! can produce a [`QuoteError`].

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for store operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed record (-3)
    ParseError = -3,
    /// Write failed (-4)
    WriteFailed = -4,
}

/// Main error type for the quoting tool.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Malformed record in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::Json { .. } => ErrorCode::ParseError,
            QuoteError::Serialize(_) => ErrorCode::WriteFailed,
            QuoteError::Io(_) => ErrorCode::WriteFailed,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
