//! Error types for file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// A face statement with other than three vertices.
    #[error("line {line}: face has {vertices} vertices, only triangles are supported")]
    NonTriangleFace {
        /// 1-based line number of the offending statement.
        line: usize,
        /// Number of vertex references on the face.
        vertices: usize,
    },

    /// A grid file whose value count does not match its header.
    #[error("grid file declares {expected} values, found {got}")]
    ValueCountMismatch {
        /// Node count from the header dimensions.
        expected: usize,
        /// Number of values actually present.
        got: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
