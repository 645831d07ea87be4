//! Error handling for WarpKit
//!
//! Provides the error types shared by every layer of the editor:
//! - Transform errors (quad-to-quad solving, matrix inversion)
//! - Persistence errors (document save/load)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Transform error type
///
/// Represents failures of the homogeneous transform math. Interactive
/// callers treat these as recoverable: the shape keeps its previous transform.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// No projective mapping exists between the two quadrilaterals
    #[error("Degenerate quad correspondence: {reason}")]
    DegenerateQuad {
        /// Why the correspondence was rejected.
        reason: String,
    },

    /// The matrix has no inverse
    #[error("Transform is not invertible (determinant {determinant})")]
    NotInvertible {
        /// The determinant of the offending matrix.
        determinant: f64,
    },
}

/// Persistence error type
///
/// The single failure kind surfaced by document save and load.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing the document failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The document path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document could not be encoded or is malformed
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// The encoded document is not valid UTF-8
    #[error("Document encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl PersistenceError {
    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Main error type for WarpKit
#[derive(Error, Debug)]
pub enum Error {
    /// Transform error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Result type for WarpKit operations
pub type Result<T> = std::result::Result<T, Error>;
