//! Error types for the Tenzies core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type TzResult<T> = Result<T, TzError>;

/// Errors that can occur outside of normal play.
///
/// Game transitions never fail; only hand-built dice and score store
/// writes report errors.
#[derive(Debug, Error)]
pub enum TzError {
    /// A die value outside the 1-6 range.
    #[error("invalid die face: {0} (expected 1-6)")]
    InvalidFace(u8),

    /// The score store file could not be written or removed.
    #[error("score store at {path}: {source}")]
    Io {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The score store contents could not be encoded.
    #[error("score store encoding: {0}")]
    Serialize(#[from] serde_json::Error),
}
