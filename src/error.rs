//! Error types for codeword analysis.

use std::path::PathBuf;

use thiserror::Error;

/// Error variants for analysis operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The codeword source could not be located or read.
    #[error("cannot read codewords from {path}: {source}")]
    MissingInput {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Requested message length is not a non-negative integer.
    #[error("invalid requested message length: {0:?}")]
    InvalidRequestedLength(String),

    /// A fixed radix below 2 was requested.
    #[error("invalid radix {0}: must be at least 2")]
    InvalidRadix(u32),

    /// Provided probability is invalid (e.g., negative or non-finite).
    #[error("invalid probability: {0}")]
    InvalidProbability(f64),

    /// Symbols and weights are not index-aligned.
    #[error("weight mismatch: {symbols} symbols but {weights} weights")]
    WeightMismatch {
        /// Number of symbols supplied.
        symbols: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// A non-empty message was requested from an empty symbol set.
    #[error("cannot synthesize from an empty alphabet")]
    EmptyAlphabet,

    /// The synthesized message or report could not be written.
    #[error("cannot write to {path}: {source}")]
    WriteFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
