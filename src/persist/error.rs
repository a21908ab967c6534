//! Persistence error types.

use derive_more::{Display, Error, From};
use tracing::instrument;

/// Key-value store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {}", err))
    }
}

/// Encode or decode failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Codec error: {} at {}:{}", message, file, line)]
pub struct CodecError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CodecError {
    /// Creates a new codec error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Error raised by a [`PersistedCell`](super::PersistedCell).
#[derive(Debug, Clone, Display, Error, From)]
pub enum CellError {
    /// The backing store failed.
    #[display("{}", _0)]
    Store(StoreError),

    /// The stored value at `key` could not be decoded.
    #[display("Failed to decode value at key '{}': {}", key, source)]
    #[from(ignore)]
    Decode {
        /// Store key being read.
        key: String,
        /// Underlying codec failure.
        source: CodecError,
    },

    /// The in-memory value for `key` could not be encoded.
    #[display("Failed to encode value for key '{}': {}", key, source)]
    #[from(ignore)]
    Encode {
        /// Store key being written.
        key: String,
        /// Underlying codec failure.
        source: CodecError,
    },
}
