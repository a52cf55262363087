//! Error types shared across the crate.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by text handling, indexing, and extraction
#[derive(Debug, Error)]
pub enum Error {
    /// Input bytes failed UTF-8 validation
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// A character index or text offset exceeded the addressable range
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Document separator is not exactly one character
    #[error("separator must be exactly one character, got {chars}")]
    InvalidSeparator { chars: usize },

    /// Suffix index construction was given an empty text
    #[error("cannot build a suffix index over empty text")]
    EmptyText,

    /// Suffix or LCP array was read before a successful build
    #[error("suffix index has not been built")]
    NotBuilt,

    /// JSON serialization of match records failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
