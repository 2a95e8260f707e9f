//! Error types for the linqed crate.
//!
//! Query operations never fail: each one answers an unsupported filter with
//! its own default value. Errors only arise when converting foreign data
//! into a [`Collection`](crate::Collection).

use thiserror::Error;

/// Errors that can occur when building a collection from external data.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Input text is not valid JSON.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is valid but is not an ordered sequence.
    #[error("cannot wrap a JSON {found} as a collection, expected an array")]
    NotASequence { found: &'static str },
}

/// Result type for linqed conversions.
pub type Result<T> = std::result::Result<T, CollectionError>;
