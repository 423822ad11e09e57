//! Error types for the library

use thiserror::Error;

/// Fatal dataset-construction error
///
/// Only construction can fail. Lookup misses are never errors; they are
/// reported in-band through [`crate::core::Translation`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    Dataset(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
