//! Error types for the tracker core.
//!
//! Persistence failures never escape the store: reads degrade to
//! defaults and writes degrade to a warning. The typed error exists for
//! the internal fallible paths and for callers that want the cause.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
