//! # Error Types
//!
//! Failure modes of metadata extraction. Both variants are fatal for the
//! checks that depend on decoded metadata: the pipeline records exactly one
//! error and skips schema validation and the correspondence check.

use thiserror::Error;

/// Error decoding the embedded `<metadata>` payload.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The metadata element exists but carries no text content.
    #[error("<metadata> element is empty")]
    Empty,

    /// The text content is not valid JSON. No partial structure is
    /// recovered from a failed decode.
    #[error("invalid JSON in <metadata>: {0}")]
    Json(#[from] serde_json::Error),
}
