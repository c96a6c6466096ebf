//! Error types for the metadata converter

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting track metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Input metadata file could not be read
    #[error("failed to read metadata file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output JSON file could not be written
    #[error("failed to write JSON file {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON encoding failed
    #[error("failed to encode grouping as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, MetadataError>;
