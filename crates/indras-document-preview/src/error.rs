//! Error types for loading previews at the application boundary.
//!
//! Rendering itself never fails; these only surface when decoding
//! descriptors or reading configuration and icon files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading preview inputs.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Document descriptor has an empty filename")]
    EmptyFilename,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for preview loading.
pub type Result<T> = std::result::Result<T, PreviewError>;
