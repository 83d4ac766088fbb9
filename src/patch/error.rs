//! Patcher error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while patching the react-dom manifest
#[derive(Error, Debug)]
pub enum PatchError {
    /// Manifest not found at the expected path
    #[error("manifest not found: {}", .path.display())]
    MissingManifest { path: PathBuf },

    /// Manifest content is not valid JSON
    #[error("malformed manifest {}: {source}", .path.display())]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to re-serialize the patched document
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for patch operations
pub type Result<T> = std::result::Result<T, PatchError>;
