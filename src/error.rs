//! Custom error types for modelbak
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for modelbak operations
#[derive(Error, Debug)]
pub enum ModelBakError {
    /// Configuration-related errors (missing environment variable, bad paths)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A digest string that is not `algorithm:hex`
    #[error("Malformed digest '{raw}': {reason}")]
    MalformedDigest { raw: String, reason: String },

    /// A manifest file that cannot be read or does not match the schema
    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// A blob that could not be copied between stores
    #[error("Failed to copy blob {digest}: {reason}")]
    BlobCopy { digest: String, reason: String },

    /// A model name that is not `namespace[:tag]`
    #[error("Invalid model name '{0}'")]
    InvalidModelName(String),

    /// No backup sets found where a catalog operation requires at least one
    #[error("No valid backup sets found under {0}")]
    NoValidBackups(PathBuf),

    /// Failures talking to the external model-listing command
    #[error("Model listing error: {0}")]
    ModelList(String),
}

impl ModelBakError {
    /// Create a malformed-digest error
    pub fn malformed_digest(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDigest {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a manifest-parse error
    pub fn manifest_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ManifestParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a blob-copy error
    pub fn blob_copy(digest: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BlobCopy {
            digest: digest.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a per-item error (safe to record and continue)
    pub fn is_per_item(&self) -> bool {
        matches!(self, Self::BlobCopy { .. })
    }
}

impl From<std::io::Error> for ModelBakError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for modelbak operations
pub type ModelBakResult<T> = Result<T, ModelBakError>;
