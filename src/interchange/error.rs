//! Error types for interchange operations.

use thiserror::Error;

use crate::error::VersionError;

/// Errors raised while encoding or decoding a version at a format boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Stored document value has the wrong shape.
    #[error("Document error: {0}")]
    Document(String),

    /// The decoded string is not a valid version.
    #[error("Decode error: {0}")]
    Version(#[from] VersionError),
}

impl CodecError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create a document error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }

    /// The underlying parse failure, if decoding got as far as the grammar.
    pub fn as_version_error(&self) -> Option<&VersionError> {
        match self {
            Self::Version(err) => Some(err),
            _ => None,
        }
    }
}
