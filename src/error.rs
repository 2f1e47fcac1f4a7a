//! Error types for version parsing.

use thiserror::Error;

/// Errors raised by the version grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The input does not match the grammar named by `kind`.
    #[error("invalid {kind} {input:?}")]
    InvalidFormat { kind: &'static str, input: String },
}

impl VersionError {
    /// Input rejected by the version number grammar.
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind: "version",
            input: input.into(),
        }
    }

    /// Input rejected by the binary version grammar.
    pub fn invalid_binary(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind: "binary version",
            input: input.into(),
        }
    }

    /// Input rejected by the major.minor parser; `kind` says which part failed.
    pub(crate) fn invalid_major_minor(kind: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            input: input.into(),
        }
    }

    /// Which grammar rejected the input.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat { kind, .. } => *kind,
        }
    }

    /// The complete string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
        }
    }
}
