//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Application parsing error.
    #[error("application parse error: {0}")]
    Parse(#[from] appgen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A name or GUID that cannot be used in generated code.
    #[error("invalid {kind} identifier '{value}'")]
    InvalidIdentifier {
        /// What the identifier names (class, property, object guid).
        kind: String,
        /// Offending value.
        value: String,
    },
}

impl CodegenError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: kind.into(),
            value: value.into(),
        }
    }
}
