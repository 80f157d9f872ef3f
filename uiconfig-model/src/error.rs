//! Error types for entity validation.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while parsing or validating entities.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Package content is not a configuration document.
    #[error("invalid package content: {0}")]
    InvalidContent(String),

    /// Package content does not fit the declared package type.
    #[error("package type {package_type} does not match package contents: {reason}")]
    TypeMismatch {
        package_type: String,
        reason: String,
    },

    /// A package type name that is not recognised.
    #[error("unknown package type: {0}")]
    UnknownPackageType(String),

    /// A payload that must be a JSON object was something else.
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),
}
