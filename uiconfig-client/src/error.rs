//! Error types for document service clients.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure kinds a document service can report.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The addressed document does not exist.
    #[error("document not found: {collection}/{key}")]
    NotFound { collection: String, key: String },

    /// The expected version did not match, or a keyed create hit an existing key.
    #[error("version conflict: {0}")]
    Conflict(String),

    /// The service could not be reached or answered with a failure status.
    #[error("document service unavailable: {0}")]
    Unavailable(String),

    /// The request did not complete within the client timeout.
    #[error("document service request timed out")]
    Timeout,

    /// A response body could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn not_found(collection: impl Into<String>, key: impl Into<String>) -> Self {
        ClientError::NotFound {
            collection: collection.into(),
            key: key.into(),
        }
    }

    /// Returns true if the document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    /// Returns true if a write lost an optimistic-concurrency race.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Conflict(_))
    }

    /// Returns true for transport-level failures.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Unavailable(_) | ClientError::Timeout)
    }
}
