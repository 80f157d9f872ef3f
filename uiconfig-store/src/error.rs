//! Error types for the typed storage layer.

use thiserror::Error;
use uiconfig_client::ClientError;
use uiconfig_model::ModelError;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the typed storage layer.
///
/// Raw [`ClientError`]s never leave this crate; they are folded into one of
/// these four kinds.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed or inconsistent input, detected before any store call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The presented version is no longer current.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The document service failed or returned something unusable.
    #[error("external dependency failed: {0}")]
    ExternalDependency(String),
}

impl StoreError {
    /// Returns true if the addressed document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Returns true if a write was rejected because of a stale version.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}

impl From<ClientError> for StoreError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NotFound { collection, key } => {
                StoreError::NotFound(format!("{collection}/{key}"))
            }
            ClientError::Conflict(msg) => StoreError::Conflict(msg),
            other => StoreError::ExternalDependency(other.to_string()),
        }
    }
}

impl From<ModelError> for StoreError {
    fn from(e: ModelError) -> Self {
        StoreError::InvalidInput(e.to_string())
    }
}

impl From<uiconfig_types::Error> for StoreError {
    fn from(e: uiconfig_types::Error) -> Self {
        StoreError::InvalidInput(e.to_string())
    }
}

/// Errors raised while loading [`ServicesConfig`](crate::ServicesConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
