//! Document service abstraction trait.
//!
//! Defines the contract every backing key/value document service fulfils.

use crate::error::ClientResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uiconfig_types::{CollectionId, Document, DocumentKey, ETag};

/// Health report returned by [`DocumentStoreClient::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub is_healthy: bool,
    pub message: String,
}

impl ServiceStatus {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            is_healthy: true,
            message: message.into(),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            is_healthy: false,
            message: message.into(),
        }
    }
}

/// Abstract versioned document service.
///
/// Documents are addressed by `(collection, key)`. Every successful write
/// yields a new [`ETag`].
#[async_trait]
pub trait DocumentStoreClient: Send + Sync {
    /// Fetches one document. Fails with `NotFound` if absent.
    async fn get(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<Document>;

    /// Fetches every document in a collection. An empty collection yields an empty list.
    async fn get_all(&self, collection: &CollectionId) -> ClientResult<Vec<Document>>;

    /// Creates a document.
    ///
    /// With `key = None` the service assigns the key. With an explicit key the
    /// call fails with `Conflict` if that key already exists.
    async fn create(
        &self,
        collection: &CollectionId,
        key: Option<&DocumentKey>,
        data: &str,
    ) -> ClientResult<Document>;

    /// Replaces an existing document if its current version is `expected`.
    ///
    /// Fails with `Conflict` on version mismatch and `NotFound` if the key
    /// does not exist; this is never an upsert.
    async fn update(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        data: &str,
        expected: &ETag,
    ) -> ClientResult<Document>;

    /// Deletes a document. Deleting an absent key succeeds.
    async fn delete(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<()>;

    /// Reports service health. Backends without a probe are always healthy.
    async fn status(&self) -> ClientResult<ServiceStatus> {
        Ok(ServiceStatus::healthy("no status probe"))
    }
}
