//! In-memory document service.
//!
//! Implements the full [`DocumentStoreClient`] contract, including version
//! checks, over a map guarded by an async `RwLock`. Used by tests and by
//! embedders that do not need a remote service.

use crate::client::{DocumentStoreClient, ServiceStatus};
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::debug;
use uiconfig_types::{CollectionId, Document, DocumentKey, ETag};

type Collection = BTreeMap<DocumentKey, Document>;

/// Document service that keeps everything in process memory.
#[derive(Default)]
pub struct MemoryDocumentClient {
    collections: RwLock<HashMap<CollectionId, Collection>>,
}

impl MemoryDocumentClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw data under a key, bypassing version checks.
    ///
    /// Lets tests place payloads that no typed writer would produce.
    pub async fn seed(&self, collection: &CollectionId, key: &DocumentKey, data: &str) -> Document {
        let now = Utc::now();
        let document = Document::new(collection.clone(), key.clone(), data, ETag::generate())
            .with_timestamps(now, now);

        self.collections
            .write()
            .await
            .entry(collection.clone())
            .or_default()
            .insert(key.clone(), document.clone());

        document
    }

    /// Number of documents currently stored in a collection.
    pub async fn len(&self, collection: &CollectionId) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStoreClient for MemoryDocumentClient {
    async fn get(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<Document> {
        self.collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned()
            .ok_or_else(|| ClientError::not_found(collection.as_str(), key.as_str()))
    }

    async fn get_all(&self, collection: &CollectionId) -> ClientResult<Vec<Document>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn create(
        &self,
        collection: &CollectionId,
        key: Option<&DocumentKey>,
        data: &str,
    ) -> ClientResult<Document> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.clone()).or_default();

        let key = match key {
            Some(key) if docs.contains_key(key) => {
                return Err(ClientError::Conflict(format!(
                    "{collection}/{key} already exists"
                )));
            }
            Some(key) => key.clone(),
            None => DocumentKey::generate(),
        };

        let now = Utc::now();
        let document = Document::new(collection.clone(), key.clone(), data, ETag::generate())
            .with_timestamps(now, now);
        docs.insert(key, document.clone());

        debug!("Created in-memory document {}/{}", collection, document.key);
        Ok(document)
    }

    async fn update(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        data: &str,
        expected: &ETag,
    ) -> ClientResult<Document> {
        let mut collections = self.collections.write().await;
        let current = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or_else(|| ClientError::not_found(collection.as_str(), key.as_str()))?;

        if !current.is_version(expected) {
            return Err(ClientError::Conflict(format!(
                "{collection}/{key} is at version {}, expected {expected}",
                current.etag
            )));
        }

        current.data = data.to_string();
        current.etag = ETag::generate();
        current.modified = Some(Utc::now());

        debug!("Updated in-memory document {}/{}", collection, key);
        Ok(current.clone())
    }

    async fn delete(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<()> {
        if let Some(docs) = self.collections.write().await.get_mut(collection) {
            docs.remove(key);
        }
        Ok(())
    }

    async fn status(&self) -> ClientResult<ServiceStatus> {
        Ok(ServiceStatus::healthy("OK: in-memory"))
    }
}
