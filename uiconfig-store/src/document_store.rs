//! Generic typed CRUD over an untyped document service.
//!
//! `DocumentStore` is the only place that turns entities into documents and
//! back. It never inspects payloads and never falls back to defaults; both
//! belong to the facades.

use crate::error::{StoreError, StoreResult};
use crate::mapper::DocumentMapper;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uiconfig_client::DocumentStoreClient;
use uiconfig_types::{CollectionId, Document, DocumentKey, ETag};

/// A decoded entity together with its key and version.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedDocument<T> {
    pub key: DocumentKey,
    pub value: T,
    pub etag: ETag,
}

/// Result of enumerating a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration<T> {
    pub items: Vec<TypedDocument<T>>,
    /// Documents that could not be decoded and were left out.
    pub skipped: usize,
}

impl<T> Enumeration<T> {
    pub fn into_values(self) -> Vec<T> {
        self.items.into_iter().map(|doc| doc.value).collect()
    }
}

/// Typed access to the backing document service.
#[derive(Clone)]
pub struct DocumentStore {
    client: Arc<dyn DocumentStoreClient>,
}

impl DocumentStore {
    pub fn new(client: Arc<dyn DocumentStoreClient>) -> Self {
        Self { client }
    }

    /// The underlying untyped client.
    pub fn client(&self) -> &Arc<dyn DocumentStoreClient> {
        &self.client
    }

    fn decode<M: DocumentMapper>(
        document: Document,
        mapper: &M,
    ) -> StoreResult<TypedDocument<M::Value>> {
        let value = mapper.decode(&document.data).map_err(|e| match e {
            StoreError::ExternalDependency(reason) => StoreError::ExternalDependency(format!(
                "{}/{}: {reason}",
                document.collection_id, document.key
            )),
            other => other,
        })?;

        Ok(TypedDocument {
            key: document.key,
            value,
            etag: document.etag,
        })
    }

    /// Fetches and decodes one document.
    pub async fn get_typed<M: DocumentMapper>(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        mapper: &M,
    ) -> StoreResult<TypedDocument<M::Value>> {
        let document = self.client.get(collection, key).await?;
        Self::decode(document, mapper)
    }

    /// Fetches every document in a collection whose key passes `include`.
    ///
    /// Each document is decoded on its own. Undecodable ones are counted in
    /// [`Enumeration::skipped`] and do not fail the call.
    pub async fn get_all_typed<M, F>(
        &self,
        collection: &CollectionId,
        mapper: &M,
        include: F,
    ) -> StoreResult<Enumeration<M::Value>>
    where
        M: DocumentMapper,
        F: Fn(&DocumentKey) -> bool + Send + Sync,
    {
        let documents = self.client.get_all(collection).await?;

        let mut items = Vec::with_capacity(documents.len());
        let mut skipped = 0;
        for document in documents.into_iter().filter(|d| include(&d.key)) {
            let key = document.key.clone();
            match Self::decode(document, mapper) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!("Skipping undecodable document {}/{}: {}", collection, key, e);
                    skipped += 1;
                }
            }
        }

        debug!(
            "Enumerated {} documents in {} ({} skipped)",
            items.len(),
            collection,
            skipped
        );
        Ok(Enumeration { items, skipped })
    }

    /// Creates a document. `key = None` lets the service assign one.
    pub async fn create_typed<M: DocumentMapper>(
        &self,
        collection: &CollectionId,
        key: Option<&DocumentKey>,
        value: &M::Value,
        mapper: &M,
    ) -> StoreResult<TypedDocument<M::Value>> {
        let data = mapper.encode(value)?;
        let document = self.client.create(collection, key, &data).await?;
        info!("Stored new {}/{}", collection, document.key);
        Self::decode(document, mapper)
    }

    /// Replaces a document if its version is still `expected`.
    pub async fn update_typed<M: DocumentMapper>(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        value: &M::Value,
        expected: &ETag,
        mapper: &M,
    ) -> StoreResult<TypedDocument<M::Value>> {
        let data = mapper.encode(value)?;
        let document = self.client.update(collection, key, &data, expected).await?;
        info!("Updated {}/{}", collection, key);
        Self::decode(document, mapper)
    }

    pub async fn delete_typed(&self, collection: &CollectionId, key: &DocumentKey) -> StoreResult<()> {
        self.client.delete(collection, key).await?;
        info!("Deleted {}/{}", collection, key);
        Ok(())
    }

    /// Writes a document wholesale under a known key.
    ///
    /// Creates it if absent, otherwise updates it against the version just
    /// read. A concurrent writer between the two steps yields `Conflict`.
    pub async fn put_typed<M: DocumentMapper>(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        value: &M::Value,
        mapper: &M,
    ) -> StoreResult<TypedDocument<M::Value>> {
        let data = mapper.encode(value)?;

        let document = match self.client.get(collection, key).await {
            Ok(current) => {
                self.client
                    .update(collection, key, &data, &current.etag)
                    .await?
            }
            Err(e) if e.is_not_found() => self.client.create(collection, Some(key), &data).await?,
            Err(e) => return Err(e.into()),
        };

        info!("Put {}/{}", collection, key);
        Self::decode(document, mapper)
    }
}
