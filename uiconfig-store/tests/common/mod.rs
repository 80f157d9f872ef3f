//! Test doubles for the storage layer.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Barrier;
use uiconfig_client::{
    ClientError, ClientResult, DocumentStoreClient, MemoryDocumentClient, ServiceStatus,
};
use uiconfig_store::{CONFIG_TYPES_KEY, ServicesConfig, UiConfigStorage};
use uiconfig_types::{CollectionId, Document, DocumentKey, ETag};

/// How catalog writes misbehave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFault {
    None,
    /// Every create/update of the catalog document reports a lost race.
    AlwaysConflict,
    /// Every catalog access reports the service as down.
    Unavailable,
}

/// Memory-backed client with counters and injectable faults.
pub struct TestClient {
    pub inner: MemoryDocumentClient,
    fail_all: bool,
    catalog_fault: CatalogFault,
    gate: Option<Barrier>,
    gated_reads: AtomicUsize,
    gate_size: usize,
    pub writes: AtomicUsize,
    pub catalog_reads: AtomicUsize,
}

impl TestClient {
    pub fn new() -> Self {
        Self {
            inner: MemoryDocumentClient::new(),
            fail_all: false,
            catalog_fault: CatalogFault::None,
            gate: None,
            gated_reads: AtomicUsize::new(0),
            gate_size: 0,
            writes: AtomicUsize::new(0),
            catalog_reads: AtomicUsize::new(0),
        }
    }

    /// A client whose every call fails as unreachable.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn with_catalog_fault(mut self, fault: CatalogFault) -> Self {
        self.catalog_fault = fault;
        self
    }

    /// Holds the first `n` catalog reads until all `n` have completed, so
    /// that `n` writers all observe the same catalog state.
    pub fn with_catalog_gate(mut self, n: usize) -> Self {
        self.gate = Some(Barrier::new(n));
        self.gate_size = n;
        self
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn catalog_reads(&self) -> usize {
        self.catalog_reads.load(Ordering::SeqCst)
    }

    fn is_catalog(key: Option<&DocumentKey>) -> bool {
        key.is_some_and(|k| k.as_str() == CONFIG_TYPES_KEY)
    }

    fn check_up(&self) -> ClientResult<()> {
        if self.fail_all {
            Err(ClientError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn check_catalog(&self, key: Option<&DocumentKey>, write: bool) -> ClientResult<()> {
        if !Self::is_catalog(key) {
            return Ok(());
        }
        match self.catalog_fault {
            CatalogFault::None => Ok(()),
            CatalogFault::AlwaysConflict if write => {
                Err(ClientError::Conflict("catalog changed".to_string()))
            }
            CatalogFault::AlwaysConflict => Ok(()),
            CatalogFault::Unavailable => {
                Err(ClientError::Unavailable("catalog shard down".to_string()))
            }
        }
    }
}

#[async_trait]
impl DocumentStoreClient for TestClient {
    async fn get(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<Document> {
        self.check_up()?;
        self.check_catalog(Some(key), false)?;

        if !Self::is_catalog(Some(key)) {
            return self.inner.get(collection, key).await;
        }

        self.catalog_reads.fetch_add(1, Ordering::SeqCst);
        let result = self.inner.get(collection, key).await;
        if let Some(gate) = &self.gate {
            if self.gated_reads.fetch_add(1, Ordering::SeqCst) < self.gate_size {
                gate.wait().await;
            }
        }
        result
    }

    async fn get_all(&self, collection: &CollectionId) -> ClientResult<Vec<Document>> {
        self.check_up()?;
        self.inner.get_all(collection).await
    }

    async fn create(
        &self,
        collection: &CollectionId,
        key: Option<&DocumentKey>,
        data: &str,
    ) -> ClientResult<Document> {
        self.check_up()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_catalog(key, true)?;
        self.inner.create(collection, key, data).await
    }

    async fn update(
        &self,
        collection: &CollectionId,
        key: &DocumentKey,
        data: &str,
        expected: &ETag,
    ) -> ClientResult<Document> {
        self.check_up()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_catalog(Some(key), true)?;
        self.inner.update(collection, key, data, expected).await
    }

    async fn delete(&self, collection: &CollectionId, key: &DocumentKey) -> ClientResult<()> {
        self.check_up()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(collection, key).await
    }

    async fn status(&self) -> ClientResult<ServiceStatus> {
        self.check_up()?;
        self.inner.status().await
    }
}

pub const MAPS_KEY: &str = "maps-key-123";

pub fn test_config() -> ServicesConfig {
    ServicesConfig {
        azure_maps_key: MAPS_KEY.to_string(),
        ..ServicesConfig::default()
    }
}

/// Storage over `client`, returning the client handle for inspection.
pub fn storage_with(client: TestClient) -> (UiConfigStorage, Arc<TestClient>) {
    let client = Arc::new(client);
    let storage = UiConfigStorage::new(client.clone(), &test_config());
    (storage, client)
}

pub fn memory_storage() -> (UiConfigStorage, Arc<TestClient>) {
    storage_with(TestClient::new())
}

pub const EDGE_CONTENT: &str = r#"{"content":{"modulesContent":{"$edgeAgent":{"properties.desired":{}}}}}"#;
pub const DEVICE_CONTENT: &str = r#"{"content":{"deviceContent":{"properties.desired.firmware":{"fwVersion":"1.0.1"}}}}"#;
