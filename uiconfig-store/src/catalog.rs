//! Catalog of configuration types used by device-configuration packages.
//!
//! The catalog is one document, `packages/config-types`, holding a
//! [`ConfigTypeList`]. Concurrent package creations merge into it with an
//! optimistic read-modify-write loop: read the list and its version, compute
//! the union, then create or update against that version. A lost race shows
//! up as `Conflict` and the loop starts over with a fresh read.

use crate::collections::{CONFIG_TYPES_KEY, EntityKind, descriptor};
use crate::document_store::{DocumentStore, TypedDocument};
use crate::error::{StoreError, StoreResult};
use crate::mapper::JsonMapper;
use tracing::{debug, info, warn};
use uiconfig_model::ConfigTypeList;
use uiconfig_types::{CollectionId, DocumentKey};

/// Default number of read-modify-write attempts per insertion.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

#[derive(Clone)]
pub struct ConfigTypeCatalog {
    store: DocumentStore,
    mapper: JsonMapper<ConfigTypeList>,
    max_attempts: u32,
}

impl ConfigTypeCatalog {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            mapper: JsonMapper::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the attempt bound. Values below one are treated as one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn location() -> (CollectionId, DocumentKey) {
        (
            descriptor(EntityKind::Package).collection_id(),
            DocumentKey::from_static(CONFIG_TYPES_KEY),
        )
    }

    async fn read(&self) -> StoreResult<Option<TypedDocument<ConfigTypeList>>> {
        let (collection, key) = Self::location();
        match self.store.get_typed(&collection, &key, &self.mapper).await {
            Ok(doc) => Ok(Some(doc)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns every recorded configuration type. A missing catalog is empty.
    pub async fn list(&self) -> StoreResult<ConfigTypeList> {
        Ok(self.read().await?.map(|doc| doc.value).unwrap_or_default())
    }

    /// Records `config_type` in the catalog.
    ///
    /// Idempotent: a type already present causes no write. Fails with
    /// `ExternalDependency` once `max_attempts` writes have lost a race.
    pub async fn add(&self, config_type: &str) -> StoreResult<()> {
        let config_type = config_type.trim();
        if config_type.is_empty() {
            return Ok(());
        }

        let (collection, key) = Self::location();

        for attempt in 1..=self.max_attempts {
            let current = self.read().await?;

            let (list, etag) = match current {
                Some(doc) => (doc.value, Some(doc.etag)),
                None => (ConfigTypeList::new(), None),
            };

            let Some(next) = list.with_type(config_type) else {
                debug!("Config type {} already recorded", config_type);
                return Ok(());
            };

            let written = match &etag {
                None => {
                    self.store
                        .create_typed(&collection, Some(&key), &next, &self.mapper)
                        .await
                }
                Some(etag) => {
                    self.store
                        .update_typed(&collection, &key, &next, etag, &self.mapper)
                        .await
                }
            };

            match written {
                Ok(_) => {
                    info!("Recorded config type {}", config_type);
                    return Ok(());
                }
                Err(e) if e.is_conflict() => {
                    warn!(
                        "Config type catalog changed concurrently (attempt {}/{}): {}",
                        attempt, self.max_attempts, e
                    );
                }
                Err(StoreError::NotFound(what)) => {
                    return Err(StoreError::ExternalDependency(format!(
                        "config type catalog disappeared during update: {what}"
                    )));
                }
                Err(e) => return Err(e),
            }
        }

        Err(StoreError::ExternalDependency(format!(
            "config type catalog kept changing, gave up after {} attempts adding {}",
            self.max_attempts, config_type
        )))
    }
}
