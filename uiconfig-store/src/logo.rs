//! Logo facade.

use crate::collections::{EntityKind, singleton};
use crate::document_store::DocumentStore;
use crate::error::{StoreError, StoreResult};
use crate::fallback::DefaultFallbackPolicy;
use crate::mapper::JsonMapper;
use uiconfig_model::Logo;
use uiconfig_types::{CollectionId, DocumentKey};

/// Branding logo, falling back to the built-in logo on read failures.
#[derive(Clone)]
pub struct LogoStore {
    store: DocumentStore,
    policy: DefaultFallbackPolicy,
    mapper: JsonMapper<Logo>,
}

impl LogoStore {
    pub fn new(store: DocumentStore, policy: DefaultFallbackPolicy) -> Self {
        Self {
            store,
            policy,
            mapper: JsonMapper::new(),
        }
    }

    fn location() -> StoreResult<(CollectionId, DocumentKey)> {
        singleton(EntityKind::Logo)
            .ok_or_else(|| StoreError::InvalidInput("logo has no singleton key".to_string()))
    }

    pub async fn get(&self) -> StoreResult<Logo> {
        let (collection, key) = Self::location()?;
        let stored = self
            .store
            .get_typed(&collection, &key, &self.mapper)
            .await
            .map(|doc| doc.value);

        self.policy.resolve(EntityKind::Logo, stored, Logo::default)
    }

    /// Stores a new logo.
    ///
    /// A logo without a name keeps the name of the one it replaces. The
    /// stored logo is never marked default.
    pub async fn set(&self, logo: Logo) -> StoreResult<Logo> {
        let (collection, key) = Self::location()?;
        let previous = self.get().await.unwrap_or_default();
        let merged = logo.merged_onto(&previous);

        let stored = self
            .store
            .put_typed(&collection, &key, &merged, &self.mapper)
            .await?;
        Ok(stored.value)
    }
}
