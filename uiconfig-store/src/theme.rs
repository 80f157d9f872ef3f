//! Theme facade with default fallback and map-key injection.

use crate::collections::{EntityKind, singleton};
use crate::document_store::DocumentStore;
use crate::error::{StoreError, StoreResult};
use crate::fallback::DefaultFallbackPolicy;
use crate::mapper::JsonMapper;
use uiconfig_model::Theme;
use uiconfig_types::{CollectionId, DocumentKey};

/// Solution-wide UI theme.
///
/// Reads never fail under the default policy. Every returned theme carries
/// the configured regional-map key, which is never persisted.
#[derive(Clone)]
pub struct ThemeStore {
    store: DocumentStore,
    policy: DefaultFallbackPolicy,
    maps_key: String,
    mapper: JsonMapper<Theme>,
}

impl ThemeStore {
    pub fn new(store: DocumentStore, policy: DefaultFallbackPolicy, maps_key: impl Into<String>) -> Self {
        Self {
            store,
            policy,
            maps_key: maps_key.into(),
            mapper: JsonMapper::new(),
        }
    }

    fn location() -> StoreResult<(CollectionId, DocumentKey)> {
        singleton(EntityKind::Theme)
            .ok_or_else(|| StoreError::InvalidInput("theme has no singleton key".to_string()))
    }

    pub async fn get(&self) -> StoreResult<Theme> {
        let (collection, key) = Self::location()?;
        let stored = self
            .store
            .get_typed(&collection, &key, &self.mapper)
            .await
            .map(|doc| doc.value);

        let theme = self.policy.resolve(EntityKind::Theme, stored, Theme::default)?;
        Ok(theme.with_maps_key(&self.maps_key))
    }

    /// Stores a theme wholesale and returns it as stored, with the map key.
    pub async fn set(&self, theme: Theme) -> StoreResult<Theme> {
        let (collection, key) = Self::location()?;
        let stored = self
            .store
            .put_typed(&collection, &key, &theme.without_maps_key(), &self.mapper)
            .await?;

        Ok(stored.value.with_maps_key(&self.maps_key))
    }
}
