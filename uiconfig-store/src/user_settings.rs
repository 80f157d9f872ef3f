//! Per-user settings facade.

use crate::collections::{EntityKind, descriptor};
use crate::document_store::DocumentStore;
use crate::error::StoreResult;
use crate::mapper::JsonMapper;
use uiconfig_model::UserSetting;
use uiconfig_types::DocumentKey;

/// Per-user settings keyed by user id. Reads have no default.
#[derive(Clone)]
pub struct UserSettingStore {
    store: DocumentStore,
    mapper: JsonMapper<UserSetting>,
}

impl UserSettingStore {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            mapper: JsonMapper::new(),
        }
    }

    pub async fn get(&self, user_id: &str) -> StoreResult<UserSetting> {
        let key = DocumentKey::new(user_id)?;
        let collection = descriptor(EntityKind::UserSetting).collection_id();
        let doc = self.store.get_typed(&collection, &key, &self.mapper).await?;
        Ok(doc.value)
    }

    pub async fn set(&self, user_id: &str, setting: UserSetting) -> StoreResult<UserSetting> {
        let key = DocumentKey::new(user_id)?;
        let collection = descriptor(EntityKind::UserSetting).collection_id();
        let doc = self
            .store
            .put_typed(&collection, &key, &setting, &self.mapper)
            .await?;
        Ok(doc.value)
    }
}
