//! Device group facade.

use crate::collections::{EntityKind, descriptor};
use crate::document_store::{DocumentStore, TypedDocument};
use crate::error::StoreResult;
use crate::mapper::JsonMapper;
use uiconfig_model::DeviceGroup;
use uiconfig_types::{CollectionId, DocumentKey, ETag};

/// Device groups, versioned by ETag.
///
/// Every returned group carries its id and current ETag. Updates must present
/// the ETag last observed; a stale one fails with `Conflict` and is not retried.
#[derive(Clone)]
pub struct DeviceGroupStore {
    store: DocumentStore,
    mapper: JsonMapper<DeviceGroup>,
}

fn with_identity(doc: TypedDocument<DeviceGroup>) -> DeviceGroup {
    doc.value.with_identity(doc.key.into_string(), doc.etag)
}

impl DeviceGroupStore {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            store,
            mapper: JsonMapper::new(),
        }
    }

    fn collection() -> CollectionId {
        descriptor(EntityKind::DeviceGroup).collection_id()
    }

    pub async fn get_all(&self) -> StoreResult<Vec<DeviceGroup>> {
        let groups = self
            .store
            .get_all_typed(&Self::collection(), &self.mapper, |_| true)
            .await?;
        Ok(groups.items.into_iter().map(with_identity).collect())
    }

    pub async fn get(&self, id: &str) -> StoreResult<DeviceGroup> {
        let key = DocumentKey::new(id)?;
        let doc = self
            .store
            .get_typed(&Self::collection(), &key, &self.mapper)
            .await?;
        Ok(with_identity(doc))
    }

    /// Creates a group under a store-assigned id.
    pub async fn create(&self, group: DeviceGroup) -> StoreResult<DeviceGroup> {
        let doc = self
            .store
            .create_typed(&Self::collection(), None, &group.without_identity(), &self.mapper)
            .await?;
        Ok(with_identity(doc))
    }

    pub async fn update(&self, id: &str, group: DeviceGroup, etag: &ETag) -> StoreResult<DeviceGroup> {
        let key = DocumentKey::new(id)?;
        let doc = self
            .store
            .update_typed(
                &Self::collection(),
                &key,
                &group.without_identity(),
                etag,
                &self.mapper,
            )
            .await?;
        Ok(with_identity(doc))
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let key = DocumentKey::new(id)?;
        self.store.delete_typed(&Self::collection(), &key).await
    }
}
