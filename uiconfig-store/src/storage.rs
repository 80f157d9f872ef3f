//! Top-level handle bundling every facade over one document service.

use crate::catalog::ConfigTypeCatalog;
use crate::config::ServicesConfig;
use crate::device_groups::DeviceGroupStore;
use crate::document_store::DocumentStore;
use crate::error::StoreResult;
use crate::fallback::DefaultFallbackPolicy;
use crate::logo::LogoStore;
use crate::packages::PackageStore;
use crate::theme::ThemeStore;
use crate::user_settings::UserSettingStore;
use std::sync::Arc;
use tracing::info;
use uiconfig_client::{DocumentStoreClient, ServiceStatus, StorageAdapterClient};

/// Every entity facade over one document service.
#[derive(Clone)]
pub struct UiConfigStorage {
    store: DocumentStore,
    pub theme: ThemeStore,
    pub logo: LogoStore,
    pub user_settings: UserSettingStore,
    pub device_groups: DeviceGroupStore,
    pub packages: PackageStore,
}

impl UiConfigStorage {
    pub fn new(client: Arc<dyn DocumentStoreClient>, config: &ServicesConfig) -> Self {
        Self::with_policy(client, config, DefaultFallbackPolicy::default())
    }

    pub fn with_policy(
        client: Arc<dyn DocumentStoreClient>,
        config: &ServicesConfig,
        policy: DefaultFallbackPolicy,
    ) -> Self {
        let store = DocumentStore::new(client);
        let catalog =
            ConfigTypeCatalog::new(store.clone()).with_max_attempts(config.catalog_max_attempts);

        Self {
            theme: ThemeStore::new(store.clone(), policy.clone(), config.azure_maps_key.clone()),
            logo: LogoStore::new(store.clone(), policy),
            user_settings: UserSettingStore::new(store.clone()),
            device_groups: DeviceGroupStore::new(store.clone()),
            packages: PackageStore::new(store.clone(), catalog),
            store,
        }
    }

    /// Connects to the storage adapter named in `config`.
    pub fn connect(config: &ServicesConfig) -> StoreResult<Self> {
        let client = StorageAdapterClient::new(config.storage_adapter.clone())?;
        info!(
            "Using storage adapter at {}",
            config.storage_adapter.base_url
        );
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Probes the document service.
    pub async fn ping(&self) -> StoreResult<ServiceStatus> {
        Ok(self.store.client().status().await?)
    }
}
