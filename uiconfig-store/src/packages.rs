//! Deployment packages.
//!
//! Creating a device-configuration package records its config type in the
//! [`ConfigTypeCatalog`]; a failure there fails the whole call. Deleting a
//! package leaves the catalog untouched.

use crate::catalog::ConfigTypeCatalog;
use crate::collections::{CONFIG_TYPES_KEY, EntityKind, descriptor};
use crate::document_store::{DocumentStore, TypedDocument};
use crate::error::{StoreError, StoreResult};
use crate::mapper::JsonMapper;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};
use uiconfig_model::{Package, PackageFilter};
use uiconfig_types::{CollectionId, DocumentKey};

#[derive(Clone)]
pub struct PackageStore {
    store: DocumentStore,
    catalog: ConfigTypeCatalog,
    mapper: JsonMapper<Package>,
}

fn is_package_key(key: &DocumentKey) -> bool {
    key.as_str() != CONFIG_TYPES_KEY
}

fn with_id(doc: TypedDocument<Package>) -> Package {
    let mut package = doc.value;
    package.id = doc.key.into_string();
    package
}

impl PackageStore {
    pub fn new(store: DocumentStore, catalog: ConfigTypeCatalog) -> Self {
        Self {
            store,
            catalog,
            mapper: JsonMapper::new(),
        }
    }

    pub fn catalog(&self) -> &ConfigTypeCatalog {
        &self.catalog
    }

    fn collection() -> CollectionId {
        descriptor(EntityKind::Package).collection_id()
    }

    fn package_key(id: &str) -> StoreResult<DocumentKey> {
        let key = DocumentKey::new(id)?;
        if is_package_key(&key) {
            Ok(key)
        } else {
            Err(StoreError::InvalidInput(format!(
                "{CONFIG_TYPES_KEY} is reserved and is not a package"
            )))
        }
    }

    /// Validates and stores a new package under a store-assigned id.
    pub async fn add(&self, mut package: Package) -> StoreResult<Package> {
        package.validate()?;

        package.id.clear();
        package.date_created = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let doc = self
            .store
            .create_typed(&Self::collection(), None, &package, &self.mapper)
            .await?;
        let stored = with_id(doc);

        if let Some(config_type) = stored.catalog_config_type() {
            self.catalog.add(config_type).await?;
        }

        info!(
            "Added {} package {} ({})",
            stored.package_type, stored.id, stored.name
        );
        Ok(stored)
    }

    pub async fn get(&self, id: &str) -> StoreResult<Package> {
        if id == CONFIG_TYPES_KEY {
            return Err(StoreError::NotFound(format!("package {id}")));
        }
        let key = DocumentKey::new(id)?;

        let doc = self
            .store
            .get_typed(&Self::collection(), &key, &self.mapper)
            .await?;
        Ok(with_id(doc))
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Package>> {
        self.list(&PackageFilter::default()).await
    }

    /// Lists packages matching both filters. Blank filters match everything.
    pub async fn get_filtered(&self, package_type: &str, config_type: &str) -> StoreResult<Vec<Package>> {
        let filter = PackageFilter::parse(package_type, config_type)?;
        self.list(&filter).await
    }

    pub async fn list(&self, filter: &PackageFilter) -> StoreResult<Vec<Package>> {
        let packages = self
            .store
            .get_all_typed(&Self::collection(), &self.mapper, is_package_key)
            .await?;

        let matched: Vec<Package> = packages
            .items
            .into_iter()
            .map(with_id)
            .filter(|p| filter.matches(p))
            .collect();

        debug!("{} packages match {:?}", matched.len(), filter);
        Ok(matched)
    }

    /// All configuration types recorded so far, sorted.
    pub async fn get_all_config_types(&self) -> StoreResult<Vec<String>> {
        Ok(self.catalog.list().await?.into_vec())
    }

    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let key = Self::package_key(id)?;
        self.store.delete_typed(&Self::collection(), &key).await
    }
}
