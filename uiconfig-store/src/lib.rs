//! Typed configuration storage for uiconfig.
//!
//! Layers typed entity access over an untyped, versioned document service:
//! - [`DocumentStore`]: generic typed CRUD, enumeration and put-by-key
//! - [`ConfigTypeCatalog`]: the derived set of package config types,
//!   maintained with an optimistic retry loop
//! - [`DefaultFallbackPolicy`]: which reads fall back to built-in defaults
//! - one facade per entity, bundled in [`UiConfigStorage`]
//!
//! The layer holds no locks and caches nothing. Concurrency control is
//! entirely the document service's version check.

mod catalog;
mod collections;
mod config;
mod device_groups;
mod document_store;
mod error;
mod fallback;
mod logo;
mod mapper;
mod packages;
mod storage;
mod theme;
mod user_settings;

pub use catalog::{ConfigTypeCatalog, DEFAULT_MAX_ATTEMPTS};
pub use collections::{CONFIG_TYPES_KEY, CollectionDescriptor, DESCRIPTORS, EntityKind, descriptor};
pub use config::{ENV_AZURE_MAPS_KEY, ENV_STORAGE_ADAPTER_URL, ServicesConfig};
pub use device_groups::DeviceGroupStore;
pub use document_store::{DocumentStore, Enumeration, TypedDocument};
pub use error::{ConfigError, StoreError, StoreResult};
pub use fallback::{DefaultFallbackPolicy, FallbackRule};
pub use logo::LogoStore;
pub use mapper::{DocumentMapper, JsonMapper};
pub use packages::PackageStore;
pub use storage::UiConfigStorage;
pub use theme::ThemeStore;
pub use user_settings::UserSettingStore;
