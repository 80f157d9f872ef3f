//! Service configuration.

use crate::catalog::DEFAULT_MAX_ATTEMPTS;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uiconfig_client::StorageAdapterConfig;

/// Environment variable overriding [`ServicesConfig::azure_maps_key`].
pub const ENV_AZURE_MAPS_KEY: &str = "UICONFIG_AZURE_MAPS_KEY";
/// Environment variable overriding the storage adapter base URL.
pub const ENV_STORAGE_ADAPTER_URL: &str = "UICONFIG_STORAGE_ADAPTER_URL";

/// Settings injected into the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Regional-map access key merged into every theme read.
    pub azure_maps_key: String,
    /// Attempt bound for config-type catalog merges.
    pub catalog_max_attempts: u32,
    pub storage_adapter: StorageAdapterConfig,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            azure_maps_key: String::new(),
            catalog_max_attempts: DEFAULT_MAX_ATTEMPTS,
            storage_adapter: StorageAdapterConfig::default(),
        }
    }
}

impl ServicesConfig {
    /// Loads a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Applies overrides from the process environment.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    /// Empty values are ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(ENV_AZURE_MAPS_KEY) {
            self.azure_maps_key = key;
        }
        if let Some(url) = non_empty(ENV_STORAGE_ADAPTER_URL) {
            self.storage_adapter.base_url = url;
        }
        self
    }
}
