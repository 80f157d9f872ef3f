//! The derived catalog of configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of configuration types used by device-configuration packages.
///
/// Persisted as `{"ConfigTypes": [...]}` with entries sorted and distinct.
/// Only ever grows: there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigTypeList {
    #[serde(rename = "ConfigTypes", default)]
    config_types: BTreeSet<String>,
}

impl ConfigTypeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, config_type: &str) -> bool {
        self.config_types.contains(config_type.trim())
    }

    /// Adds a type. Returns false if it was already present or is blank.
    pub fn insert(&mut self, config_type: &str) -> bool {
        let config_type = config_type.trim();
        if config_type.is_empty() {
            return false;
        }
        self.config_types.insert(config_type.to_string())
    }

    /// Returns `self ∪ {config_type}`, or `None` if nothing would change.
    #[must_use]
    pub fn with_type(&self, config_type: &str) -> Option<Self> {
        let mut next = self.clone();
        next.insert(config_type).then_some(next)
    }

    pub fn len(&self) -> usize {
        self.config_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config_types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.config_types.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.config_types.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ConfigTypeList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for config_type in iter {
            list.insert(config_type.as_ref());
        }
        list
    }
}
