//! Identifier types used throughout uiconfig.
//!
//! Keys and collection ids are path segments in the storage adapter's REST
//! surface, so they must be non-empty and free of `/`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

fn validate_segment(kind: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidIdentifier(format!("{kind} must not be empty")));
    }
    if value.contains('/') {
        return Err(Error::InvalidIdentifier(format!(
            "{kind} must not contain '/': {value}"
        )));
    }
    Ok(())
}

/// Name of a collection in the document service (e.g. `packages`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionId(String);

impl CollectionId {
    /// Creates a collection id, rejecting empty names and names containing `/`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_segment("collection id", &id)?;
        Ok(Self(id))
    }

    /// Creates a collection id from a compiled-in name.
    #[must_use]
    pub fn from_static(id: &'static str) -> Self {
        debug_assert!(validate_segment("collection id", id).is_ok());
        Self(id.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CollectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Key of a document, unique within its collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Creates a document key, rejecting empty keys and keys containing `/`.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_segment("document key", &key)?;
        Ok(Self(key))
    }

    /// Creates a key from a compiled-in name (reserved and singleton keys).
    #[must_use]
    pub fn from_static(key: &'static str) -> Self {
        debug_assert!(validate_segment("document key", key).is_ok());
        Self(key.to_string())
    }

    /// Generates a fresh random key, as a store would when assigning one.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocumentKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Opaque version token of a document.
///
/// Changes on every successful write. Only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ETag(String);

impl ETag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Generates a fresh random version token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ETag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl From<&str> for ETag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}
