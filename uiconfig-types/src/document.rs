use crate::ids::{CollectionId, DocumentKey, ETag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One versioned record in a named collection.
///
/// `data` is the serialized payload; the storage layer never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub collection_id: CollectionId,
    pub key: DocumentKey,
    pub data: String,
    pub etag: ETag,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a document with no timestamps.
    #[must_use]
    pub fn new(
        collection_id: CollectionId,
        key: DocumentKey,
        data: impl Into<String>,
        etag: ETag,
    ) -> Self {
        Self {
            collection_id,
            key,
            data: data.into(),
            etag,
            created: None,
            modified: None,
        }
    }

    /// Sets both timestamps.
    #[must_use]
    pub fn with_timestamps(mut self, created: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self.modified = Some(modified);
        self
    }

    /// Returns true if `etag` matches this document's current version.
    #[must_use]
    pub fn is_version(&self, etag: &ETag) -> bool {
        &self.etag == etag
    }
}
