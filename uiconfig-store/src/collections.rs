//! Static table of the collections this layer manages.

use crate::fallback::FallbackRule;
use uiconfig_types::{CollectionId, DocumentKey};

/// Reserved key in the packages collection holding the config-type catalog.
pub const CONFIG_TYPES_KEY: &str = "config-types";

/// Entity kinds, one per managed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Theme,
    Logo,
    UserSetting,
    DeviceGroup,
    Package,
}

/// Where an entity kind lives and how reads of it fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionDescriptor {
    pub kind: EntityKind,
    pub collection: &'static str,
    /// Fixed key for singleton collections.
    pub singleton_key: Option<&'static str>,
    pub fallback: FallbackRule,
    /// Whether writes to this collection maintain a derived index.
    pub maintains_index: bool,
}

impl CollectionDescriptor {
    pub fn collection_id(&self) -> CollectionId {
        CollectionId::from_static(self.collection)
    }

    pub fn singleton_key(&self) -> Option<DocumentKey> {
        self.singleton_key.map(DocumentKey::from_static)
    }
}

pub const DESCRIPTORS: [CollectionDescriptor; 5] = [
    CollectionDescriptor {
        kind: EntityKind::Theme,
        collection: "themesettings",
        singleton_key: Some("theme"),
        fallback: FallbackRule::ReplaceOnAnyFailure,
        maintains_index: false,
    },
    CollectionDescriptor {
        kind: EntityKind::Logo,
        collection: "logo",
        singleton_key: Some("logo"),
        fallback: FallbackRule::ReplaceOnAnyFailure,
        maintains_index: false,
    },
    CollectionDescriptor {
        kind: EntityKind::UserSetting,
        collection: "usersettings",
        singleton_key: None,
        fallback: FallbackRule::Propagate,
        maintains_index: false,
    },
    CollectionDescriptor {
        kind: EntityKind::DeviceGroup,
        collection: "devicegroups",
        singleton_key: None,
        fallback: FallbackRule::Propagate,
        maintains_index: false,
    },
    CollectionDescriptor {
        kind: EntityKind::Package,
        collection: "packages",
        singleton_key: None,
        fallback: FallbackRule::Propagate,
        maintains_index: true,
    },
];

/// Looks up the descriptor for an entity kind.
pub fn descriptor(kind: EntityKind) -> &'static CollectionDescriptor {
    match kind {
        EntityKind::Theme => &DESCRIPTORS[0],
        EntityKind::Logo => &DESCRIPTORS[1],
        EntityKind::UserSetting => &DESCRIPTORS[2],
        EntityKind::DeviceGroup => &DESCRIPTORS[3],
        EntityKind::Package => &DESCRIPTORS[4],
    }
}

/// Returns the document key for a singleton entity kind.
///
/// Non-singleton kinds have no fixed key and return `None`.
pub(crate) fn singleton(kind: EntityKind) -> Option<(CollectionId, DocumentKey)> {
    let descriptor = descriptor(kind);
    descriptor
        .singleton_key()
        .map(|key| (descriptor.collection_id(), key))
}
