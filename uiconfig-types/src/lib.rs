//! Core type definitions for uiconfig.
//!
//! This crate defines the storage-level types shared by every layer:
//! - Collection and document identifiers
//! - Opaque version tokens (ETags)
//! - The untyped [`Document`] record exchanged with the backing store
//!
//! Entity types (themes, packages, device groups, ...) live in
//! `uiconfig-model`; nothing here knows how a payload is shaped.

mod document;
mod ids;

pub use document::Document;
pub use ids::{CollectionId, DocumentKey, ETag};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}
