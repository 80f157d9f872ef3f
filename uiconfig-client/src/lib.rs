//! Document service clients for uiconfig.
//!
//! Provides the [`DocumentStoreClient`] contract the storage layer is built
//! on, plus two implementations:
//! - [`StorageAdapterClient`] for the storage-adapter REST service
//! - [`MemoryDocumentClient`] for tests and embedded use
//!
//! Clients deal only in untyped [`Document`](uiconfig_types::Document)s;
//! typed access lives in `uiconfig-store`.

mod client;
mod error;
pub mod http;
pub mod memory;

pub use client::{DocumentStoreClient, ServiceStatus};
pub use error::{ClientError, ClientResult};
pub use http::{StorageAdapterClient, StorageAdapterConfig};
pub use memory::MemoryDocumentClient;
