//! Conversion between typed entities and opaque document payloads.

use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Encodes entities into document payloads and back.
///
/// Encoding failures are caller errors (`InvalidInput`). Decoding failures
/// mean the stored payload is unusable (`ExternalDependency`).
pub trait DocumentMapper: Send + Sync {
    type Value: Send + Sync;

    fn encode(&self, value: &Self::Value) -> StoreResult<String>;

    fn decode(&self, data: &str) -> StoreResult<Self::Value>;
}

/// serde_json-backed mapper for any serializable entity.
pub struct JsonMapper<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonMapper<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonMapper<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonMapper<T> {}

impl<T> std::fmt::Debug for JsonMapper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JsonMapper")
    }
}

impl<T> DocumentMapper for JsonMapper<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    type Value = T;

    fn encode(&self, value: &T) -> StoreResult<String> {
        serde_json::to_string(value)
            .map_err(|e| StoreError::InvalidInput(format!("cannot encode value: {e}")))
    }

    fn decode(&self, data: &str) -> StoreResult<T> {
        serde_json::from_str(data)
            .map_err(|e| StoreError::ExternalDependency(format!("cannot decode stored value: {e}")))
    }
}
