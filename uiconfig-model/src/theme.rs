//! UI theme payload.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field injected into every theme returned to callers.
pub const AZURE_MAPS_KEY_FIELD: &str = "AzureMapsKey";

/// Solution-wide UI theme.
///
/// The payload is free-form; only `Name` and `Description` are known to the
/// default. Stored themes never contain the maps key, it is merged on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(Map<String, Value>);

impl Theme {
    pub const DEFAULT_NAME: &'static str = "Default";
    pub const DEFAULT_DESCRIPTION: &'static str = "Default Theme";

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ModelError::NotAnObject("theme")),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("Name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("Description").and_then(Value::as_str)
    }

    pub fn maps_key(&self) -> Option<&str> {
        self.0.get(AZURE_MAPS_KEY_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the theme with the regional-map access key set.
    #[must_use]
    pub fn with_maps_key(mut self, key: &str) -> Self {
        self.0
            .insert(AZURE_MAPS_KEY_FIELD.to_string(), Value::String(key.to_string()));
        self
    }

    /// Returns the theme without the access key, as it should be persisted.
    #[must_use]
    pub fn without_maps_key(mut self) -> Self {
        self.0.remove(AZURE_MAPS_KEY_FIELD);
        self
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut map = Map::new();
        map.insert("Name".to_string(), Value::String(Self::DEFAULT_NAME.to_string()));
        map.insert(
            "Description".to_string(),
            Value::String(Self::DEFAULT_DESCRIPTION.to_string()),
        );
        Self(map)
    }
}
