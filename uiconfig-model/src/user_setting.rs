use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form per-user settings, stored wholesale under the user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSetting(pub Value);

impl UserSetting {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for UserSetting {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
