//! Device groups and their filter conditions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uiconfig_types::ETag;

/// Comparison applied by a device group condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConditionOperator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    In,
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConditionOperator::Eq => "EQ",
            ConditionOperator::Ne => "NE",
            ConditionOperator::Lt => "LT",
            ConditionOperator::Gt => "GT",
            ConditionOperator::Le => "LE",
            ConditionOperator::Ge => "GE",
            ConditionOperator::In => "IN",
        };
        f.write_str(s)
    }
}

/// One filter clause, e.g. `properties.reported.Type EQ "Chiller"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceGroupCondition {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Operator")]
    pub operator: ConditionOperator,
    #[serde(rename = "Value")]
    pub value: Value,
}

/// A named, ordered set of conditions selecting devices.
///
/// `id` and `etag` mirror the document key and version. They are filled in
/// on read and stripped before a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceGroup {
    #[serde(
        rename = "Id",
        default,
        deserialize_with = "null_as_empty_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(rename = "DisplayName", default)]
    pub display_name: String,
    // Stored groups may carry a null condition list.
    #[serde(rename = "Conditions", default, deserialize_with = "null_as_empty")]
    pub conditions: Vec<DeviceGroupCondition>,
    #[serde(rename = "ETag", default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<ETag>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DeviceGroupCondition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<DeviceGroupCondition>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DeviceGroup {
    pub fn new(display_name: impl Into<String>, conditions: Vec<DeviceGroupCondition>) -> Self {
        Self {
            id: String::new(),
            display_name: display_name.into(),
            conditions,
            etag: None,
        }
    }

    /// Attaches the document key and version this group was read from.
    #[must_use]
    pub fn with_identity(mut self, id: impl Into<String>, etag: ETag) -> Self {
        self.id = id.into();
        self.etag = Some(etag);
        self
    }

    /// Drops the identity fields so that only the payload is persisted.
    #[must_use]
    pub fn without_identity(mut self) -> Self {
        self.id.clear();
        self.etag = None;
        self
    }
}
