//! Structured view of a package's configuration document.
//!
//! Only the parts that decide the package's shape are modelled: a package
//! either deploys edge modules (`content.modulesContent`) or device-level
//! twin content (`content.deviceContent`). Every other field is opaque.

use crate::error::{ModelError, ModelResult};
use crate::package::PackageType;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigurationContent {
    #[serde(rename = "modulesContent", alias = "ModulesContent", default)]
    modules_content: Option<Map<String, Value>>,
    #[serde(rename = "deviceContent", alias = "DeviceContent", default)]
    device_content: Option<Map<String, Value>>,
}

/// Parsed package content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageContent {
    #[serde(alias = "Content", default)]
    content: Option<ConfigurationContent>,
}

fn non_empty(map: &Option<Map<String, Value>>) -> bool {
    map.as_ref().is_some_and(|m| !m.is_empty())
}

impl PackageContent {
    /// Parses package content text.
    ///
    /// Fails if the text is not a JSON object or its `content` section has
    /// the wrong shape.
    pub fn parse(text: &str) -> ModelResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ModelError::InvalidContent(format!("not valid JSON: {e}")))?;

        if !value.is_object() {
            return Err(ModelError::InvalidContent(
                "expected a configuration object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| ModelError::InvalidContent(format!("malformed configuration: {e}")))
    }

    pub fn has_modules_content(&self) -> bool {
        self.content
            .as_ref()
            .is_some_and(|c| non_empty(&c.modules_content))
    }

    pub fn has_device_content(&self) -> bool {
        self.content
            .as_ref()
            .is_some_and(|c| non_empty(&c.device_content))
    }

    /// Derives the package type from the content alone.
    ///
    /// Returns `None` when the content carries neither modules nor device
    /// content, or (inconsistently) both.
    pub fn inferred_type(&self) -> Option<PackageType> {
        match (self.has_modules_content(), self.has_device_content()) {
            (true, false) => Some(PackageType::EdgeManifest),
            (false, true) => Some(PackageType::DeviceConfiguration),
            _ => None,
        }
    }

    /// Checks that the content is consistent with `package_type`.
    pub fn validate_for(&self, package_type: PackageType) -> ModelResult<()> {
        let reason = match package_type {
            PackageType::EdgeManifest if self.has_device_content() => {
                "edge manifest must not carry deviceContent"
            }
            PackageType::DeviceConfiguration if self.has_modules_content() => {
                "device configuration must not carry modulesContent"
            }
            _ => return Ok(()),
        };

        Err(ModelError::TypeMismatch {
            package_type: package_type.to_string(),
            reason: reason.to_string(),
        })
    }
}
