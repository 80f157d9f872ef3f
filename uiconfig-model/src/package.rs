//! Deployment packages, package types and list filters.
//!
//! A package's content is kept as text and only parsed for validation; see
//! [`PackageContent`](crate::PackageContent).

use crate::content::PackageContent;
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a package deploys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageType {
    /// Edge module deployment manifest.
    #[serde(rename = "edgeManifest")]
    EdgeManifest,
    /// Device-level configuration (e.g. firmware).
    #[serde(rename = "deviceConfiguration")]
    DeviceConfiguration,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::EdgeManifest => "edgeManifest",
            PackageType::DeviceConfiguration => "deviceConfiguration",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        [PackageType::EdgeManifest, PackageType::DeviceConfiguration]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownPackageType(s.to_string()))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A deployable package.
///
/// `id` mirrors the document key and is not persisted in the payload.
/// An empty `config_type` means the package has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(
        rename = "Id",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "PackageType")]
    pub package_type: PackageType,
    #[serde(rename = "ConfigType", default, deserialize_with = "null_as_empty")]
    pub config_type: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "DateCreated", default, deserialize_with = "null_as_empty")]
    pub date_created: String,
}

impl Package {
    pub fn new(
        name: impl Into<String>,
        package_type: PackageType,
        config_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            package_type,
            config_type: config_type.into(),
            content: content.into(),
            date_created: String::new(),
        }
    }

    /// The configuration type, if one is set.
    pub fn config_type(&self) -> Option<&str> {
        let config_type = self.config_type.trim();
        (!config_type.is_empty()).then_some(config_type)
    }

    /// The configuration type this package contributes to the catalog.
    ///
    /// Only device-configuration packages are tracked.
    pub fn catalog_config_type(&self) -> Option<&str> {
        match self.package_type {
            PackageType::DeviceConfiguration => self.config_type(),
            PackageType::EdgeManifest => None,
        }
    }

    /// Parses the content and checks it against the declared package type.
    pub fn validate(&self) -> ModelResult<PackageContent> {
        let content = PackageContent::parse(&self.content)?;
        content.validate_for(self.package_type)?;
        Ok(content)
    }
}

/// Selection applied when listing packages. `None` fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    pub package_type: Option<PackageType>,
    pub config_type: Option<String>,
}

impl PackageFilter {
    /// Builds a filter from raw query strings; blank strings are wildcards.
    pub fn parse(package_type: &str, config_type: &str) -> ModelResult<Self> {
        let package_type = match package_type.trim() {
            "" => None,
            s => Some(s.parse()?),
        };
        let config_type = match config_type.trim() {
            "" => None,
            s => Some(s.to_string()),
        };

        Ok(Self {
            package_type,
            config_type,
        })
    }

    pub fn is_wildcard(&self) -> bool {
        self.package_type.is_none() && self.config_type.is_none()
    }

    pub fn matches(&self, package: &Package) -> bool {
        let type_matches = self
            .package_type
            .is_none_or(|t| t == package.package_type);
        let config_matches = self
            .config_type
            .as_deref()
            .is_none_or(|c| package.config_type() == Some(c));

        type_matches && config_matches
    }
}
