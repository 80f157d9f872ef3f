//! Entity model for uiconfig.
//!
//! Defines the typed entities persisted in the document service:
//! - [`Theme`] and [`Logo`]: solution-wide UI branding, with compiled-in defaults
//! - [`UserSetting`]: free-form per-user JSON
//! - [`DeviceGroup`]: named device filters, versioned by ETag
//! - [`Package`]: deployment packages, validated against their [`PackageContent`]
//! - [`ConfigTypeList`]: the set of configuration types seen across packages
//!
//! Nothing here talks to storage; these are plain serde types plus the
//! merge and validation rules that belong to each entity.

mod config_types;
mod content;
mod device_group;
mod error;
mod logo;
mod package;
mod theme;
mod user_setting;

pub use config_types::ConfigTypeList;
pub use content::PackageContent;
pub use device_group::{ConditionOperator, DeviceGroup, DeviceGroupCondition};
pub use error::{ModelError, ModelResult};
pub use logo::Logo;
pub use package::{Package, PackageFilter, PackageType};
pub use theme::{AZURE_MAPS_KEY_FIELD, Theme};
pub use user_setting::UserSetting;
