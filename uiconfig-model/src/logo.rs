//! Branding logo and its partial-update merge.

use serde::{Deserialize, Serialize};

/// Branding logo shown in the UI header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// Image payload, usually base64.
    #[serde(rename = "Image", default)]
    pub image: String,
    /// MIME type of `image`.
    #[serde(rename = "Type", default)]
    pub image_type: String,
    /// Display name next to the logo. `None` on a partial update keeps the old name.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "IsDefault", default)]
    pub is_default: bool,
}

impl Logo {
    pub const DEFAULT_NAME: &'static str = "Remote Monitoring";
    pub const DEFAULT_TYPE: &'static str = "image/svg+xml";
    pub const DEFAULT_IMAGE: &'static str = "";

    pub fn new(image: impl Into<String>, image_type: impl Into<String>, name: Option<String>) -> Self {
        Self {
            image: image.into(),
            image_type: image_type.into(),
            name,
            is_default: false,
        }
    }

    /// Merges an explicit update onto the previously stored logo.
    ///
    /// Image and type always come from `self`. A missing name is inherited
    /// from `previous`. The result is never the default.
    #[must_use]
    pub fn merged_onto(self, previous: &Logo) -> Logo {
        Logo {
            image: self.image,
            image_type: self.image_type,
            name: self.name.or_else(|| previous.name.clone()),
            is_default: false,
        }
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            image: Self::DEFAULT_IMAGE.to_string(),
            image_type: Self::DEFAULT_TYPE.to_string(),
            name: Some(Self::DEFAULT_NAME.to_string()),
            is_default: true,
        }
    }
}
