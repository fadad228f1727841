//! Device registry entries
//!
//! Mirrors the items returned by `config/device_registry/list`.

use serde::{Deserialize, Serialize};

use crate::entity_registry::DisabledBy;

/// A registered device entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,

    /// `"Magic Areas"` for the devices created by the area-aggregation
    /// integration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_by_user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by: Option<DisabledBy>,
}

impl DeviceEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            area_id: None,
            manufacturer: None,
            model: None,
            name: Some(name.into()),
            name_by_user: None,
            disabled_by: None,
        }
    }

    pub fn with_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// The user's name for the device, falling back to the integration's
    pub fn display_name(&self) -> Option<&str> {
        self.name_by_user.as_deref().or(self.name.as_deref())
    }

    pub fn is_manufactured_by(&self, manufacturer: &str) -> bool {
        self.manufacturer.as_deref() == Some(manufacturer)
    }
}
