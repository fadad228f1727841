//! Entity registry entries
//!
//! Mirrors the items returned by `config/entity_registry/list`. Only the
//! fields the strategy indexes on are modelled; everything else on the wire
//! is ignored.

use serde::{Deserialize, Serialize};

/// Reason an entity was disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledBy {
    ConfigEntry,
    Device,
    Hass,
    Integration,
    User,
    #[serde(other)]
    Unknown,
}

/// Reason an entity was hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenBy {
    Integration,
    User,
    #[serde(other)]
    Unknown,
}

/// Entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

/// A registered entity entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityEntry {
    /// Full entity ID (domain.object_id)
    pub entity_id: String,

    /// Parent device ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// Assigned area, overriding the device's area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,

    /// Integration that provides this entity
    pub platform: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_by: Option<HiddenBy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_by: Option<DisabledBy>,

    /// Translation key, used by Magic Areas to name its aggregate entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,

    /// User-set name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl EntityEntry {
    pub fn new(entity_id: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            device_id: None,
            area_id: None,
            platform: platform.into(),
            hidden_by: None,
            disabled_by: None,
            translation_key: None,
            entity_category: None,
            name: None,
            labels: Vec::new(),
        }
    }

    pub fn with_area(mut self, area_id: impl Into<String>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_translation_key(mut self, key: impl Into<String>) -> Self {
        self.translation_key = Some(key.into());
        self
    }

    pub fn with_category(mut self, category: EntityCategory) -> Self {
        self.entity_category = Some(category);
        self
    }

    /// Get the domain from entity_id
    pub fn domain(&self) -> &str {
        dash_core::domain_of(&self.entity_id)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled_by.is_some()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden_by.is_some()
    }

    /// Config or diagnostic entity
    pub fn is_categorized(&self) -> bool {
        self.entity_category.is_some()
    }
}
