//! Area registry entries
//!
//! Mirrors the items returned by `config/area_registry/list`.

use serde::{Deserialize, Serialize};

/// A registered area entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaEntry {
    pub area_id: String,

    /// Area name (e.g., "Living Room")
    pub name: String,

    /// Floor this area belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,

    /// Area icon (e.g., "mdi:sofa")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl AreaEntry {
    pub fn new(area_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            area_id: area_id.into(),
            name: name.into(),
            floor_id: None,
            icon: None,
            picture: None,
            aliases: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_floor(mut self, floor_id: impl Into<String>) -> Self {
        self.floor_id = Some(floor_id.into());
        self
    }
}
