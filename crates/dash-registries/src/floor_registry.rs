//! Floor registry entries
//!
//! Mirrors the items returned by `config/floor_registry/list`.

use serde::{Deserialize, Serialize};

/// A registered floor entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorEntry {
    pub floor_id: String,

    /// Floor name (e.g., "Ground Floor", "First Floor")
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Floor level (None = unset, 0 = ground, positive = above, negative = below)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl FloorEntry {
    pub fn new(floor_id: impl Into<String>, name: impl Into<String>, level: Option<i32>) -> Self {
        Self {
            floor_id: floor_id.into(),
            name: name.into(),
            icon: None,
            level,
            aliases: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_floor_from_list_payload() {
        let floor: FloorEntry = serde_json::from_value(json!({
            "floor_id": "ground",
            "name": "Ground Floor",
            "aliases": [],
            "icon": null,
            "level": 0
        }))
        .unwrap();
        assert_eq!(floor.level, Some(0));
        assert_eq!(floor.icon, None);
    }
}
