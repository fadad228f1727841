//! Resolved registry records
//!
//! Raw registry entries enriched with the relationships the index resolves:
//! inherited areas and floors, domain tags, owned entities and devices.

use indexmap::IndexMap;
use serde::Serialize;

use dash_core::DomainTag;

/// An entity with its area and floor resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntity {
    pub entity_id: String,
    pub device_id: Option<String>,

    /// Own area, else the device's area, else `undisclosed`
    pub area_id: String,

    /// Floor inherited through the area
    pub floor_id: Option<String>,

    pub platform: String,
    pub translation_key: Option<String>,
    pub device_class: Option<String>,
    pub tag: DomainTag,
}

impl ResolvedEntity {
    pub fn domain(&self) -> &str {
        self.tag.domain()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDevice {
    pub id: String,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    /// Undisclosed for devices without an area
    pub area_id: String,
    pub floor_id: Option<String>,
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedArea {
    pub area_id: String,
    pub name: String,

    /// Slugified name; `undisclosed` for the undisclosed area
    pub slug: String,

    pub floor_id: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i64>,
    pub hidden: bool,

    /// Entity ids grouped by domain tag, in registry order
    pub domains: IndexMap<DomainTag, Vec<String>>,
    pub devices: Vec<String>,
    pub entities: Vec<String>,

    /// Key of the Magic Areas device aggregating this area
    pub magic_device: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFloor {
    pub floor_id: String,
    pub name: String,
    pub icon: Option<String>,
    pub level: Option<i32>,
    pub hidden: bool,
    pub areas_slug: Vec<String>,
}

/// Virtual device created by Magic Areas for one area (or the whole home)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagicAreaDevice {
    pub id: String,

    /// Area slug, or `global`
    pub key: String,

    pub area_name: String,

    /// Aggregate and group entities by translation key
    pub entities: IndexMap<String, ResolvedEntity>,
}
