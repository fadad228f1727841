//! Registry index
//!
//! Turns the flat registry arrays into cross-indexed maps in a handful of
//! linear passes:
//!
//! 1. lookup tables (area by id, floor by id, device area by device id)
//! 2. entities: filter, tag, resolve area, bucket per area/domain/device
//! 3. devices: attach entities and floor, split off Magic Areas devices
//! 4. areas (plus the undisclosed area): slug, domain grouping, devices
//! 5. floors (plus the undisclosed floor): member area slugs
//!
//! The index is built once per dashboard and never mutated afterwards.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use dash_config::{cmp_order, StrategyOptions};
use dash_core::{
    domains, DomainTag, SlugCache, StateSnapshot, GLOBAL, MAGIC_AREAS_DOMAIN, MAGIC_AREAS_NAME,
    UNDISCLOSED,
};
use dash_registries::{AreaEntry, DeviceEntry, FloorEntry, RegistrySnapshot};

use crate::magic_areas;
use crate::model::{MagicAreaDevice, ResolvedArea, ResolvedDevice, ResolvedEntity, ResolvedFloor};

#[derive(Debug, Default)]
pub struct RegistryIndex {
    /// Every kept entity, Magic Areas entities included
    pub entities: IndexMap<String, ResolvedEntity>,

    /// Entity ids per domain tag, Magic Areas entities excluded
    pub domains: IndexMap<DomainTag, Vec<String>>,

    pub devices: IndexMap<String, ResolvedDevice>,

    /// Areas keyed by slug
    pub areas: IndexMap<String, ResolvedArea>,

    pub floors: IndexMap<String, ResolvedFloor>,

    /// Magic Areas devices keyed by area slug or `global`
    pub magic_areas: IndexMap<String, MagicAreaDevice>,

    /// Area id to slug
    area_slugs: HashMap<String, String>,
}

/// Why an entity was left out of the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    NoState,
    Hidden,
    Disabled,
    Excluded,
    ExcludedDevice,
    ExcludedDomain,
    ConfigEntity,
    ExcludedDeviceClass,
}

impl RegistryIndex {
    /// Build the index from fetched registries, live states and the merged
    /// options
    pub fn build(
        registries: &RegistrySnapshot,
        states: &StateSnapshot,
        options: &StrategyOptions,
    ) -> Self {
        let plugin = &registries.plugin;
        let slugs = SlugCache::new();

        // Pass 1: lookup tables
        let area_by_id: HashMap<&str, &AreaEntry> = registries
            .areas
            .iter()
            .map(|a| (a.area_id.as_str(), a))
            .collect();
        let device_by_id: HashMap<&str, &DeviceEntry> = registries
            .devices
            .iter()
            .map(|d| (d.id.as_str(), d))
            .collect();
        let excluded_devices: HashSet<&str> = plugin
            .excluded_targets
            .device_id
            .iter()
            .map(String::as_str)
            .collect();
        let undisclosed = !options.is_undisclosed_hidden();
        let undisclosed_floor = undisclosed.then(|| {
            options
                .area(UNDISCLOSED)
                .and_then(|a| a.floor_id.clone())
                .unwrap_or_else(|| UNDISCLOSED.to_string())
        });

        let area_floor = |area_id: &str| -> Option<String> {
            match area_by_id.get(area_id) {
                Some(area) => area.floor_id.clone().or_else(|| undisclosed_floor.clone()),
                None if area_id == UNDISCLOSED => undisclosed_floor.clone(),
                None => None,
            }
        };

        // Pass 2: entities
        let mut index = RegistryIndex::default();
        let mut area_entities: HashMap<String, Vec<String>> = HashMap::new();
        let mut device_entities: HashMap<String, Vec<String>> = HashMap::new();

        for entry in &registries.entities {
            let id = entry.entity_id.as_str();
            let domain = entry.domain();

            let skip = if !states.contains(id) {
                Some(Skip::NoState)
            } else if entry.is_hidden() {
                Some(Skip::Hidden)
            } else if entry.is_disabled() {
                Some(Skip::Disabled)
            } else if plugin.excluded_targets.entity_id.iter().any(|e| e == id)
                || options.is_entity_hidden(id)
            {
                Some(Skip::Excluded)
            } else if entry
                .device_id
                .as_deref()
                .is_some_and(|d| excluded_devices.contains(d))
            {
                Some(Skip::ExcludedDevice)
            } else if plugin.is_domain_excluded(domain) {
                Some(Skip::ExcludedDomain)
            } else if entry.is_categorized() && options.hides_config_entities(domain) {
                Some(Skip::ConfigEntity)
            } else {
                None
            };
            if let Some(reason) = skip {
                debug!(entity_id = id, ?reason, "Skipping entity");
                continue;
            }

            let device_class = if domains::has_device_class(domain) {
                states.device_class(id).map(str::to_string)
            } else {
                None
            };
            if device_class
                .as_deref()
                .is_some_and(|c| plugin.is_device_class_excluded(c))
            {
                debug!(entity_id = id, reason = ?Skip::ExcludedDeviceClass, "Skipping entity");
                continue;
            }

            let tag = DomainTag::new(domain, device_class.as_deref());
            let area_id = entry
                .area_id
                .clone()
                .or_else(|| {
                    entry
                        .device_id
                        .as_deref()
                        .and_then(|d| device_by_id.get(d))
                        .and_then(|d| d.area_id.clone())
                })
                .unwrap_or_else(|| UNDISCLOSED.to_string());

            let resolved = ResolvedEntity {
                entity_id: entry.entity_id.clone(),
                device_id: entry.device_id.clone(),
                floor_id: area_floor(&area_id),
                area_id,
                platform: entry.platform.clone(),
                translation_key: entry.translation_key.clone(),
                device_class,
                tag,
            };

            if let Some(device_id) = &resolved.device_id {
                device_entities
                    .entry(device_id.clone())
                    .or_default()
                    .push(resolved.entity_id.clone());
            }
            if resolved.platform != MAGIC_AREAS_DOMAIN {
                index
                    .domains
                    .entry(resolved.tag.clone())
                    .or_default()
                    .push(resolved.entity_id.clone());
                area_entities
                    .entry(resolved.area_id.clone())
                    .or_default()
                    .push(resolved.entity_id.clone());
            }
            index.entities.insert(resolved.entity_id.clone(), resolved);
        }

        // Pass 3: devices
        let mut area_devices: HashMap<String, Vec<String>> = HashMap::new();
        for device in &registries.devices {
            let entities = device_entities.remove(&device.id).unwrap_or_default();

            if device.is_manufactured_by(MAGIC_AREAS_NAME) {
                if let Some(magic) = index.magic_area_device(device, &entities, &slugs) {
                    debug!(key = %magic.key, entities = magic.entities.len(), "Magic Areas device");
                    index.magic_areas.insert(magic.key.clone(), magic);
                }
                continue;
            }

            let area_id = device
                .area_id
                .clone()
                .unwrap_or_else(|| UNDISCLOSED.to_string());
            area_devices
                .entry(area_id.clone())
                .or_default()
                .push(device.id.clone());
            index.devices.insert(
                device.id.clone(),
                ResolvedDevice {
                    id: device.id.clone(),
                    name: device.display_name().map(str::to_string),
                    manufacturer: device.manufacturer.clone(),
                    floor_id: area_floor(&area_id),
                    area_id,
                    entities,
                },
            );
        }

        // Pass 4: areas, the undisclosed one appended last
        let mut areas: Vec<AreaEntry> = registries.areas.clone();
        if undisclosed {
            areas.push(undisclosed_area(options, undisclosed_floor.clone()));
        }
        for area in &areas {
            let is_undisclosed = area.area_id == UNDISCLOSED;
            let slug = if is_undisclosed {
                UNDISCLOSED.to_string()
            } else {
                slugs.get(&area.name)
            };
            if index.areas.contains_key(&slug) {
                warn!(area_id = %area.area_id, %slug, "Duplicate area slug, keeping the first");
                continue;
            }

            let entities = area_entities.remove(&area.area_id).unwrap_or_default();
            let mut grouped: IndexMap<DomainTag, Vec<String>> = IndexMap::new();
            for entity_id in &entities {
                if let Some(entity) = index.entities.get(entity_id) {
                    grouped
                        .entry(entity.tag.clone())
                        .or_default()
                        .push(entity_id.clone());
                }
            }

            let area_options = options.area(&area.area_id);
            let hidden = options.is_area_hidden(&area.area_id)
                || registries
                    .plugin
                    .excluded_targets
                    .area_id
                    .iter()
                    .any(|a| a == &area.area_id);
            let floor_id = if is_undisclosed {
                undisclosed_floor.clone()
            } else {
                area.floor_id.clone().or_else(|| undisclosed_floor.clone())
            };

            index.area_slugs.insert(area.area_id.clone(), slug.clone());
            index.areas.insert(
                slug.clone(),
                ResolvedArea {
                    area_id: area.area_id.clone(),
                    name: area_options
                        .and_then(|a| a.name.clone())
                        .unwrap_or_else(|| area.name.clone()),
                    magic_device: index.magic_areas.contains_key(&slug).then(|| slug.clone()),
                    slug,
                    floor_id,
                    icon: area_options
                        .and_then(|a| a.icon.clone())
                        .or_else(|| area.icon.clone()),
                    order: area_options.and_then(|a| a.order),
                    hidden,
                    domains: grouped,
                    devices: area_devices.remove(&area.area_id).unwrap_or_default(),
                    entities,
                },
            );
        }
        for (area_id, orphans) in &area_entities {
            warn!(area_id = %area_id, entities = orphans.len(), "Entities reference an unknown area");
        }

        // Pass 5: floors, the undisclosed one appended last
        let mut floors: Vec<FloorEntry> = registries.floors.clone();
        if let Some(floor_id) = &undisclosed_floor {
            if !floors.iter().any(|f| &f.floor_id == floor_id) {
                floors.push(undisclosed_floor_entry(options, floor_id));
            }
        }
        for floor in &floors {
            let floor_options = options.floors.get(&floor.floor_id);
            let areas_slug = index
                .areas
                .values()
                .filter(|a| a.floor_id.as_deref() == Some(floor.floor_id.as_str()))
                .map(|a| a.slug.clone())
                .collect();
            index.floors.insert(
                floor.floor_id.clone(),
                ResolvedFloor {
                    floor_id: floor.floor_id.clone(),
                    name: floor_options
                        .and_then(|f| f.name.clone())
                        .unwrap_or_else(|| floor.name.clone()),
                    icon: floor_options
                        .and_then(|f| f.icon.clone())
                        .or_else(|| floor.icon.clone()),
                    level: floor_options.and_then(|f| f.level).or(floor.level),
                    hidden: floor_options.and_then(|f| f.hidden).unwrap_or(false),
                    areas_slug,
                },
            );
        }

        info!(
            entities = index.entities.len(),
            devices = index.devices.len(),
            areas = index.areas.len(),
            floors = index.floors.len(),
            magic_areas = index.magic_areas.len(),
            "Registry index built"
        );
        index
    }

    fn magic_area_device(
        &self,
        device: &DeviceEntry,
        entity_ids: &[String],
        slugs: &SlugCache,
    ) -> Option<MagicAreaDevice> {
        let Some(name) = device.display_name() else {
            warn!(device_id = %device.id, "Magic Areas device without a name");
            return None;
        };
        let key = slugs.get(name);
        let entities = entity_ids
            .iter()
            .filter_map(|id| self.entities.get(id))
            .filter_map(|entity| {
                entity
                    .translation_key
                    .clone()
                    .map(|translation_key| (translation_key, entity.clone()))
            })
            .collect();
        Some(MagicAreaDevice {
            id: device.id.clone(),
            area_name: name.to_string(),
            key,
            entities,
        })
    }

    pub fn entity(&self, entity_id: &str) -> Option<&ResolvedEntity> {
        self.entities.get(entity_id)
    }

    pub fn area(&self, slug: &str) -> Option<&ResolvedArea> {
        self.areas.get(slug)
    }

    /// Slug of the area with this registry id
    pub fn area_slug(&self, area_id: &str) -> Option<&str> {
        self.area_slugs.get(area_id).map(String::as_str)
    }

    pub fn floor(&self, floor_id: &str) -> Option<&ResolvedFloor> {
        self.floors.get(floor_id)
    }

    /// Aggregate entity Magic Areas provides for a domain and device class
    ///
    /// `key` is an area slug or `global`. `None` means "no aggregate, list
    /// the entities instead".
    pub fn ma_entity(
        &self,
        key: &str,
        domain: &str,
        device_class: Option<&str>,
    ) -> Option<&ResolvedEntity> {
        let device = self.magic_areas.get(key)?;
        device
            .entities
            .get(&magic_areas::entity_key(domain, device_class))
    }

    /// The whole-home Magic Areas device, if installed
    pub fn global_magic_device(&self) -> Option<&MagicAreaDevice> {
        self.magic_areas.get(GLOBAL)
    }

    /// Visible areas by `order`, unordered areas last in registry order
    pub fn ordered_areas(&self) -> Vec<&ResolvedArea> {
        let mut areas: Vec<&ResolvedArea> = self.areas.values().filter(|a| !a.hidden).collect();
        areas.sort_by(|a, b| cmp_order(a.order, b.order));
        areas
    }

    /// Visible floors by `level`, floors without a level last
    pub fn ordered_floors(&self) -> Vec<&ResolvedFloor> {
        let mut floors: Vec<&ResolvedFloor> =
            self.floors.values().filter(|f| !f.hidden).collect();
        floors.sort_by(|a, b| cmp_order(a.level, b.level));
        floors
    }

    /// Visible areas of a floor, in area order
    pub fn areas_on_floor(&self, floor_id: &str) -> Vec<&ResolvedArea> {
        let Some(floor) = self.floors.get(floor_id) else {
            return Vec::new();
        };
        let mut areas: Vec<&ResolvedArea> = floor
            .areas_slug
            .iter()
            .filter_map(|slug| self.areas.get(slug))
            .filter(|a| !a.hidden)
            .collect();
        areas.sort_by(|a, b| cmp_order(a.order, b.order));
        areas
    }
}

fn undisclosed_area(options: &StrategyOptions, floor_id: Option<String>) -> AreaEntry {
    let block = options.area(UNDISCLOSED);
    let mut area = AreaEntry::new(
        UNDISCLOSED,
        block
            .and_then(|a| a.name.clone())
            .unwrap_or_else(|| "Undisclosed".to_string()),
    );
    area.floor_id = floor_id;
    area.icon = block.and_then(|a| a.icon.clone());
    area
}

fn undisclosed_floor_entry(options: &StrategyOptions, floor_id: &str) -> FloorEntry {
    let block = options.floors.get(floor_id);
    let mut floor = FloorEntry::new(
        floor_id,
        block
            .and_then(|f| f.name.clone())
            .unwrap_or_else(|| "Undisclosed Areas".to_string()),
        block.and_then(|f| f.level),
    );
    floor.icon = block.and_then(|f| f.icon.clone());
    floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_config::{default_options, merge_options, AreaOptions};
    use dash_core::EntityState;
    use dash_registries::{EntityCategory, EntityEntry, HiddenBy};
    use serde_json::json;

    fn states(ids: &[(&str, &str, Option<&str>)]) -> StateSnapshot {
        ids.iter()
            .map(|(id, state, class)| {
                let s = EntityState::new(*id, *state);
                match class {
                    Some(class) => s.with_attribute("device_class", json!(class)),
                    None => s,
                }
            })
            .collect()
    }

    fn options() -> StrategyOptions {
        merge_options(&default_options(), StrategyOptions::default())
    }

    #[test]
    fn test_area_resolution_precedence() {
        let registries = RegistrySnapshot {
            entities: vec![
                EntityEntry::new("light.own", "hue")
                    .with_area("kitchen")
                    .with_device("dev1"),
                EntityEntry::new("light.inherited", "hue").with_device("dev1"),
                EntityEntry::new("light.orphan", "hue"),
            ],
            devices: vec![DeviceEntry::new("dev1", "Bulb").with_area("hall")],
            areas: vec![
                AreaEntry::new("kitchen", "Kitchen"),
                AreaEntry::new("hall", "Hall"),
            ],
            ..Default::default()
        };
        let states = states(&[
            ("light.own", "on", None),
            ("light.inherited", "on", None),
            ("light.orphan", "off", None),
        ]);

        let index = RegistryIndex::build(&registries, &states, &options());
        assert_eq!(index.entities["light.own"].area_id, "kitchen");
        assert_eq!(index.entities["light.inherited"].area_id, "hall");
        assert_eq!(index.entities["light.orphan"].area_id, UNDISCLOSED);
        assert_eq!(index.areas[UNDISCLOSED].entities, vec!["light.orphan"]);
        assert_eq!(index.devices["dev1"].entities.len(), 2);
        assert_eq!(index.areas["hall"].devices, vec!["dev1"]);
    }

    #[test]
    fn test_arealess_device_joins_undisclosed() {
        let registries = RegistrySnapshot {
            entities: vec![EntityEntry::new("light.lamp", "hue").with_device("dev1")],
            devices: vec![
                DeviceEntry::new("dev1", "Lamp"),
                DeviceEntry::new("dev2", "Plug").with_area("kitchen"),
            ],
            areas: vec![AreaEntry::new("kitchen", "Kitchen").with_floor("ground")],
            floors: vec![FloorEntry::new("ground", "Ground", Some(0))],
            ..Default::default()
        };
        let index =
            RegistryIndex::build(&registries, &states(&[("light.lamp", "on", None)]), &options());

        let lamp = &index.devices["dev1"];
        assert_eq!(lamp.area_id, UNDISCLOSED);
        assert_eq!(lamp.floor_id, index.entities["light.lamp"].floor_id);
        assert_eq!(lamp.floor_id.as_deref(), Some(UNDISCLOSED));
        assert_eq!(index.areas[UNDISCLOSED].devices, vec!["dev1"]);
        assert_eq!(index.devices["dev2"].floor_id.as_deref(), Some("ground"));
    }

    #[test]
    fn test_magic_areas_device_keyed_by_user_name() {
        let mut device = DeviceEntry::new("ma1", "Kitchen").with_manufacturer(MAGIC_AREAS_NAME);
        device.name_by_user = Some("Cuisine".to_string());
        let registries = RegistrySnapshot {
            devices: vec![device],
            areas: vec![AreaEntry::new("cuisine", "Cuisine")],
            ..Default::default()
        };
        let index = RegistryIndex::build(&registries, &StateSnapshot::new(), &options());

        assert!(index.magic_areas.contains_key("cuisine"));
        assert!(!index.magic_areas.contains_key("kitchen"));
        assert_eq!(index.areas["cuisine"].magic_device.as_deref(), Some("cuisine"));
    }

    #[test]
    fn test_filters() {
        let mut hidden = EntityEntry::new("light.hidden", "hue");
        hidden.hidden_by = Some(HiddenBy::User);
        let mut registries = RegistrySnapshot {
            entities: vec![
                hidden,
                EntityEntry::new("light.stateless", "hue"),
                EntityEntry::new("light.excluded", "hue"),
                EntityEntry::new("fan.ceiling", "tuya"),
                EntityEntry::new("sensor.co2", "airthings"),
                EntityEntry::new("light.kept", "hue"),
            ],
            ..Default::default()
        };
        registries.plugin.excluded_domains = vec!["fan".to_string()];
        registries.plugin.excluded_device_classes = vec!["carbon_dioxide".to_string()];
        registries.plugin.excluded_targets.entity_id = vec!["light.excluded".to_string()];
        let states = states(&[
            ("light.hidden", "on", None),
            ("light.excluded", "on", None),
            ("fan.ceiling", "on", None),
            ("sensor.co2", "420", Some("carbon_dioxide")),
            ("light.kept", "on", None),
        ]);

        let index = RegistryIndex::build(&registries, &states, &options());
        let ids: Vec<&str> = index.entities.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["light.kept"]);
        assert!(!index.domains.contains_key(&DomainTag::bare("fan")));
    }

    #[test]
    fn test_config_entities_hidden_by_default() {
        let registries = RegistrySnapshot {
            entities: vec![
                EntityEntry::new("switch.led_indicator", "zha").with_category(EntityCategory::Config),
                EntityEntry::new("sensor.plug_rssi", "zha").with_category(EntityCategory::Diagnostic),
                EntityEntry::new("switch.plug", "zha"),
            ],
            ..Default::default()
        };
        let states = states(&[
            ("switch.led_indicator", "on", None),
            ("sensor.plug_rssi", "-60", Some("signal_strength")),
            ("switch.plug", "on", None),
        ]);

        let index = RegistryIndex::build(&registries, &states, &options());
        let ids: Vec<&str> = index.entities.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["switch.plug"]);
        assert_eq!(index.areas[UNDISCLOSED].entities, vec!["switch.plug"]);

        let mut user = StrategyOptions::default();
        user.domains.insert(
            "switch".to_string(),
            dash_config::DomainOptions {
                hide_config_entities: Some(false),
                ..Default::default()
            },
        );
        let options = merge_options(&default_options(), user);
        let index = RegistryIndex::build(&registries, &states, &options);
        assert!(index.entities.contains_key("switch.led_indicator"));
        assert!(!index.entities.contains_key("sensor.plug_rssi"));
    }

    #[test]
    fn test_card_options_hide_entity() {
        let registries = RegistrySnapshot {
            entities: vec![EntityEntry::new("light.a", "hue")],
            ..Default::default()
        };
        let mut user = StrategyOptions::default();
        user.card_options.insert(
            "light.a".to_string(),
            dash_config::CardOptions { hidden: Some(true) },
        );
        let options = merge_options(&default_options(), user);
        let index = RegistryIndex::build(&registries, &states(&[("light.a", "on", None)]), &options);
        assert!(index.entities.is_empty());
    }

    #[test]
    fn test_domain_tags() {
        let registries = RegistrySnapshot {
            entities: vec![
                EntityEntry::new("sensor.temp", "x"),
                EntityEntry::new("sensor.plain", "x"),
                EntityEntry::new("cover.garage", "x"),
            ],
            ..Default::default()
        };
        let states = states(&[
            ("sensor.temp", "20", Some("temperature")),
            ("sensor.plain", "1", None),
            ("cover.garage", "open", Some("garage")),
        ]);
        let index = RegistryIndex::build(&registries, &states, &options());

        assert_eq!(index.entities["sensor.temp"].tag.to_string(), "sensor:temperature");
        assert_eq!(index.entities["sensor.plain"].tag.to_string(), "sensor");
        assert_eq!(index.entities["cover.garage"].tag.to_string(), "cover");
        assert_eq!(
            index.entities["cover.garage"].device_class.as_deref(),
            Some("garage")
        );
    }

    #[test]
    fn test_undisclosed_hidden() {
        let mut user = StrategyOptions::default();
        user.areas.insert(
            UNDISCLOSED.to_string(),
            AreaOptions {
                hidden: Some(true),
                ..Default::default()
            },
        );
        let options = merge_options(&default_options(), user);
        let registries = RegistrySnapshot {
            entities: vec![EntityEntry::new("light.orphan", "hue")],
            ..Default::default()
        };
        let index =
            RegistryIndex::build(&registries, &states(&[("light.orphan", "on", None)]), &options);

        assert!(!index.areas.contains_key(UNDISCLOSED));
        assert!(!index.floors.contains_key(UNDISCLOSED));
        assert_eq!(index.entities["light.orphan"].floor_id, None);
    }

    #[test]
    fn test_floorless_areas_join_undisclosed_floor() {
        let registries = RegistrySnapshot {
            areas: vec![
                AreaEntry::new("kitchen", "Kitchen").with_floor("ground"),
                AreaEntry::new("shed", "Shed"),
            ],
            floors: vec![FloorEntry::new("ground", "Ground", Some(0))],
            ..Default::default()
        };
        let index = RegistryIndex::build(&registries, &StateSnapshot::new(), &options());

        assert_eq!(index.floors["ground"].areas_slug, vec!["kitchen"]);
        assert_eq!(
            index.floors[UNDISCLOSED].areas_slug,
            vec!["shed", UNDISCLOSED]
        );
        let floors: Vec<&str> = index
            .ordered_floors()
            .iter()
            .map(|f| f.floor_id.as_str())
            .collect();
        assert_eq!(floors, vec!["ground", UNDISCLOSED]);
    }

    #[test]
    fn test_hidden_and_excluded_areas_leave_ordering() {
        let mut registries = RegistrySnapshot {
            areas: vec![
                AreaEntry::new("a", "Attic"),
                AreaEntry::new("b", "Basement"),
                AreaEntry::new("c", "Cellar"),
            ],
            ..Default::default()
        };
        registries.plugin.excluded_targets.area_id = vec!["c".to_string()];
        let mut user = StrategyOptions::default();
        user.areas.insert(
            "a".to_string(),
            AreaOptions {
                hidden: Some(true),
                ..Default::default()
            },
        );
        let options = merge_options(&default_options(), user);
        let index = RegistryIndex::build(&registries, &StateSnapshot::new(), &options);

        let slugs: Vec<&str> = index.ordered_areas().iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["basement", UNDISCLOSED]);
        assert!(index.areas.contains_key("attic"));
    }
}
