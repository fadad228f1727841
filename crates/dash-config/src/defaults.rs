//! Built-in strategy options
//!
//! Domain behaviour tables and views the dashboard starts from before user
//! overrides are merged in.

use indexmap::IndexMap;

use dash_core::UNDISCLOSED;

use crate::merge::sort_sections;
use crate::options::{AreaOptions, DomainOptions, FloorOptions, StrategyOptions, ViewOptions};

/// Domain applying to every domain
pub const ALL_DOMAINS: &str = "_";

/// Domain used for entities of domains without their own entry
pub const DEFAULT_DOMAIN: &str = "default";

fn domain(title: &str, icon: &str, order: i64, services: &[&str]) -> DomainOptions {
    DomainOptions {
        title: Some(title.to_string()),
        icon: Some(icon.to_string()),
        order: Some(order),
        hidden: Some(false),
        show_controls: Some(!services.is_empty()),
        services: services.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn view(title: &str, icon: &str, order: i64) -> ViewOptions {
    ViewOptions {
        title: Some(title.to_string()),
        icon: Some(icon.to_string()),
        order: Some(order),
        hidden: Some(false),
    }
}

fn default_domains() -> IndexMap<String, DomainOptions> {
    let mut domains = IndexMap::new();
    domains.insert(
        ALL_DOMAINS.to_string(),
        DomainOptions {
            hidden: Some(false),
            hide_config_entities: Some(true),
            ..Default::default()
        },
    );
    domains.insert(
        "light".to_string(),
        domain(
            "Lights",
            "mdi:lightbulb-group",
            1,
            &["light.turn_on", "light.turn_off"],
        ),
    );
    domains.insert(
        "climate".to_string(),
        domain("Climates", "mdi:thermostat", 2, &[]),
    );
    domains.insert(
        "cover".to_string(),
        domain(
            "Covers",
            "mdi:window-shutter",
            3,
            &["cover.open_cover", "cover.close_cover"],
        ),
    );
    domains.insert(
        "fan".to_string(),
        domain("Fans", "mdi:fan", 4, &["fan.turn_on", "fan.turn_off"]),
    );
    domains.insert(
        "switch".to_string(),
        domain(
            "Switches",
            "mdi:dip-switch",
            5,
            &["switch.turn_on", "switch.turn_off"],
        ),
    );
    domains.insert(
        "media_player".to_string(),
        domain("Media players", "mdi:cast-connected", 6, &[]),
    );
    domains.insert("camera".to_string(), domain("Cameras", "mdi:cctv", 7, &[]));
    domains.insert(
        "vacuum".to_string(),
        domain("Vacuums", "mdi:robot-vacuum", 8, &[]),
    );
    domains.insert("lock".to_string(), domain("Locks", "mdi:lock", 9, &[]));
    domains.insert("scene".to_string(), domain("Scenes", "mdi:palette", 10, &[]));
    domains.insert(
        "input_boolean".to_string(),
        domain(
            "Input booleans",
            "mdi:toggle-switch",
            11,
            &["input_boolean.turn_on", "input_boolean.turn_off"],
        ),
    );
    domains.insert("sensor".to_string(), domain("Sensors", "mdi:eye", 12, &[]));
    domains.insert(
        "binary_sensor".to_string(),
        domain("Binary sensors", "mdi:checkbox-marked-circle", 13, &[]),
    );
    domains.insert(
        DEFAULT_DOMAIN.to_string(),
        DomainOptions {
            title: Some("Miscellaneous".to_string()),
            icon: Some("mdi:dots-horizontal".to_string()),
            hidden: Some(false),
            show_controls: Some(false),
            ..Default::default()
        },
    );
    domains
}

fn default_views() -> IndexMap<String, ViewOptions> {
    [
        ("home", view("Home", "mdi:home-assistant", 1)),
        ("security", view("Security", "mdi:security", 2)),
        ("light", view("Lights", "mdi:lightbulb-group", 3)),
        ("climate", view("Climates", "mdi:thermostat", 4)),
        ("cover", view("Covers", "mdi:window-shutter", 5)),
        ("fan", view("Fans", "mdi:fan", 6)),
        ("switch", view("Switches", "mdi:dip-switch", 7)),
        ("media_player", view("Media players", "mdi:cast-connected", 8)),
        ("camera", view("Cameras", "mdi:cctv", 9)),
        ("vacuum", view("Vacuums", "mdi:robot-vacuum", 10)),
        ("lock", view("Locks", "mdi:lock", 11)),
        ("scene", view("Scenes", "mdi:palette", 12)),
    ]
    .into_iter()
    .map(|(key, options)| (key.to_string(), options))
    .collect()
}

/// The built-in options, already sorted, with the undisclosed area and
/// floor blocks in place
pub fn default_options() -> StrategyOptions {
    let mut options = StrategyOptions {
        areas: IndexMap::from([(UNDISCLOSED.to_string(), undisclosed_area())]),
        floors: IndexMap::from([(UNDISCLOSED.to_string(), undisclosed_floor())]),
        domains: default_domains(),
        views: default_views(),
        ..Default::default()
    };
    sort_sections(&mut options);
    options
}

/// Default block for the area collecting unassigned entities
pub fn undisclosed_area() -> AreaOptions {
    AreaOptions {
        area_id: Some(UNDISCLOSED.to_string()),
        name: Some("Undisclosed".to_string()),
        icon: Some("mdi:help-circle".to_string()),
        floor_id: Some(UNDISCLOSED.to_string()),
        hidden: Some(false),
        ..Default::default()
    }
}

/// Default block for the floor collecting floor-less areas
pub fn undisclosed_floor() -> FloorOptions {
    FloorOptions {
        floor_id: Some(UNDISCLOSED.to_string()),
        name: Some("Undisclosed Areas".to_string()),
        icon: Some("mdi:floor-plan".to_string()),
        hidden: Some(false),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_domains_sort_last() {
        let options = default_options();
        let keys: Vec<&str> = options.domains.keys().map(String::as_str).collect();
        assert_eq!(keys.first(), Some(&"light"));
        assert_eq!(&keys[keys.len() - 2..], &[ALL_DOMAINS, DEFAULT_DOMAIN]);
    }

    #[test]
    fn test_undisclosed_blocks_are_built_in() {
        let options = default_options();
        assert_eq!(options.areas.get(UNDISCLOSED), Some(&undisclosed_area()));
        assert_eq!(options.floors.get(UNDISCLOSED), Some(&undisclosed_floor()));
    }

    #[test]
    fn test_controls_follow_services() {
        let options = default_options();
        assert_eq!(options.domains["light"].show_controls, Some(true));
        assert_eq!(options.domains["climate"].show_controls, Some(false));
    }
}
