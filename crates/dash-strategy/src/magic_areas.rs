//! Magic Areas entity lookup
//!
//! Magic Areas exposes one virtual device per area, plus a `Global` one,
//! whose entities are told apart by translation key: `all_lights`,
//! `climate_group`, `aggregate_temperature` and so on.

use dash_core::{domains, MAGIC_AREAS_LIGHT_ENTITIES};

/// Translation key of the aggregate entity for a domain and device class
///
/// The first matching rule wins:
/// 1. `light` maps to `all_lights`
/// 2. group domains map to `<domain>_group`, plus `_<device_class>` if given
/// 3. a sensor or binary sensor device class maps to `aggregate_<class>`,
///    whatever the domain
/// 4. anything else maps to the bare domain
pub fn entity_key(domain: &str, device_class: Option<&str>) -> String {
    if domain == "light" {
        return MAGIC_AREAS_LIGHT_ENTITIES.to_string();
    }
    if domains::is_group_domain(domain) {
        return match device_class {
            Some(class) => format!("{}_group_{}", domain, class),
            None => format!("{}_group", domain),
        };
    }
    match device_class {
        Some(class) if domains::is_sensor_device_class(class) => format!("aggregate_{}", class),
        _ => domain.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_maps_to_all_lights() {
        assert_eq!(entity_key("light", None), "all_lights");
        assert_eq!(entity_key("light", Some("temperature")), "all_lights");
    }

    #[test]
    fn test_group_domains() {
        assert_eq!(entity_key("climate", None), "climate_group");
        assert_eq!(entity_key("cover", Some("garage")), "cover_group_garage");
    }

    #[test]
    fn test_sensor_classes_ignore_domain() {
        assert_eq!(
            entity_key("sensor", Some("temperature")),
            "aggregate_temperature"
        );
        assert_eq!(
            entity_key("binary_sensor", Some("motion")),
            "aggregate_motion"
        );
        assert_eq!(entity_key("fan", Some("humidity")), "aggregate_humidity");
    }

    #[test]
    fn test_fallback_to_domain() {
        assert_eq!(entity_key("fan", None), "fan");
        assert_eq!(entity_key("sensor", Some("nonsense")), "sensor");
    }
}
