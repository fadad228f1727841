//! Domain metadata and constants
//!
//! Fixed tables describing which domains carry a device class, which
//! device classes are known per domain, which domains Magic Areas exposes
//! as group entities, and which sensor classes accumulate totals.

/// Domains whose device class is read from the live state attributes.
pub static DEVICE_CLASS_DOMAINS: &[&str] = &[
    "cover",
    "sensor",
    "binary_sensor",
    "switch",
    "media_player",
];

/// Domains whose DomainTag is qualified by the device class.
pub static CLASS_QUALIFIED_DOMAINS: &[&str] = &["sensor", "binary_sensor"];

/// Domains that Magic Areas aggregates into `<domain>_group` entities.
pub static GROUP_DOMAINS: &[&str] = &["climate", "media_player", "cover"];

pub static SENSOR_DEVICE_CLASSES: &[&str] = &[
    "apparent_power",
    "aqi",
    "area",
    "atmospheric_pressure",
    "battery",
    "blood_glucose_concentration",
    "carbon_dioxide",
    "carbon_monoxide",
    "conductivity",
    "current",
    "data_rate",
    "data_size",
    "date",
    "distance",
    "duration",
    "energy",
    "energy_distance",
    "energy_storage",
    "enum",
    "frequency",
    "gas",
    "humidity",
    "illuminance",
    "irradiance",
    "moisture",
    "monetary",
    "nitrogen_dioxide",
    "nitrogen_monoxide",
    "nitrous_oxide",
    "ozone",
    "ph",
    "pm1",
    "pm10",
    "pm25",
    "power",
    "power_factor",
    "precipitation",
    "precipitation_intensity",
    "pressure",
    "reactive_power",
    "signal_strength",
    "sound_pressure",
    "speed",
    "sulphur_dioxide",
    "temperature",
    "timestamp",
    "volatile_organic_compounds",
    "volatile_organic_compounds_parts",
    "voltage",
    "volume",
    "volume_flow_rate",
    "volume_storage",
    "water",
    "weight",
    "wind_direction",
    "wind_speed",
];

pub static BINARY_SENSOR_DEVICE_CLASSES: &[&str] = &[
    "battery",
    "battery_charging",
    "carbon_monoxide",
    "cold",
    "connectivity",
    "door",
    "garage_door",
    "gas",
    "heat",
    "light",
    "lock",
    "moisture",
    "motion",
    "moving",
    "occupancy",
    "opening",
    "plug",
    "power",
    "presence",
    "problem",
    "running",
    "safety",
    "smoke",
    "sound",
    "tamper",
    "update",
    "vibration",
    "window",
];

pub static COVER_DEVICE_CLASSES: &[&str] = &[
    "awning", "blind", "curtain", "damper", "door", "garage", "gate", "shade", "shutter", "window",
];

pub static SWITCH_DEVICE_CLASSES: &[&str] = &["outlet", "switch"];

pub static MEDIA_PLAYER_DEVICE_CLASSES: &[&str] = &["tv", "speaker", "receiver"];

/// Sensor classes whose readings accumulate and are summed rather than
/// averaged across a selection.
pub static TOTAL_DEVICE_CLASSES: &[&str] = &[
    "energy", "water", "gas", "monetary", "weight", "volume", "duration", "count",
];

/// Known device classes for a domain (empty for domains without classes)
pub fn device_classes(domain: &str) -> &'static [&'static str] {
    match domain {
        "sensor" => SENSOR_DEVICE_CLASSES,
        "binary_sensor" => BINARY_SENSOR_DEVICE_CLASSES,
        "cover" => COVER_DEVICE_CLASSES,
        "switch" => SWITCH_DEVICE_CLASSES,
        "media_player" => MEDIA_PLAYER_DEVICE_CLASSES,
        _ => &[],
    }
}

/// Check if the device class of entities in this domain should be read
pub fn has_device_class(domain: &str) -> bool {
    DEVICE_CLASS_DOMAINS.contains(&domain)
}

/// Check if a domain's DomainTag carries a device-class qualifier
pub fn is_class_qualified(domain: &str) -> bool {
    CLASS_QUALIFIED_DOMAINS.contains(&domain)
}

pub fn is_group_domain(domain: &str) -> bool {
    GROUP_DOMAINS.contains(&domain)
}

/// Check if a device class belongs to the sensor or binary_sensor tables
pub fn is_sensor_device_class(device_class: &str) -> bool {
    SENSOR_DEVICE_CLASSES.contains(&device_class)
        || BINARY_SENSOR_DEVICE_CLASSES.contains(&device_class)
}

/// Check if readings of this class are totals (summed, not averaged)
pub fn is_total_device_class(device_class: &str) -> bool {
    TOTAL_DEVICE_CLASSES.contains(&device_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_tables() {
        assert!(device_classes("sensor").contains(&"temperature"));
        assert!(device_classes("binary_sensor").contains(&"motion"));
        assert!(device_classes("cover").contains(&"garage"));
        assert!(device_classes("light").is_empty());
    }

    #[test]
    fn test_class_qualified_domains() {
        assert!(is_class_qualified("sensor"));
        assert!(is_class_qualified("binary_sensor"));
        assert!(!is_class_qualified("cover"));
        assert!(has_device_class("cover"));
    }

    #[test]
    fn test_total_device_classes() {
        assert!(is_total_device_class("energy"));
        assert!(is_total_device_class("monetary"));
        assert!(!is_total_device_class("temperature"));
        assert!(!is_total_device_class("humidity"));
    }

    #[test]
    fn test_sensor_device_class_lookup() {
        assert!(is_sensor_device_class("temperature"));
        assert!(is_sensor_device_class("occupancy"));
        assert!(!is_sensor_device_class("garage"));
    }
}
