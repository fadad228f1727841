//! Per-domain presets for state colours and icons
//!
//! Existing dashboards rely on these exact values; explicit arguments to the
//! colour and icon builders override them.

use crate::literal::StateValue;
use crate::operator::Operator;

/// Colour rendered when nothing in the selection matches
pub const ELSE_COLOR: &str = "grey";

#[derive(Debug, Clone, PartialEq)]
pub struct StatePreset {
    pub operator: Operator,
    pub value: StateValue,
    /// Colour when at least one entity matches
    pub color: &'static str,
    pub icon_on: Option<&'static str>,
    pub icon_off: Option<&'static str>,
}

impl StatePreset {
    fn new(operator: Operator, value: impl Into<StateValue>, color: &'static str) -> Self {
        Self {
            operator,
            value: value.into(),
            color,
            icon_on: None,
            icon_off: None,
        }
    }

    fn icons(mut self, on: &'static str, off: &'static str) -> Self {
        self.icon_on = Some(on);
        self.icon_off = Some(off);
        self
    }
}

impl Default for StatePreset {
    fn default() -> Self {
        StatePreset::new(Operator::Eq, "on", "amber")
    }
}

/// Preset for a domain, refined by device class where one applies
pub fn preset(domain: &str, device_class: Option<&str>) -> StatePreset {
    match (domain, device_class) {
        ("light", _) => StatePreset::new(Operator::Eq, "on", "amber")
            .icons("mdi:lightbulb-group", "mdi:lightbulb-group-off"),
        ("climate", _) => StatePreset::new(Operator::Ne, "off", "orange")
            .icons("mdi:thermostat", "mdi:thermostat-cog"),
        ("cover", _) => StatePreset::new(Operator::Eq, "open", "cyan")
            .icons("mdi:window-shutter-open", "mdi:window-shutter"),
        ("fan", _) => {
            StatePreset::new(Operator::Eq, "on", "green").icons("mdi:fan", "mdi:fan-off")
        }
        ("switch", _) | ("input_boolean", _) => StatePreset::new(Operator::Eq, "on", "blue")
            .icons("mdi:toggle-switch", "mdi:toggle-switch-off"),
        ("media_player", _) => StatePreset::new(Operator::Ne, "off", "dodgerblue")
            .icons("mdi:cast-connected", "mdi:cast-off"),
        ("vacuum", _) => StatePreset::new(Operator::In, &["cleaning", "returning"][..], "teal")
            .icons("mdi:robot-vacuum", "mdi:robot-vacuum-off"),
        ("lock", _) => StatePreset::new(Operator::Eq, "unlocked", "red")
            .icons("mdi:lock-open", "mdi:lock"),
        ("camera", _) => StatePreset::new(Operator::Ne, "off", "lightgreen")
            .icons("mdi:cctv", "mdi:cctv-off"),
        ("binary_sensor", Some("motion" | "occupancy" | "presence")) => {
            StatePreset::new(Operator::Eq, "on", "red").icons("mdi:motion-sensor", "mdi:motion-sensor-off")
        }
        ("binary_sensor", Some("door" | "window" | "opening" | "garage_door")) => {
            StatePreset::new(Operator::Eq, "on", "red").icons("mdi:door-open", "mdi:door-closed")
        }
        ("binary_sensor", Some("smoke" | "gas" | "moisture" | "safety" | "problem")) => {
            StatePreset::new(Operator::Eq, "on", "red").icons("mdi:alert", "mdi:check-circle")
        }
        _ => StatePreset::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_and_cover_presets() {
        let climate = preset("climate", None);
        assert_eq!(climate.operator, Operator::Ne);
        assert_eq!(climate.value, StateValue::from("off"));
        assert_eq!(climate.color, "orange");

        let cover = preset("cover", Some("garage"));
        assert_eq!(cover.operator, Operator::Eq);
        assert_eq!(cover.value, StateValue::from("open"));
        assert_eq!(cover.color, "cyan");
    }

    #[test]
    fn test_unknown_domain_uses_default() {
        let fallback = preset("siren", None);
        assert_eq!(fallback, StatePreset::default());
        assert_eq!(fallback.color, "amber");
        assert_eq!(fallback.icon_on, None);
    }

    #[test]
    fn test_binary_sensor_class_refines_icon() {
        let motion = preset("binary_sensor", Some("motion"));
        assert_eq!(motion.icon_on, Some("mdi:motion-sensor"));
        assert_eq!(preset("binary_sensor", Some("tamper")), StatePreset::default());
    }
}
