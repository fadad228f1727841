//! Configuration stored by the companion integration
//!
//! Returned by the integration's `get_config` websocket command. Holds the
//! user's exclusions and a few well-known entity ids.

use serde::{Deserialize, Serialize};

/// Registry targets the user excluded from the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcludedTargets {
    #[serde(default)]
    pub entity_id: Vec<String>,

    /// Every entity of these devices is excluded
    #[serde(default)]
    pub device_id: Vec<String>,

    /// These areas are kept in the index but hidden
    #[serde(default)]
    pub area_id: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub excluded_domains: Vec<String>,

    #[serde(default)]
    pub excluded_device_classes: Vec<String>,

    #[serde(default)]
    pub excluded_targets: ExcludedTargets,

    #[serde(default)]
    pub alarm_entity_ids: Vec<String>,

    #[serde(default)]
    pub weather_entity_id: Option<String>,

    #[serde(default)]
    pub hide_greeting: bool,
}

impl PluginConfig {
    pub fn is_domain_excluded(&self, domain: &str) -> bool {
        self.excluded_domains.iter().any(|d| d == domain)
    }

    pub fn is_device_class_excluded(&self, device_class: &str) -> bool {
        self.excluded_device_classes.iter().any(|c| c == device_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_payload_uses_defaults() {
        let config: PluginConfig = serde_json::from_value(json!({
            "excluded_domains": ["update"],
            "excluded_targets": {"entity_id": ["light.broken"]}
        }))
        .unwrap();

        assert!(config.is_domain_excluded("update"));
        assert!(!config.is_domain_excluded("light"));
        assert_eq!(config.excluded_targets.entity_id, vec!["light.broken"]);
        assert!(config.excluded_targets.device_id.is_empty());
        assert!(!config.hide_greeting);
    }
}
