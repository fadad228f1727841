//! Live entity states as handed over by the host
//!
//! The host refreshes states independently; the strategy only ever reads a
//! snapshot taken when the dashboard is generated.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::UNAVAILABLE_STATES;

/// The state of an entity at the time the snapshot was taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,

    /// The state value (e.g., "on", "off", "23.5", "unavailable")
    pub state: String,

    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,

    #[serde(default = "Utc::now")]
    pub last_changed: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl EntityState {
    /// Create a new state with current timestamps and no attributes
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: HashMap::new(),
            last_changed: now,
            last_updated: now,
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Check if the state is `unknown` or `unavailable`
    pub fn is_unavailable(&self) -> bool {
        UNAVAILABLE_STATES.contains(&self.state.as_str())
    }

    pub fn device_class(&self) -> Option<&str> {
        self.attributes.get("device_class").and_then(|v| v.as_str())
    }

    pub fn unit_of_measurement(&self) -> Option<&str> {
        self.attributes
            .get("unit_of_measurement")
            .and_then(|v| v.as_str())
    }
}

/// Read-only map from entity id to its live state
///
/// Deserializes from the array returned by the host's `get_states` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<EntityState>", into = "Vec<EntityState>")]
pub struct StateSnapshot {
    states: IndexMap<String, EntityState>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: EntityState) {
        self.states.insert(state.entity_id.clone(), state);
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.states.contains_key(entity_id)
    }

    /// Device class attribute of an entity, if it has a state and a class
    pub fn device_class(&self, entity_id: &str) -> Option<&str> {
        self.get(entity_id).and_then(EntityState::device_class)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityState> {
        self.states.values()
    }
}

impl FromIterator<EntityState> for StateSnapshot {
    fn from_iter<I: IntoIterator<Item = EntityState>>(iter: I) -> Self {
        Self {
            states: iter
                .into_iter()
                .map(|state| (state.entity_id.clone(), state))
                .collect(),
        }
    }
}

impl From<Vec<EntityState>> for StateSnapshot {
    fn from(states: Vec<EntityState>) -> Self {
        states.into_iter().collect()
    }
}

impl From<StateSnapshot> for Vec<EntityState> {
    fn from(snapshot: StateSnapshot) -> Self {
        snapshot.states.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_from_host_payload() {
        let snapshot: StateSnapshot = serde_json::from_value(json!([
            {
                "entity_id": "sensor.kitchen_temp",
                "state": "21.4",
                "attributes": {"device_class": "temperature", "unit_of_measurement": "°C"},
                "last_changed": "2026-01-01T10:00:00Z",
                "last_updated": "2026-01-01T10:00:00Z"
            },
            {"entity_id": "light.kitchen", "state": "unavailable"}
        ]))
        .unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.device_class("sensor.kitchen_temp"), Some("temperature"));
        let temp = snapshot.get("sensor.kitchen_temp").unwrap();
        assert_eq!(temp.unit_of_measurement(), Some("°C"));
        assert!(!temp.is_unavailable());
        assert!(snapshot.get("light.kitchen").unwrap().is_unavailable());
        assert!(!snapshot.contains("light.missing"));
    }

    #[test]
    fn test_builder_attributes() {
        let state = EntityState::new("binary_sensor.hall", "on")
            .with_attribute("device_class", json!("motion"));
        assert_eq!(state.device_class(), Some("motion"));
        assert_eq!(state.unit_of_measurement(), None);
    }
}
