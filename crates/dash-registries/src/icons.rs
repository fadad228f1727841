//! Icon resources
//!
//! Parsed from the `frontend/get_icons` response for the `entity_component`
//! category: per domain, per device class (`_` when there is none), a
//! default icon and optional per-state icons.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key used by the frontend for icons that apply regardless of device class
const NO_DEVICE_CLASS: &str = "_";

/// Icon category requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    EntityComponent,
    Services,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::EntityComponent => "entity_component",
            IconCategory::Services => "services",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub state: HashMap<String, String>,
}

impl IconEntry {
    /// State icon if one is defined for `state`, else the default icon
    pub fn icon(&self, state: Option<&str>) -> Option<&str> {
        state
            .and_then(|s| self.state.get(s))
            .or(self.default.as_ref())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconResources {
    #[serde(default)]
    pub resources: HashMap<String, HashMap<String, IconEntry>>,
}

impl IconResources {
    /// Icon for a domain, device class and state
    ///
    /// Falls back from the device-class entry to the `_` entry, and from the
    /// state icon to the default icon.
    pub fn icon(
        &self,
        domain: &str,
        device_class: Option<&str>,
        state: Option<&str>,
    ) -> Option<&str> {
        let entries = self.resources.get(domain)?;

        device_class
            .and_then(|class| entries.get(class))
            .and_then(|entry| entry.icon(state))
            .or_else(|| {
                entries
                    .get(NO_DEVICE_CLASS)
                    .and_then(|entry| entry.icon(state))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
