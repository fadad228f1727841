//! Strategy options
//!
//! Typed shape of the options a user puts under `strategy:` in the
//! dashboard configuration. Every scalar is optional so that a merge can
//! tell "not set" apart from "set to the default".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-area overrides, keyed by area id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_cards: Vec<Value>,
}

/// Per-floor overrides, keyed by floor id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// Per-domain behaviour table, keyed by domain (`_` applies to all)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_config_entities: Option<bool>,
    /// Services offered by the domain's control chips (`domain.service`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_cards: Vec<Value>,
}

/// Per-view overrides, keyed by view id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

/// Per-entity card overrides, keyed by entity id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeViewOptions {
    /// Home view sections to leave out (e.g. `greeting`, `areas`, `chips`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hidden: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipOptions {
    /// Domains whose home chip is not rendered
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hidden: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_chips: Vec<Value>,
}

/// The merged configuration tree the strategy runs with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyOptions {
    pub areas: IndexMap<String, AreaOptions>,
    pub floors: IndexMap<String, FloorOptions>,
    pub domains: IndexMap<String, DomainOptions>,
    pub views: IndexMap<String, ViewOptions>,
    pub card_options: IndexMap<String, CardOptions>,
    pub home_view: HomeViewOptions,
    pub chips: ChipOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_cards: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_views: Vec<Value>,
}

impl StrategyOptions {
    pub fn area(&self, area_id: &str) -> Option<&AreaOptions> {
        self.areas.get(area_id)
    }

    pub fn is_area_hidden(&self, area_id: &str) -> bool {
        self.area(area_id).and_then(|a| a.hidden).unwrap_or(false)
    }

    pub fn is_entity_hidden(&self, entity_id: &str) -> bool {
        self.card_options
            .get(entity_id)
            .and_then(|c| c.hidden)
            .unwrap_or(false)
    }

    /// Whether config and diagnostic entities of `domain` are left out,
    /// the domain's own setting taking precedence over `_`
    pub fn hides_config_entities(&self, domain: &str) -> bool {
        self.domains
            .get(domain)
            .and_then(|d| d.hide_config_entities)
            .or_else(|| {
                self.domains
                    .get(crate::defaults::ALL_DOMAINS)
                    .and_then(|d| d.hide_config_entities)
            })
            .unwrap_or(false)
    }

    pub fn is_chip_hidden(&self, domain: &str) -> bool {
        self.chips.hidden.iter().any(|d| d == domain)
    }

    /// Check if the undisclosed area (and with it the undisclosed floor)
    /// was explicitly hidden
    pub fn is_undisclosed_hidden(&self) -> bool {
        self.is_area_hidden(dash_core::UNDISCLOSED)
    }
}
