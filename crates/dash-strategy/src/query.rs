//! Query façade
//!
//! The read API cards, chips and views are built against. A `Query` either
//! wraps an initialized strategy or nothing at all; in the latter case every
//! call logs a warning and returns an empty result.

use serde::{Deserialize, Serialize};
use tracing::warn;

use dash_core::{GLOBAL, UNDISCLOSED};
use dash_template::{self as template, Operator, StateFilter, StateValue, ELSE_COLOR};

use crate::index::RegistryIndex;
use crate::model::ResolvedEntity;
use crate::strategy::Strategy;

/// Which areas a selection covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AreaScope<'s> {
    /// The whole home
    #[default]
    Global,
    Area(&'s str),
    Areas(&'s [&'s str]),
}

impl<'s> AreaScope<'s> {
    /// Scope for a slug, `global` meaning the whole home
    pub fn from_slug(slug: &'s str) -> Self {
        if slug == GLOBAL {
            AreaScope::Global
        } else {
            AreaScope::Area(slug)
        }
    }

    /// Area slugs of the scope; `None` for the whole home
    fn slugs(&self) -> Option<Vec<&'s str>> {
        match *self {
            AreaScope::Global => None,
            AreaScope::Area(slug) if slug == GLOBAL => None,
            AreaScope::Area(slug) => Some(vec![slug]),
            AreaScope::Areas(slugs) => Some(slugs.to_vec()),
        }
    }
}

/// Entities of one domain (and optionally one device class) in a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'s> {
    pub domain: &'s str,
    pub device_class: Option<&'s str>,
    pub scope: AreaScope<'s>,
}

impl<'s> Selection<'s> {
    pub fn new(domain: &'s str) -> Self {
        Self {
            domain,
            device_class: None,
            scope: AreaScope::Global,
        }
    }

    pub fn device_class(mut self, device_class: &'s str) -> Self {
        self.device_class = Some(device_class);
        self
    }

    pub fn scope(mut self, scope: AreaScope<'s>) -> Self {
        self.scope = scope;
        self
    }
}

/// Explicit arguments overriding a domain's colour or icon preset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateOverrides {
    pub operator: Option<Operator>,
    pub value: Option<StateValue>,
    pub if_return: Option<String>,
    pub else_return: Option<String>,
    pub allow_unavailable: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    strategy: Option<&'a Strategy>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(strategy: Option<&'a Strategy>) -> Self {
        Self { strategy }
    }

    pub fn is_initialized(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy(&self) -> Option<&'a Strategy> {
        self.strategy
    }

    fn index(&self) -> Option<&'a RegistryIndex> {
        match self.strategy {
            Some(strategy) => Some(strategy.index()),
            None => {
                warn!("strategy queried before initialization");
                None
            }
        }
    }

    /// Entities of an area matching a domain and device class
    ///
    /// Without a device class every tag of the domain matches.
    pub fn by_area(
        &self,
        area_slug: &str,
        domain: &str,
        device_class: Option<&str>,
    ) -> Vec<&'a ResolvedEntity> {
        let Some(index) = self.index() else {
            return Vec::new();
        };
        let Some(area) = index.area(area_slug) else {
            return Vec::new();
        };
        area.domains
            .iter()
            .filter(|(tag, _)| tag.matches(domain, device_class))
            .flat_map(|(_, ids)| ids.iter())
            .filter_map(|id| index.entity(id))
            .collect()
    }

    /// Entity ids of a domain and device class across a scope
    pub fn by_domain(&self, selection: &Selection<'_>) -> Vec<String> {
        let Some(index) = self.index() else {
            return Vec::new();
        };
        match selection.scope.slugs() {
            None => index
                .domains
                .iter()
                .filter(|(tag, _)| tag.matches(selection.domain, selection.device_class))
                .flat_map(|(_, ids)| ids.iter().cloned())
                .collect(),
            Some(slugs) => slugs
                .into_iter()
                .flat_map(|slug| self.by_area(slug, selection.domain, selection.device_class))
                .map(|entity| entity.entity_id.clone())
                .collect(),
        }
    }

    /// `states['<id>']` for each valid id
    pub fn state_refs<S: AsRef<str>>(&self, entity_ids: &[S]) -> Vec<String> {
        if self.index().is_none() {
            return Vec::new();
        }
        template::state_refs(entity_ids)
    }

    /// Sensor entity ids of a device class, preferring Magic Areas aggregates
    ///
    /// Per area, the area's aggregate entity replaces its sensors. The whole
    /// home lists the sensors of every area except the undisclosed one.
    pub fn sensor_ids(&self, device_class: &str, scope: AreaScope<'_>) -> Vec<String> {
        let Some(index) = self.index() else {
            return Vec::new();
        };
        match scope.slugs() {
            None => index
                .areas
                .keys()
                .filter(|slug| slug.as_str() != UNDISCLOSED)
                .flat_map(|slug| self.by_area(slug, "sensor", Some(device_class)))
                .map(|entity| entity.entity_id.clone())
                .collect(),
            Some(slugs) => slugs
                .into_iter()
                .flat_map(|slug| {
                    match index.ma_entity(slug, "sensor", Some(device_class)) {
                        Some(aggregate) => vec![aggregate.entity_id.clone()],
                        None => self
                            .by_area(slug, "sensor", Some(device_class))
                            .into_iter()
                            .map(|entity| entity.entity_id.clone())
                            .collect(),
                    }
                })
                .collect(),
        }
    }

    /// Count of entities in a selection whose state passes `filter`
    pub fn count_expr(&self, selection: &Selection<'_>, filter: &StateFilter, prefix: &str) -> String {
        template::count_expr(&self.by_domain(selection), filter, prefix)
    }

    /// Sum or average of a sensor device class over a scope
    pub fn sensor_aggregate_expr(&self, device_class: &str, scope: AreaScope<'_>) -> String {
        template::sensor_aggregate_expr(&self.sensor_ids(device_class, scope), device_class)
    }

    pub fn last_changed_expr(&self, selection: &Selection<'_>) -> String {
        template::last_changed_expr(&self.by_domain(selection))
    }

    /// Preset colour when any entity of the selection is "active", else grey
    pub fn domain_state_color_expr(
        &self,
        selection: &Selection<'_>,
        overrides: &StateOverrides,
    ) -> String {
        let preset = template::preset(selection.domain, selection.device_class);
        let if_return = overrides.if_return.as_deref().unwrap_or(preset.color);
        let else_return = overrides.else_return.as_deref().unwrap_or(ELSE_COLOR);
        self.conditional(selection, overrides, &preset, if_return, else_return)
    }

    /// Preset icon for the "active" and idle cases
    ///
    /// Domains without icon presets fall back to the host's icon resources
    /// (`on`/`off` state icons), then to the domain's configured icon.
    pub fn domain_state_icon_expr(
        &self,
        selection: &Selection<'_>,
        overrides: &StateOverrides,
    ) -> String {
        let Some(strategy) = self.strategy else {
            warn!("strategy queried before initialization");
            return String::new();
        };
        let preset = template::preset(selection.domain, selection.device_class);
        let icons = strategy.icons();
        let configured = strategy
            .options()
            .domains
            .get(selection.domain)
            .and_then(|d| d.icon.as_deref());

        let if_return = overrides
            .if_return
            .as_deref()
            .or(preset.icon_on)
            .or_else(|| icons.icon(selection.domain, selection.device_class, Some("on")))
            .or(configured);
        let else_return = overrides
            .else_return
            .as_deref()
            .or(preset.icon_off)
            .or_else(|| icons.icon(selection.domain, selection.device_class, Some("off")))
            .or(if_return);

        match (if_return, else_return) {
            (Some(if_return), Some(else_return)) => {
                self.conditional(selection, overrides, &preset, if_return, else_return)
            }
            _ => String::new(),
        }
    }

    fn conditional(
        &self,
        selection: &Selection<'_>,
        overrides: &StateOverrides,
        preset: &template::StatePreset,
        if_return: &str,
        else_return: &str,
    ) -> String {
        let filter = StateFilter::new(
            overrides.operator.unwrap_or(preset.operator),
            overrides.value.clone().unwrap_or_else(|| preset.value.clone()),
        )
        .allow_unavailable(overrides.allow_unavailable);
        template::conditional_expr(&self.by_domain(selection), &filter, if_return, else_return)
    }

    pub fn temperature_color_expr(&self, scope: AreaScope<'_>) -> String {
        template::temperature_color_expr(&self.sensor_ids("temperature", scope))
    }

    pub fn humidity_color_expr(&self, scope: AreaScope<'_>) -> String {
        template::humidity_color_expr(&self.sensor_ids("humidity", scope))
    }

    pub fn battery_color_expr(&self, scope: AreaScope<'_>) -> String {
        template::battery_color_expr(&self.sensor_ids("battery", scope))
    }

    pub fn battery_icon_expr(&self, scope: AreaScope<'_>) -> String {
        template::battery_icon_expr(&self.sensor_ids("battery", scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_slug() {
        assert_eq!(AreaScope::from_slug("global"), AreaScope::Global);
        assert_eq!(AreaScope::from_slug("kitchen"), AreaScope::Area("kitchen"));
        assert_eq!(AreaScope::Area(GLOBAL).slugs(), None);
        assert_eq!(
            AreaScope::Areas(&["a", "b"]).slugs(),
            Some(vec!["a", "b"])
        );
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: StateOverrides = serde_json::from_value(serde_json::json!({
            "operator": "not_in",
            "value": ["off", "idle"],
            "if_return": "red"
        }))
        .unwrap();
        assert_eq!(overrides.operator, Some(Operator::NotIn));
        assert!(overrides.value.as_ref().is_some_and(StateValue::is_many));
        assert!(!overrides.allow_unavailable);
    }
}
