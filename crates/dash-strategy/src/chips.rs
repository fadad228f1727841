//! Home view chips
//!
//! A chip builder is looked up by domain in a static table; domains without
//! a dedicated builder get the aggregate chip. Builders return `Ok(None)`
//! when there is nothing to show. A builder error only drops its own chip.

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::{debug, error, warn};

use dash_config::{ALL_DOMAINS, DEFAULT_DOMAIN};
use dash_template::{check_syntax, preset, StateFilter};

use crate::error::{StrategyError, StrategyResult};
use crate::query::{AreaScope, Query, Selection, StateOverrides};

/// Chip type used for every generated chip
pub const TEMPLATE_CHIP: &str = "custom:mushroom-template-chip";

pub type ChipBuilder = fn(&Query<'_>, &ChipContext<'_>) -> StrategyResult<Option<Value>>;

#[derive(Debug, Clone, Copy)]
pub struct ChipContext<'s> {
    pub domain: &'s str,
    pub scope: AreaScope<'s>,
}

impl<'s> ChipContext<'s> {
    fn selection(&self) -> Selection<'s> {
        Selection::new(self.domain).scope(self.scope)
    }
}

pub struct ChipRegistry {
    builders: HashMap<&'static str, ChipBuilder>,
    fallback: ChipBuilder,
}

impl Default for ChipRegistry {
    fn default() -> Self {
        let mut registry = Self {
            builders: HashMap::new(),
            fallback: aggregate_chip,
        };
        registry.register("sensor", temperature_chip);
        registry.register("binary_sensor", motion_chip);
        registry.register("climate", climate_chip);
        registry
    }
}

impl ChipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, domain: &'static str, builder: ChipBuilder) {
        self.builders.insert(domain, builder);
    }

    /// Builder for a domain, the aggregate builder if none is registered
    pub fn builder(&self, domain: &str) -> ChipBuilder {
        self.builders.get(domain).copied().unwrap_or(self.fallback)
    }

    /// Build one chip, logging and dropping it on error
    pub fn build(&self, query: &Query<'_>, context: &ChipContext<'_>) -> Option<Value> {
        match (self.builder(context.domain))(query, context) {
            Ok(chip) => chip,
            Err(e) => {
                error!(domain = context.domain, error = %e, "Skipping chip");
                None
            }
        }
    }

    /// Chips of the home view: weather, alarms, one per visible domain, then
    /// the user's extra chips
    pub fn home_chips(&self, query: &Query<'_>) -> Vec<Value> {
        let Some(strategy) = query.strategy() else {
            warn!("strategy queried before initialization");
            return Vec::new();
        };
        let options = strategy.options();
        let plugin = strategy.plugin();
        let states = strategy.states();
        let mut chips = Vec::new();

        if let Some(weather) = plugin
            .weather_entity_id
            .as_deref()
            .filter(|id| states.contains(id))
        {
            chips.push(json!({"type": "weather", "entity": weather, "show_conditions": true}));
        }
        for alarm in plugin
            .alarm_entity_ids
            .iter()
            .filter(|id| states.contains(id))
        {
            chips.push(json!({"type": "alarm-control-panel", "entity": alarm}));
        }

        for (domain, domain_options) in &options.domains {
            if domain == ALL_DOMAINS
                || domain == DEFAULT_DOMAIN
                || domain_options.hidden.unwrap_or(false)
                || options.is_chip_hidden(domain)
            {
                continue;
            }
            let context = ChipContext {
                domain: domain.as_str(),
                scope: AreaScope::Global,
            };
            if let Some(chip) = self.build(query, &context) {
                chips.push(chip);
            }
        }

        chips.extend(options.chips.extra_chips.iter().cloned());
        debug!(chips = chips.len(), "Home chips built");
        chips
    }
}

fn template_chip(domain: &str, icon: &str, icon_color: &str, content: &str) -> StrategyResult<Value> {
    for expr in [icon, icon_color, content] {
        check_syntax(expr)?;
    }
    Ok(json!({
        "type": TEMPLATE_CHIP,
        "icon": icon,
        "icon_color": icon_color,
        "content": content,
        "tap_action": {"action": "navigate", "navigation_path": domain},
    }))
}

/// Count of "active" entities, with the domain's state colour and icon
fn aggregate_chip(query: &Query<'_>, context: &ChipContext<'_>) -> StrategyResult<Option<Value>> {
    let selection = context.selection();
    let active = preset(context.domain, None);
    let filter = StateFilter::new(active.operator, active.value.clone());
    let content = query.count_expr(&selection, &filter, "");
    if content.is_empty() {
        return Ok(None);
    }

    let overrides = StateOverrides::default();
    let icon = query.domain_state_icon_expr(&selection, &overrides);
    if icon.is_empty() {
        return Err(StrategyError::Chip {
            domain: context.domain.to_string(),
            message: "no icon available".to_string(),
        });
    }
    let color = query.domain_state_color_expr(&selection, &overrides);
    template_chip(context.domain, &icon, &color, &content).map(Some)
}

/// Heating/cooling climates, counted as anything not `off`
fn climate_chip(query: &Query<'_>, context: &ChipContext<'_>) -> StrategyResult<Option<Value>> {
    let selection = context.selection();
    let overrides = StateOverrides::default();
    let active = preset("climate", None);
    let filter = StateFilter::new(active.operator, active.value.clone());
    let content = query.count_expr(&selection, &filter, "");
    if content.is_empty() {
        return Ok(None);
    }
    let color = query.domain_state_color_expr(&selection, &overrides);
    template_chip(context.domain, "mdi:thermostat", &color, &content).map(Some)
}

/// Average temperature, coloured by the temperature breakpoints
fn temperature_chip(query: &Query<'_>, context: &ChipContext<'_>) -> StrategyResult<Option<Value>> {
    let content = query.sensor_aggregate_expr("temperature", context.scope);
    if content.is_empty() {
        return Ok(None);
    }
    let color = query.temperature_color_expr(context.scope);
    template_chip(context.domain, "mdi:thermometer", &color, &content).map(Some)
}

/// Motion sensors currently detecting
fn motion_chip(query: &Query<'_>, context: &ChipContext<'_>) -> StrategyResult<Option<Value>> {
    let selection = context.selection().device_class("motion");
    let overrides = StateOverrides::default();
    let active = preset("binary_sensor", Some("motion"));
    let filter = StateFilter::new(active.operator, active.value.clone());
    let content = query.count_expr(&selection, &filter, "");
    if content.is_empty() {
        return Ok(None);
    }
    let icon = query.domain_state_icon_expr(&selection, &overrides);
    let color = query.domain_state_color_expr(&selection, &overrides);
    template_chip(context.domain, &icon, &color, &content).map(Some)
}
