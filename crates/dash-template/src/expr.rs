//! Expression builders
//!
//! Every builder is a pure function of its arguments: the same entity ids
//! and options always produce the same text, and an empty selection
//! produces the empty string instead of a half-built expression.

use std::fmt::Write;

use dash_core::{domains, UNAVAILABLE_STATES};

use crate::literal::{quote, StateValue};
use crate::operator::Operator;
use crate::refs::state_list;

/// State predicate applied to a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFilter {
    pub operator: Operator,
    pub value: StateValue,
    /// Keep `unknown`/`unavailable` states in the selection
    pub allow_unavailable: bool,
}

impl StateFilter {
    pub fn new(operator: Operator, value: impl Into<StateValue>) -> Self {
        Self {
            operator,
            value: value.into(),
            allow_unavailable: false,
        }
    }

    pub fn allow_unavailable(mut self, allow: bool) -> Self {
        self.allow_unavailable = allow;
        self
    }

    /// `entities | rejectattr(..unavailable..) | selectattr(..)`
    fn pipeline(&self) -> String {
        let mut out = String::from("entities");
        if !self.allow_unavailable {
            out.push_str(" | ");
            out.push_str(&unavailable_filter());
        }
        out.push_str(" | ");
        out.push_str(&self.operator.filter(&self.value.render()));
        out
    }
}

fn unavailable_filter() -> String {
    Operator::NotIn.filter(&StateValue::from(UNAVAILABLE_STATES).render())
}

fn set_entities(list: &str) -> String {
    format!("{{% set entities = {} %}}", list)
}

fn set_count(filter: &StateFilter) -> String {
    format!(
        "{{% set count = {} | list | length %}}",
        filter.pipeline()
    )
}

/// Count the entities matching `filter`, rendered as `prefix ~ count` when
/// the count is positive and as nothing otherwise
pub fn count_expr<S: AsRef<str>>(entity_ids: &[S], filter: &StateFilter, prefix: &str) -> String {
    let Some(list) = state_list(entity_ids) else {
        return String::new();
    };
    let output = if prefix.is_empty() {
        "{{ count }}".to_string()
    } else {
        format!("{{{{ {} ~ count }}}}", quote(prefix))
    };
    format!(
        "{}{}{{% if count > 0 %}}{}{{% endif %}}",
        set_entities(&list),
        set_count(filter),
        output
    )
}

/// Render `if_return` when any entity matches `filter`, else `else_return`
pub fn conditional_expr<S: AsRef<str>>(
    entity_ids: &[S],
    filter: &StateFilter,
    if_return: &str,
    else_return: &str,
) -> String {
    let Some(list) = state_list(entity_ids) else {
        return String::new();
    };
    format!(
        "{}{}{{% if count > 0 %}}{}{{% else %}}{}{{% endif %}}",
        set_entities(&list),
        set_count(filter),
        if_return,
        else_return
    )
}

/// Numeric reduction over the states of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Average,
    Min,
}

impl Reduction {
    /// Sum for accumulating device classes (energy, water, ...), else average
    pub fn for_device_class(device_class: &str) -> Self {
        if domains::is_total_device_class(device_class) {
            Reduction::Sum
        } else {
            Reduction::Average
        }
    }

    fn render(&self) -> &'static str {
        match self {
            Reduction::Sum => "values | sum",
            Reduction::Average => "values | sum / values | length",
            Reduction::Min => "values | min",
        }
    }
}

/// Statements binding `entities`, the numeric `values` and, inside the
/// opened `if`, their reduction as `level`
///
/// States that do not parse as numbers are dropped before conversion.
fn reduce_open(list: &str, reduction: Reduction) -> String {
    format!(
        "{}{{% set values = entities | {} | map(attribute='state') \
         | select('is_number') | map('float') | list %}}\
         {{% if values | length > 0 %}}{{% set level = {} %}}",
        set_entities(list),
        unavailable_filter(),
        reduction.render()
    )
}

/// Sum or average of the numeric states, rounded to one decimal and
/// suffixed with the unit of the first entity
pub fn sensor_aggregate_expr<S: AsRef<str>>(entity_ids: &[S], device_class: &str) -> String {
    let Some(list) = state_list(entity_ids) else {
        return String::new();
    };
    format!(
        "{}{{{{ level | round(1) }}}}\
         {{% set unit = entities[0].attributes.unit_of_measurement %}}\
         {{% if unit is defined %}}{{{{ unit }}}}{{% endif %}}{{% endif %}}",
        reduce_open(&list, Reduction::for_device_class(device_class))
    )
}

/// Relative time since the most recent state change in the selection
pub fn last_changed_expr<S: AsRef<str>>(entity_ids: &[S]) -> String {
    let Some(list) = state_list(entity_ids) else {
        return String::new();
    };
    format!(
        "{}{{{{ relative_time(entities | map(attribute='last_changed') | max) }}}}",
        set_entities(&list)
    )
}

/// One step of a breakpoint ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub limit: f64,
    /// `<=` instead of `<`
    pub inclusive: bool,
    pub output: &'static str,
}

const fn below(limit: f64, output: &'static str) -> Threshold {
    Threshold {
        limit,
        inclusive: false,
        output,
    }
}

const fn up_to(limit: f64, output: &'static str) -> Threshold {
    Threshold {
        limit,
        inclusive: true,
        output,
    }
}

pub const TEMPERATURE_COLORS: &[Threshold] = &[
    below(18.0, "cornflowerblue"),
    below(24.0, "green"),
    below(28.0, "orange"),
];
pub const TEMPERATURE_COLOR_ABOVE: &str = "red";

pub const HUMIDITY_COLORS: &[Threshold] = &[below(30.0, "orange"), up_to(60.0, "green")];
pub const HUMIDITY_COLOR_ABOVE: &str = "blue";

pub const BATTERY_COLORS: &[Threshold] = &[below(20.0, "red"), below(30.0, "orange")];
pub const BATTERY_COLOR_ABOVE: &str = "green";

/// Pick an output by comparing the reduced level against `thresholds` in
/// order, falling back to `otherwise`
pub fn threshold_expr<S: AsRef<str>>(
    entity_ids: &[S],
    reduction: Reduction,
    thresholds: &[Threshold],
    otherwise: &str,
) -> String {
    let Some(list) = state_list(entity_ids) else {
        return String::new();
    };
    let mut out = reduce_open(&list, reduction);
    for (i, step) in thresholds.iter().enumerate() {
        let tag = if i == 0 { "if" } else { "elif" };
        let cmp = if step.inclusive { "<=" } else { "<" };
        let _ = write!(
            out,
            "{{% {} level {} {} %}}{}",
            tag, cmp, step.limit, step.output
        );
    }
    if thresholds.is_empty() {
        out.push_str(otherwise);
    } else {
        let _ = write!(out, "{{% else %}}{}{{% endif %}}", otherwise);
    }
    out.push_str("{% endif %}");
    out
}

pub fn temperature_color_expr<S: AsRef<str>>(entity_ids: &[S]) -> String {
    threshold_expr(
        entity_ids,
        Reduction::Average,
        TEMPERATURE_COLORS,
        TEMPERATURE_COLOR_ABOVE,
    )
}

pub fn humidity_color_expr<S: AsRef<str>>(entity_ids: &[S]) -> String {
    threshold_expr(
        entity_ids,
        Reduction::Average,
        HUMIDITY_COLORS,
        HUMIDITY_COLOR_ABOVE,
    )
}

/// Colour of the weakest battery in the selection
pub fn battery_color_expr<S: AsRef<str>>(entity_ids: &[S]) -> String {
    threshold_expr(entity_ids, Reduction::Min, BATTERY_COLORS, BATTERY_COLOR_ABOVE)
}

/// `mdi:battery-<n>0` icon of the weakest battery in the selection
pub fn battery_icon_expr<S: AsRef<str>>(entity_ids: &[S]) -> String {
    let Some(list) = state_list(entity_ids) else {
        return String::new();
    };
    format!(
        "{}{{% if level >= 95 %}}mdi:battery\
         {{% elif level < 10 %}}mdi:battery-outline\
         {{% else %}}mdi:battery-{{{{ (level / 10) | int * 10 }}}}{{% endif %}}\
         {{% else %}}mdi:battery-unknown{{% endif %}}",
        reduce_open(&list, Reduction::Min)
    )
}
