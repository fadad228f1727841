//! Template expression builders for the dashboard
//!
//! Cards and chips show live content (how many lights are on, the average
//! temperature of a room, how long ago a door opened) through expressions in
//! the host's Jinja-style template language. This crate writes those
//! expressions as plain text; it never evaluates them.
//!
//! Builders work on lists of entity ids. Resolving a domain, device class or
//! area into such a list is the job of the strategy's query façade.
//!
//! # Example
//!
//! ```ignore
//! use dash_template::{count_expr, Operator, StateFilter};
//!
//! let filter = StateFilter::new(Operator::Eq, "on");
//! let expr = count_expr(&["light.kitchen", "light.hall"], &filter, "");
//! ```

mod check;
mod error;
mod expr;
mod literal;
mod operator;
mod presets;
mod refs;

pub use check::check_syntax;
pub use error::{TemplateError, TemplateResult};
pub use expr::{
    battery_color_expr, battery_icon_expr, conditional_expr, count_expr, humidity_color_expr,
    last_changed_expr, sensor_aggregate_expr, temperature_color_expr, threshold_expr, Reduction,
    StateFilter, Threshold, BATTERY_COLORS, BATTERY_COLOR_ABOVE, HUMIDITY_COLORS,
    HUMIDITY_COLOR_ABOVE, TEMPERATURE_COLORS, TEMPERATURE_COLOR_ABOVE,
};
pub use literal::{quote, StateValue};
pub use operator::Operator;
pub use presets::{preset, StatePreset, ELSE_COLOR};
pub use refs::{state_ref, state_refs};
