//! Strategy options for the dashboard
//!
//! This crate provides the typed options tree and everything needed to get
//! from "what the user wrote" to "what the strategy runs with":
//!
//! - `StrategyOptions` and its per-area, per-floor, per-domain and per-view
//!   sections
//! - `default_options()` - built-in domain tables and views
//! - `merge_options()` - structural merge with undisclosed synthesis and
//!   `(order, title)` re-sorting
//! - `OptionsLoader` / `options_from_json` - YAML (with `!include`) and JSON
//!   loading
//!
//! # Example
//!
//! ```ignore
//! use dash_config::{default_options, load_options_yaml, merge_options};
//!
//! let user = load_options_yaml("areas:\n  garage:\n    hidden: true\n")?;
//! let options = merge_options(&default_options(), user);
//! ```

mod defaults;
mod error;
mod loader;
mod merge;
mod options;

pub use defaults::{
    default_options, undisclosed_area, undisclosed_floor, ALL_DOMAINS, DEFAULT_DOMAIN,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_options_yaml, options_from_json, OptionsLoader};
pub use merge::{cmp_order, merge_options, Merge};
pub use options::{
    AreaOptions, CardOptions, ChipOptions, DomainOptions, FloorOptions, HomeViewOptions,
    StrategyOptions, ViewOptions,
};
