//! Dashboard strategy core
//!
//! This crate turns the host's registries into the model the dashboard is
//! generated from:
//!
//! - `RegistryIndex` - entities, devices, areas and floors cross-indexed,
//!   with the undisclosed area/floor synthesized and Magic Areas devices
//!   resolved per area slug
//! - `Strategy` / `Session` - one-shot initialization and the session that
//!   holds the result
//! - `Query` - the read API (by area, by domain) and the template
//!   expression generators resolved against the index
//! - `ChipRegistry` - home chips, by domain, with an aggregate fallback
//!
//! # Example
//!
//! ```ignore
//! use dash_strategy::{AreaScope, Selection, Session};
//!
//! let session = Session::new();
//! session.initialize(&source, states, options).await?;
//!
//! let query = session.query();
//! let lights_on = query.count_expr(
//!     &Selection::new("light").scope(AreaScope::Area("kitchen")),
//!     &StateFilter::new(Operator::Eq, "on"),
//!     "",
//! );
//! ```

mod chips;
mod error;
mod index;
mod magic_areas;
mod model;
mod query;
mod strategy;

pub use chips::{ChipBuilder, ChipContext, ChipRegistry, TEMPLATE_CHIP};
pub use error::{StrategyError, StrategyResult, USER_ERROR_MESSAGE};
pub use index::RegistryIndex;
pub use magic_areas::entity_key as magic_area_entity_key;
pub use model::{MagicAreaDevice, ResolvedArea, ResolvedDevice, ResolvedEntity, ResolvedFloor};
pub use query::{AreaScope, Query, Selection, StateOverrides};
pub use strategy::{Session, Strategy};
