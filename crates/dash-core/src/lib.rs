//! Core types for the dashboard strategy
//!
//! This crate provides the leaf types every other crate in the workspace
//! builds on: entity-id parsing, the `DomainTag` bucket key, the read-only
//! live-state snapshot handed over by the host, slug helpers and the fixed
//! domain/device-class tables.

pub mod domains;
mod domain_tag;
mod entity_id;
mod slugs;
mod state;

pub use domain_tag::DomainTag;
pub use entity_id::{domain_of, EntityId, EntityIdError};
pub use slugs::{slugify, SlugCache};
pub use state::{EntityState, StateSnapshot};

/// Sentinel area/floor id and slug for entities without an assignment
pub const UNDISCLOSED: &str = "undisclosed";

/// Aggregation key of the whole-home Magic Areas device
pub const GLOBAL: &str = "global";

/// Manufacturer reported by devices created by the Magic Areas integration
pub const MAGIC_AREAS_NAME: &str = "Magic Areas";

/// Platform reported by entities created by the Magic Areas integration
pub const MAGIC_AREAS_DOMAIN: &str = "magic_areas";

/// Translation key of the Magic Areas "all lights" group entity
pub const MAGIC_AREAS_LIGHT_ENTITIES: &str = "all_lights";

/// State values that mean "no usable value"
pub const UNAVAILABLE_STATES: &[&str] = &["unknown", "unavailable"];
