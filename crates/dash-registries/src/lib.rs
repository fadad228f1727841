//! Home Assistant registries as seen by the dashboard strategy
//!
//! This crate provides:
//! - Raw registry entries (entities, devices, areas, floors) in the shape
//!   the host returns them
//! - Icon resources and the companion integration's configuration
//! - The `RegistrySource` capability and a concurrent, fail-fast fetch
//! - Sources backed by a JSON command channel or by memory

mod channel;
mod error;
mod memory;
mod source;

pub mod area_registry;
pub mod device_registry;
pub mod entity_registry;
pub mod floor_registry;
pub mod icons;
pub mod plugin;

pub use channel::{ChannelRegistrySource, CommandChannel};
pub use error::{RegistryError, RegistryResult};
pub use memory::MemoryRegistrySource;
pub use source::{
    fetch_registries, RegistryCommand, RegistrySnapshot, RegistrySource, PLUGIN_CONFIG_COMMAND,
};

pub use area_registry::AreaEntry;
pub use device_registry::DeviceEntry;
pub use entity_registry::{DisabledBy, EntityCategory, EntityEntry, HiddenBy};
pub use floor_registry::FloorEntry;
pub use icons::{IconCategory, IconEntry, IconResources};
pub use plugin::{ExcludedTargets, PluginConfig};
