//! Registry source
//!
//! The strategy never talks to the host directly; it is handed a
//! `RegistrySource` and fetches everything it needs in one concurrent batch.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::area_registry::AreaEntry;
use crate::device_registry::DeviceEntry;
use crate::entity_registry::EntityEntry;
use crate::error::RegistryResult;
use crate::floor_registry::FloorEntry;
use crate::icons::{IconCategory, IconResources};
use crate::plugin::PluginConfig;

/// Websocket commands behind each registry read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryCommand {
    EntityList,
    DeviceList,
    AreaList,
    FloorList,
    Icons,
    PluginConfig,
}

/// Command of the companion integration returning its stored configuration
pub const PLUGIN_CONFIG_COMMAND: &str = "area_dashboard/get_config";

impl RegistryCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryCommand::EntityList => "config/entity_registry/list",
            RegistryCommand::DeviceList => "config/device_registry/list",
            RegistryCommand::AreaList => "config/area_registry/list",
            RegistryCommand::FloorList => "config/floor_registry/list",
            RegistryCommand::Icons => "frontend/get_icons",
            RegistryCommand::PluginConfig => PLUGIN_CONFIG_COMMAND,
        }
    }
}

/// Read access to the host's registries
///
/// Every call is independent; implementations must not rely on the order
/// in which they are issued.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    async fn entity_registry(&self) -> RegistryResult<Vec<EntityEntry>>;

    async fn device_registry(&self) -> RegistryResult<Vec<DeviceEntry>>;

    async fn area_registry(&self) -> RegistryResult<Vec<AreaEntry>>;

    async fn floor_registry(&self) -> RegistryResult<Vec<FloorEntry>>;

    async fn icon_resources(&self, category: IconCategory) -> RegistryResult<IconResources>;

    async fn plugin_config(&self) -> RegistryResult<PluginConfig>;
}

/// Everything fetched from the host for one dashboard build
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    pub entities: Vec<EntityEntry>,
    pub devices: Vec<DeviceEntry>,
    pub areas: Vec<AreaEntry>,
    pub floors: Vec<FloorEntry>,
    pub icons: IconResources,
    pub plugin: PluginConfig,
}

/// Issue every registry read concurrently
///
/// Fails on the first rejected read; results of the other reads are
/// dropped, so callers never see a partial snapshot.
pub async fn fetch_registries(source: &dyn RegistrySource) -> RegistryResult<RegistrySnapshot> {
    let fetched = futures::try_join!(
        source.entity_registry(),
        source.device_registry(),
        source.area_registry(),
        source.floor_registry(),
        source.icon_resources(IconCategory::EntityComponent),
        source.plugin_config(),
    );

    let (entities, devices, areas, floors, icons, plugin) = match fetched {
        Ok(fetched) => fetched,
        Err(e) => {
            error!(error = %e, "Registry fetch failed");
            return Err(e);
        }
    };

    debug!(
        entities = entities.len(),
        devices = devices.len(),
        areas = areas.len(),
        floors = floors.len(),
        "Fetched registries"
    );

    Ok(RegistrySnapshot {
        entities,
        devices,
        areas,
        floors,
        icons,
        plugin,
    })
}
