//! In-memory registry source
//!
//! Serves a fixed `RegistrySnapshot`. Used by tests and by embedders that
//! already hold the registries.

use async_trait::async_trait;

use crate::area_registry::AreaEntry;
use crate::device_registry::DeviceEntry;
use crate::entity_registry::EntityEntry;
use crate::error::{RegistryError, RegistryResult};
use crate::floor_registry::FloorEntry;
use crate::icons::{IconCategory, IconResources};
use crate::plugin::PluginConfig;
use crate::source::{RegistryCommand, RegistrySnapshot, RegistrySource};

#[derive(Debug, Clone, Default)]
pub struct MemoryRegistrySource {
    snapshot: RegistrySnapshot,
    failing: Option<RegistryCommand>,
}

impl MemoryRegistrySource {
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot,
            failing: None,
        }
    }

    /// Make one of the reads reject, as a host would on a failed request
    pub fn failing_on(mut self, command: RegistryCommand) -> Self {
        self.failing = Some(command);
        self
    }

    fn check(&self, command: RegistryCommand) -> RegistryResult<()> {
        match self.failing {
            Some(failing) if failing == command => Err(RegistryError::request(
                command.as_str(),
                "request rejected by host",
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RegistrySource for MemoryRegistrySource {
    async fn entity_registry(&self) -> RegistryResult<Vec<EntityEntry>> {
        self.check(RegistryCommand::EntityList)?;
        Ok(self.snapshot.entities.clone())
    }

    async fn device_registry(&self) -> RegistryResult<Vec<DeviceEntry>> {
        self.check(RegistryCommand::DeviceList)?;
        Ok(self.snapshot.devices.clone())
    }

    async fn area_registry(&self) -> RegistryResult<Vec<AreaEntry>> {
        self.check(RegistryCommand::AreaList)?;
        Ok(self.snapshot.areas.clone())
    }

    async fn floor_registry(&self) -> RegistryResult<Vec<FloorEntry>> {
        self.check(RegistryCommand::FloorList)?;
        Ok(self.snapshot.floors.clone())
    }

    async fn icon_resources(&self, _category: IconCategory) -> RegistryResult<IconResources> {
        self.check(RegistryCommand::Icons)?;
        Ok(self.snapshot.icons.clone())
    }

    async fn plugin_config(&self) -> RegistryResult<PluginConfig> {
        self.check(RegistryCommand::PluginConfig)?;
        Ok(self.snapshot.plugin.clone())
    }
}
