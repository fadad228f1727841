//! JSON command channel adapter
//!
//! Hosts usually expose a single "send a websocket message, get the result"
//! primitive. `ChannelRegistrySource` turns such a channel into a
//! `RegistrySource` by issuing the registry commands and decoding their
//! results.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::trace;

use crate::area_registry::AreaEntry;
use crate::device_registry::DeviceEntry;
use crate::entity_registry::EntityEntry;
use crate::error::{RegistryError, RegistryResult};
use crate::floor_registry::FloorEntry;
use crate::icons::{IconCategory, IconResources};
use crate::plugin::PluginConfig;
use crate::source::{RegistryCommand, RegistrySource};

/// A request/response channel to the host
#[async_trait]
pub trait CommandChannel: Send + Sync {
    /// Send one message and return the `result` payload of the reply
    async fn send(&self, message: Value) -> Result<Value, String>;
}

pub struct ChannelRegistrySource<C> {
    channel: C,
}

impl<C: CommandChannel> ChannelRegistrySource<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        command: RegistryCommand,
        mut message: Value,
    ) -> RegistryResult<T> {
        let name = command.as_str();
        message["type"] = Value::from(name);
        trace!(command = name, "Sending registry command");

        let result = self
            .channel
            .send(message)
            .await
            .map_err(|e| RegistryError::request(name, e))?;

        serde_json::from_value(result).map_err(|source| RegistryError::Decode {
            command: name.to_string(),
            source,
        })
    }
}

#[async_trait]
impl<C: CommandChannel> RegistrySource for ChannelRegistrySource<C> {
    async fn entity_registry(&self) -> RegistryResult<Vec<EntityEntry>> {
        self.call(RegistryCommand::EntityList, json!({})).await
    }

    async fn device_registry(&self) -> RegistryResult<Vec<DeviceEntry>> {
        self.call(RegistryCommand::DeviceList, json!({})).await
    }

    async fn area_registry(&self) -> RegistryResult<Vec<AreaEntry>> {
        self.call(RegistryCommand::AreaList, json!({})).await
    }

    async fn floor_registry(&self) -> RegistryResult<Vec<FloorEntry>> {
        self.call(RegistryCommand::FloorList, json!({})).await
    }

    async fn icon_resources(&self, category: IconCategory) -> RegistryResult<IconResources> {
        self.call(
            RegistryCommand::Icons,
            json!({ "category": category.as_str() }),
        )
        .await
    }

    async fn plugin_config(&self) -> RegistryResult<PluginConfig> {
        self.call(RegistryCommand::PluginConfig, json!({})).await
    }
}
