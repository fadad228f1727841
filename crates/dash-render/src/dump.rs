//! Registry dumps on disk
//!
//! A dump directory holds one JSON file per registry command, named after
//! the command (`entity_registry.json`, `area_registry.json`, ...), plus the
//! live states in `states.json`. `icons.json` and `plugin.json` are
//! optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use dash_core::StateSnapshot;
use dash_registries::{CommandChannel, RegistryCommand};

pub const STATES_FILE: &str = "states.json";

/// File holding the result of a command, and whether it may be missing
fn dump_file(command: &str) -> Option<(&'static str, bool)> {
    let commands = [
        (RegistryCommand::EntityList, "entity_registry.json", false),
        (RegistryCommand::DeviceList, "device_registry.json", false),
        (RegistryCommand::AreaList, "area_registry.json", false),
        (RegistryCommand::FloorList, "floor_registry.json", false),
        (RegistryCommand::Icons, "icons.json", true),
        (RegistryCommand::PluginConfig, "plugin.json", true),
    ];
    commands
        .into_iter()
        .find(|(c, _, _)| c.as_str() == command)
        .map(|(_, file, optional)| (file, optional))
}

/// Command channel answering from a dump directory
#[derive(Debug, Clone)]
pub struct DumpChannel {
    dir: PathBuf,
}

impl DumpChannel {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl CommandChannel for DumpChannel {
    async fn send(&self, message: Value) -> Result<Value, String> {
        let command = message["type"].as_str().unwrap_or_default();
        let (file, optional) =
            dump_file(command).ok_or_else(|| format!("unknown command: {}", command))?;
        let path = self.dir.join(file);

        if optional && !path.exists() {
            debug!(command, "No dump, answering with an empty result");
            return Ok(json!({}));
        }
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&content).map_err(|e| format!("invalid JSON in {}: {}", path.display(), e))
    }
}

/// Load the live states of a dump
pub fn load_states(dir: &Path) -> Result<StateSnapshot> {
    let path = dir.join(STATES_FILE);
    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid states in {}", path.display()))
}
