//! Strategy option loading
//!
//! Options come either as the JSON object the host hands to the strategy,
//! or from a YAML dashboard file. YAML documents may split options across
//! files with `!include path`, resolved relative to the including file.
//! When the document is a full dashboard configuration, the `strategy:`
//! section is used and its `type` key dropped.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::{debug, trace};

use crate::error::{ConfigError, ConfigResult};
use crate::options::StrategyOptions;

/// Dashboard key holding the strategy configuration
const STRATEGY_KEY: &str = "strategy";

/// YAML options loader with `!include` support
pub struct OptionsLoader {
    /// Base directory for resolving relative paths
    base_dir: PathBuf,
    /// Track included files to detect circular includes
    include_stack: HashSet<PathBuf>,
}

impl OptionsLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            include_stack: HashSet::new(),
        }
    }

    /// Load options from a YAML file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<StrategyOptions> {
        let path = self.resolve_path(path.as_ref());
        let value = self.read_value(&path)?;
        into_options(value, &path)
    }

    /// Load options from YAML text; includes resolve against `source_path`
    pub fn load_str(&mut self, content: &str, source_path: &Path) -> ConfigResult<StrategyOptions> {
        let value = self.parse(content, source_path)?;
        into_options(value, source_path)
    }

    fn read_value(&mut self, path: &Path) -> ConfigResult<Value> {
        debug!("Loading options file: {:?}", path);

        if self.include_stack.contains(path) {
            return Err(ConfigError::CircularInclude {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.include_stack.insert(path.to_path_buf());
        let result = self.parse(&content, path);
        self.include_stack.remove(path);

        result
    }

    fn parse(&mut self, content: &str, source_path: &Path) -> ConfigResult<Value> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseYaml {
            path: source_path.to_path_buf(),
            source: e,
        })?;
        self.process_value(value, source_path)
    }

    fn process_value(&mut self, value: Value, source_path: &Path) -> ConfigResult<Value> {
        match value {
            Value::Tagged(tagged) if tagged.tag.to_string() == "!include" => {
                let include = match &tagged.value {
                    Value::String(s) => s.clone(),
                    other => {
                        return Err(ConfigError::InvalidValue {
                            key: "!include".to_string(),
                            reason: format!("path must be a string, got {:?}", other),
                        })
                    }
                };
                let base = source_path.parent().unwrap_or(&self.base_dir);
                let path = base.join(include);
                trace!("Including options file: {:?}", path);
                self.read_value(&path)
            }
            Value::Mapping(map) => {
                let mut result = serde_yaml::Mapping::new();
                for (k, v) in map {
                    result.insert(k, self.process_value(v, source_path)?);
                }
                Ok(Value::Mapping(result))
            }
            Value::Sequence(seq) => seq
                .into_iter()
                .map(|v| self.process_value(v, source_path))
                .collect::<ConfigResult<Vec<_>>>()
                .map(Value::Sequence),
            other => Ok(other),
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Pick the strategy section out of a dashboard document
fn strategy_section(value: Value) -> ConfigResult<Value> {
    let mut map = match value {
        Value::Mapping(map) => map,
        Value::Null => serde_yaml::Mapping::new(),
        other => {
            return Err(ConfigError::InvalidValue {
                key: STRATEGY_KEY.to_string(),
                reason: format!("expected a mapping, got {:?}", other),
            })
        }
    };

    let mut section = match map.remove(STRATEGY_KEY) {
        Some(Value::Mapping(section)) => section,
        Some(other) => {
            return Err(ConfigError::InvalidValue {
                key: STRATEGY_KEY.to_string(),
                reason: format!("expected a mapping, got {:?}", other),
            })
        }
        None => map,
    };
    section.remove("type");
    Ok(Value::Mapping(section))
}

fn into_options(value: Value, source_path: &Path) -> ConfigResult<StrategyOptions> {
    let section = strategy_section(value)?;
    serde_yaml::from_value(section).map_err(|e| ConfigError::ParseYaml {
        path: source_path.to_path_buf(),
        source: e,
    })
}

/// Load options from YAML text without include support
pub fn load_options_yaml(content: &str) -> ConfigResult<StrategyOptions> {
    OptionsLoader::new(".").load_str(content, Path::new("<options>"))
}

/// Load options from the JSON object handed over by the host
pub fn options_from_json(value: serde_json::Value) -> ConfigResult<StrategyOptions> {
    let value = match value {
        serde_json::Value::Object(mut map) => {
            if let Some(section) = map.remove(STRATEGY_KEY) {
                section
            } else {
                serde_json::Value::Object(map)
            }
        }
        serde_json::Value::Null => return Ok(StrategyOptions::default()),
        other => other,
    };
    let value = match value {
        serde_json::Value::Object(mut map) => {
            map.remove("type");
            serde_json::Value::Object(map)
        }
        other => other,
    };
    serde_json::from_value(value).map_err(|source| ConfigError::ParseJson { source })
}
