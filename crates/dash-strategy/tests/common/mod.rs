//! Shared fixtures for strategy tests

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use dash_core::StateSnapshot;
use dash_registries::{MemoryRegistrySource, RegistrySnapshot};
use serde_json::Value;
use tracing_subscriber::fmt::MakeWriter;

/// Load a fixture file from `tests/fixtures/` as JSON
pub fn load_json_fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}' from {:?}: {}", name, path, e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture '{}' as JSON: {}", name, e))
}

fn field<T: serde::de::DeserializeOwned + Default>(fixture: &Value, key: &str) -> T {
    match fixture.get(key) {
        Some(value) => serde_json::from_value(value.clone())
            .unwrap_or_else(|e| panic!("Invalid fixture field '{}': {}", key, e)),
        None => T::default(),
    }
}

/// Registries and live states of a fixture
pub fn load_home(name: &str) -> (RegistrySnapshot, StateSnapshot) {
    let fixture = load_json_fixture(name);
    let registries = RegistrySnapshot {
        entities: field(&fixture, "entities"),
        devices: field(&fixture, "devices"),
        areas: field(&fixture, "areas"),
        floors: field(&fixture, "floors"),
        icons: field(&fixture, "icons"),
        plugin: field(&fixture, "plugin"),
    };
    let states: StateSnapshot = field(&fixture, "states");
    (registries, states)
}

#[allow(dead_code)]
pub fn home_source() -> (MemoryRegistrySource, StateSnapshot) {
    let (registries, states) = load_home("home.json");
    (MemoryRegistrySource::new(registries), states)
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a subscriber recording every event, and return its result
/// along with the log output
#[allow(dead_code)]
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
