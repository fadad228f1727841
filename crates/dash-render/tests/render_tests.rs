//! Rendering against dump directories written to a temp dir

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use dash_render::{render, Output, RenderRequest};
use dash_strategy::TEMPLATE_CHIP;
use dash_template::Operator;

fn write_json(dir: &Path, name: &str, value: Value) {
    fs::write(dir.join(name), value.to_string()).unwrap();
}

/// Two areas on one floor, two lights and a kettle switch
fn write_dump(dir: &Path) {
    write_json(
        dir,
        "floor_registry.json",
        json!([{"floor_id": "ground", "name": "Ground Floor", "level": 0}]),
    );
    write_json(
        dir,
        "area_registry.json",
        json!([
            {"area_id": "kitchen", "name": "Kitchen", "floor_id": "ground"},
            {"area_id": "living", "name": "Living Room", "floor_id": "ground"}
        ]),
    );
    write_json(dir, "device_registry.json", json!([]));
    write_json(
        dir,
        "entity_registry.json",
        json!([
            {"entity_id": "light.kitchen", "platform": "hue", "area_id": "kitchen"},
            {"entity_id": "light.living", "platform": "hue", "area_id": "living"},
            {"entity_id": "switch.kettle", "platform": "shelly", "area_id": "kitchen"}
        ]),
    );
    write_json(
        dir,
        "states.json",
        json!([
            {"entity_id": "light.kitchen", "state": "on"},
            {"entity_id": "light.living", "state": "off"},
            {"entity_id": "switch.kettle", "state": "off"}
        ]),
    );
}

fn request(dir: &TempDir, output: Output) -> RenderRequest {
    RenderRequest {
        dump_dir: dir.path().to_path_buf(),
        options: None,
        output,
    }
}

#[tokio::test]
async fn test_render_model_without_optional_dumps() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());

    let model = render(&request(&dir, Output::Model)).await.unwrap();

    let slugs: Vec<&str> = model["areas"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|area| area["slug"].as_str())
        .collect();
    assert!(slugs.contains(&"kitchen"));
    assert!(slugs.contains(&"living_room"));
    assert_eq!(model["floors"][0]["floor"]["floor_id"], "ground");
    assert_eq!(model["entities"], 3);
}

#[tokio::test]
async fn test_render_count_for_area() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());

    let output = Output::Count {
        domain: "light".to_string(),
        area: Some("kitchen".to_string()),
        operator: Operator::Eq,
        value: "on".to_string(),
    };
    let expr = render(&request(&dir, output)).await.unwrap();

    let expr = expr.as_str().unwrap();
    assert!(expr.contains("states['light.kitchen']"));
    assert!(!expr.contains("light.living"));
}

#[tokio::test]
async fn test_render_count_with_list_value() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());

    let output = Output::Count {
        domain: "light".to_string(),
        area: None,
        operator: Operator::In,
        value: "on, off".to_string(),
    };
    let expr = render(&request(&dir, output)).await.unwrap();

    let expr = expr.as_str().unwrap();
    assert!(expr.contains("selectattr('state','in',['on','off'])"));
    assert!(expr.contains("states['light.living']"));
}

#[tokio::test]
async fn test_render_chips() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());

    let chips = render(&request(&dir, Output::Chips)).await.unwrap();

    let chips = chips.as_array().unwrap();
    assert!(!chips.is_empty());
    assert!(chips.iter().all(|chip| chip["type"] == TEMPLATE_CHIP));
    assert!(chips
        .iter()
        .any(|chip| chip["tap_action"]["navigation_path"] == "light"));
}

#[tokio::test]
async fn test_render_with_yaml_options() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());
    let options = dir.path().join("options.yaml");
    fs::write(&options, "areas:\n  living:\n    hidden: true\n").unwrap();

    let mut request = request(&dir, Output::Model);
    request.options = Some(options);
    let model = render(&request).await.unwrap();

    let areas = model["areas"].as_array().unwrap();
    assert!(areas.iter().any(|area| area["slug"] == "kitchen"));
    assert!(!areas.iter().any(|area| area["slug"] == "living_room"));
}

#[tokio::test]
async fn test_missing_registry_dump_fails() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());
    fs::remove_file(dir.path().join("area_registry.json")).unwrap();

    let err = render(&request(&dir, Output::Model)).await.unwrap_err();
    assert!(format!("{:#}", err).contains("area_registry"));
}

#[tokio::test]
async fn test_missing_states_fails() {
    let dir = TempDir::new().unwrap();
    write_dump(dir.path());
    fs::remove_file(dir.path().join("states.json")).unwrap();

    assert!(render(&request(&dir, Output::Model)).await.is_err());
}
