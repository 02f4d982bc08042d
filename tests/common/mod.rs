//! Common test utilities

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Build an element style object; `None` leaves the property out
pub fn style(bg: Option<&str>, text: Option<&str>) -> Value {
    let mut props = Map::new();
    if let Some(bg) = bg {
        props.insert("background-color".to_string(), json!(bg));
    }
    if let Some(text) = text {
        props.insert("color".to_string(), json!(text));
    }
    props.insert("font-family".to_string(), json!("Arial"));
    Value::Object(props)
}

/// Build an elements mapping from `(element, background, text)` triples
pub fn page(entries: &[(&str, Option<&str>, Option<&str>)]) -> Value {
    let map: Map<String, Value> = entries
        .iter()
        .map(|&(name, bg, text)| (name.to_string(), style(bg, text)))
        .collect();
    Value::Object(map)
}

/// White body with black text and a nav with red text
pub fn white_body_red_nav() -> Value {
    page(&[
        ("body", Some("#ffffff"), Some("#000000")),
        ("nav", Some("#ffffff"), Some("#ff0000")),
    ])
}

/// Every measured pair passes the default thresholds
pub fn all_passing() -> Value {
    page(&[
        ("body", Some("#ffffff"), Some("#000000")),
        ("nav", Some("#ffffff"), Some("#000000")),
    ])
}

/// Wrap an elements mapping in a stored scrape record
pub fn scrape_record(url: &str, elements: &Value) -> Value {
    json!({
        "url": url,
        "elements_properties": elements.to_string(),
    })
}

/// Write a JSON value to `<dir>/<name>.json`
pub fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(format!("{}.json", name));
    write_json_to(&path, value).unwrap();
    path
}

fn write_json_to(path: &Path, value: &Value) -> std::io::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text)
}
