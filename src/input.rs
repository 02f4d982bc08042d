//! Loading stored page snapshots

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::style::ElementsProperties;

/// Path that reads the snapshot from standard input
pub const STDIN_PATH: &str = "-";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Error opening {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Expected a JSON object in {path}")]
    NotAnObject { path: String },
    #[error("Invalid elements_properties string in {path}: {source}")]
    EmbeddedJson {
        path: String,
        source: serde_json::Error,
    },
}

/// A page's element styles and where they came from
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Scraped URL when the record carries one, otherwise the file name
    pub source: String,
    pub elements: ElementsProperties,
}

/// Load a snapshot from a file, or stdin for `-`
pub fn load_snapshot(path: &str) -> Result<Snapshot, InputError> {
    let text = if path == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| InputError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_string(),
            source,
        })?
    };

    parse_snapshot(&text, display_name(path))
}

/// Parse snapshot JSON.
///
/// Accepts either a bare element mapping or a stored scrape record
/// `{"url": ..., "elements_properties": ...}`, where `elements_properties`
/// may itself be a JSON-encoded string.
pub fn parse_snapshot(text: &str, name: &str) -> Result<Snapshot, InputError> {
    let json_err = |source| InputError::Json {
        path: name.to_string(),
        source,
    };

    let value: Value = serde_json::from_str(text).map_err(json_err)?;
    let Value::Object(mut object) = value else {
        return Err(InputError::NotAnObject {
            path: name.to_string(),
        });
    };

    let (source, properties) = match object.remove("elements_properties") {
        Some(properties) => {
            let url = object
                .get("url")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string();
            debug!(%url, "reading scrape record");
            (url, properties)
        }
        None => (name.to_string(), Value::Object(object)),
    };

    let properties = match properties {
        Value::String(encoded) => {
            serde_json::from_str(&encoded).map_err(|source| InputError::EmbeddedJson {
                path: name.to_string(),
                source,
            })?
        }
        other => other,
    };

    if !properties.is_object() {
        return Err(InputError::NotAnObject {
            path: name.to_string(),
        });
    }

    let elements: ElementsProperties = serde_json::from_value(properties).map_err(json_err)?;
    debug!(source = %source, elements = elements.len(), "loaded snapshot");

    Ok(Snapshot { source, elements })
}

/// File name without directories, `<stdin>` for `-`
pub fn display_name(path: &str) -> &str {
    if path == STDIN_PATH {
        return "<stdin>";
    }
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_mapping() {
        let snapshot = parse_snapshot(
            r##"{"body": {"background-color": "#fff", "color": "#000"}}"##,
            "page.json",
        )
        .unwrap();
        assert_eq!(snapshot.source, "page.json");
        assert_eq!(snapshot.elements.len(), 1);
    }

    #[test]
    fn test_scrape_record_with_embedded_string() {
        let text = r##"{
            "url": "https://example.com",
            "elements_properties": "{\"body\": {\"color\": \"#000\"}, \"nav\": {}}"
        }"##;
        let snapshot = parse_snapshot(text, "record.json").unwrap();
        assert_eq!(snapshot.source, "https://example.com");
        assert_eq!(snapshot.elements.len(), 2);
        assert_eq!(snapshot.elements.body().unwrap().text(), Some("#000"));
    }

    #[test]
    fn test_scrape_record_with_object() {
        let text = r##"{"elements_properties": {"body": {"color": "#000"}}}"##;
        let snapshot = parse_snapshot(text, "record.json").unwrap();
        assert_eq!(snapshot.source, "record.json");
        assert_eq!(snapshot.elements.len(), 1);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            parse_snapshot("[1, 2]", "x.json"),
            Err(InputError::NotAnObject { .. })
        ));
        assert!(matches!(
            parse_snapshot(r#"{"elements_properties": 5}"#, "x.json"),
            Err(InputError::NotAnObject { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            parse_snapshot("{", "x.json"),
            Err(InputError::Json { .. })
        ));
        assert!(matches!(
            parse_snapshot(r#"{"elements_properties": "{oops"}"#, "x.json"),
            Err(InputError::EmbeddedJson { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_snapshot("/nonexistent/page.json").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/page.json"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("/tmp/pages/home.json"), "home.json");
        assert_eq!(display_name("-"), "<stdin>");
    }
}
