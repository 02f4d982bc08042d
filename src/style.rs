//! Scraped element styles

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Element identifier every other element is compared against
pub const BODY: &str = "body";

/// Computed style properties of one DOM element.
///
/// Only the properties the grader reads are typed; everything else the
/// scraper collected is kept verbatim in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    #[serde(
        rename = "background-color",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        rename = "font-family",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub font_family: Option<String>,
    #[serde(flatten)]
    pub other: IndexMap<String, serde_json::Value>,
}

impl ElementStyle {
    pub fn new(background_color: Option<&str>, color: Option<&str>) -> Self {
        Self {
            background_color: background_color.map(str::to_string),
            color: color.map(str::to_string),
            ..Self::default()
        }
    }

    /// Background color literal, `None` when missing or empty
    pub fn background(&self) -> Option<&str> {
        non_empty(&self.background_color)
    }

    /// Text color literal, `None` when missing or empty
    pub fn text(&self) -> Option<&str> {
        non_empty(&self.color)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Element identifier -> computed style, in scraper order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementsProperties(IndexMap<String, ElementStyle>);

impl ElementsProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: impl Into<String>, style: ElementStyle) {
        self.0.insert(element.into(), style);
    }

    pub fn get(&self, element: &str) -> Option<&ElementStyle> {
        self.0.get(element)
    }

    pub fn body(&self) -> Option<&ElementStyle> {
        self.get(BODY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ElementStyle)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every element except `body`, in order
    pub fn others(&self) -> impl Iterator<Item = (&str, &ElementStyle)> {
        self.iter().filter(|(name, _)| *name != BODY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ElementStyle)> for ElementsProperties {
    fn from_iter<I: IntoIterator<Item = (K, ElementStyle)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_passthrough_properties() {
        let json = r##"{
            "body": {"background-color": "#fff", "color": "#000", "font-family": "Arial", "font-size": "16px"},
            "nav": {"margin": "0px", "color": "rgba(0, 0, 0, 1)"}
        }"##;
        let elements: ElementsProperties = serde_json::from_str(json).unwrap();

        let body = elements.body().unwrap();
        assert_eq!(body.background(), Some("#fff"));
        assert_eq!(body.font_family.as_deref(), Some("Arial"));
        assert_eq!(body.other.get("font-size"), Some(&serde_json::json!("16px")));

        let nav = elements.get("nav").unwrap();
        assert_eq!(nav.background(), None);
        assert_eq!(nav.text(), Some("rgba(0, 0, 0, 1)"));
        assert_eq!(nav.other.len(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let json = r##"{"z": {}, "body": {}, "a": {}}"##;
        let elements: ElementsProperties = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = elements.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["z", "body", "a"]);
        let others: Vec<&str> = elements.others().map(|(n, _)| n).collect();
        assert_eq!(others, ["z", "a"]);
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let style = ElementStyle::new(Some(""), Some("#000"));
        assert_eq!(style.background(), None);
        assert_eq!(style.text(), Some("#000"));
    }

    #[test]
    fn test_non_string_color_is_rejected() {
        let json = r##"{"body": {"color": 12}}"##;
        assert!(serde_json::from_str::<ElementsProperties>(json).is_err());
    }
}
