//! Color reuse index

use indexmap::IndexMap;

use crate::style::ElementsProperties;

/// Hex color literal -> element roles using it, e.g. `nav_background`
pub type ColorUsageIndex = IndexMap<String, Vec<String>>;

/// Index which elements reuse the same hex literal.
///
/// Literals are compared exactly as scraped (`#FFF` and `#ffffff` are
/// different keys). rgba colors are not indexed.
pub fn color_consistency(elements: &ElementsProperties) -> ColorUsageIndex {
    let mut usage = ColorUsageIndex::new();

    for (element, style) in elements.iter() {
        let roles = [(style.background(), "background"), (style.text(), "text")];
        for (literal, role) in roles {
            if let Some(literal) = literal.filter(|c| c.starts_with('#')) {
                usage
                    .entry(literal.to_string())
                    .or_default()
                    .push(format!("{}_{}", element, role));
            }
        }
    }

    usage
}

/// `Color #ffffff used in: body_background, nav_background`
pub(crate) fn usage_statements(usage: &ColorUsageIndex) -> Vec<String> {
    usage
        .iter()
        .map(|(color, roles)| format!("Color {} used in: {}", color, roles.join(", ")))
        .collect()
}
