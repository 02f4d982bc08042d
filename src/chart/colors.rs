//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines
pub(super) const COLOR_THRESHOLD: &str = "#F03838"; // Pass mark line

/// Bar colors for own-pair and body-pair contrast
pub(super) const COLOR_OWN: &str = "#68B4FF";
pub(super) const COLOR_WITH_BODY: &str = "#A478FF";

/// Gradient for each snapshot in comparison charts
pub(super) struct ColorSet {
    pub(super) top: &'static str,
    pub(super) bottom: &'static str,
}

/// Color sets for comparison chart snapshots [A], [B], [C], [D]
pub(super) const COLOR_SETS: [ColorSet; 4] = [
    // [A] Blue family
    ColorSet {
        top: "#68B4FF",
        bottom: "#1888F8",
    },
    // [B] Pink/Magenta family
    ColorSet {
        top: "#FF68A8",
        bottom: "#F03888",
    },
    // [C] Green family
    ColorSet {
        top: "#48F89C",
        bottom: "#10D878",
    },
    // [D] Purple family
    ColorSet {
        top: "#A478FF",
        bottom: "#7840F8",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use colorgrade::color::{contrast_ratio, parse_color};

    // chart text must stay readable on the chart background
    #[test]
    fn test_text_contrast_on_background() {
        let bg = parse_color(COLOR_BACKGROUND).unwrap();
        let text = parse_color(COLOR_TEXT).unwrap();
        assert!(contrast_ratio(bg, text) > 7.0);
    }

    #[test]
    fn test_all_chart_colors_parse() {
        let mut all = vec![COLOR_GRID, COLOR_THRESHOLD, COLOR_OWN, COLOR_WITH_BODY];
        for set in &COLOR_SETS {
            all.push(set.top);
            all.push(set.bottom);
        }
        for c in all {
            assert!(parse_color(c).is_some(), "{}", c);
        }
    }
}
