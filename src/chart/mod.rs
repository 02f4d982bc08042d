//! Chart rendering for grading results

mod colors;
mod comparison;
mod contrast;

pub use comparison::render_comparison_chart;
pub use contrast::render_contrast_chart;

use colorgrade::style::BODY;

use crate::mode::GradedSnapshot;

/// Headline metrics of one snapshot in the comparison chart
pub struct ReportChartData {
    pub label: char,
    pub name: String,
    pub values: Vec<f64>,
}

/// Per-element contrast of one snapshot
pub struct ContrastChartData {
    pub filename: String,
    pub elements: Vec<String>,
    /// Own background/text contrast, 0 where not measurable
    pub own: Vec<f64>,
    /// Body text over element background, 0 where not measurable
    pub with_body: Vec<f64>,
}

impl ContrastChartData {
    pub fn from_snapshot(graded: &GradedSnapshot) -> Self {
        let mut elements: Vec<String> = Vec::new();
        if graded.elements.body().is_some() {
            elements.push(BODY.to_string());
        }
        elements.extend(graded.elements.others().map(|(name, _)| name.to_string()));

        let metrics: Vec<_> = elements
            .iter()
            .map(|e| graded.grading.element_metrics(e))
            .collect();

        Self {
            filename: graded.name.clone(),
            own: metrics.iter().map(|m| m.contrast.unwrap_or(0.0)).collect(),
            with_body: metrics
                .iter()
                .map(|m| m.with_body_contrast.unwrap_or(0.0))
                .collect(),
            elements,
        }
    }
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Maximum number of files supported for chart rendering
pub fn max_chart_files() -> usize {
    colors::COLOR_SETS.len()
}

/// Round to 2 decimal places for bar labels
pub(super) fn round2(v: &f64) -> f64 {
    (v * 100.0).round() / 100.0
}
