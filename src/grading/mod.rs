//! Page-level color grading over scraped element styles

mod aggregate;
mod consistency;
mod report;
mod score;

pub use aggregate::{
    ColorGrading, ElementMetrics, HarmonyScores, color_grading, color_grading_with, color_harmony,
    color_harmony_with,
};
pub use consistency::{ColorUsageIndex, color_consistency};
pub use report::{
    FullReport, NumericalEntry, OneLiner, color_grading_report, color_grading_report_with,
};
pub use score::{ScoreReport, Thresholds, generate_report};

use crate::color::HueDistance;

/// Caller-owned settings for one grading run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradingOptions {
    pub thresholds: Thresholds,
    pub hue_distance: HueDistance,
}

/// Metric key for an element, e.g. `nav_with_body_contrast`
pub(crate) fn metric_key(element: &str, suffix: &str) -> String {
    format!("{}_{}", element, suffix)
}

pub(crate) const CONTRAST: &str = "contrast";
pub(crate) const HARMONY_SCORE: &str = "harmony_score";
pub(crate) const WITH_BODY_CONTRAST: &str = "with_body_contrast";
pub(crate) const WITH_BODY_HARMONY_SCORE: &str = "with_body_harmony_score";
