//! Report assembly for the color grading endpoint

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::GradingOptions;
use super::aggregate::{ColorGrading, color_grading_with};
use super::consistency::usage_statements;
use super::score::{ScoreReport, Thresholds};
use crate::style::ElementsProperties;

/// Metrics surfaced in `numerical_data`, with their display titles
const HEADLINE_METRICS: [(&str, &str); 8] = [
    ("body_contrast", "Body Contrast"),
    ("body_harmony_score", "Body Harmony Score"),
    ("link_contrast", "Link Contrast"),
    ("link_harmony_score", "Link Harmony Score"),
    ("a_contrast", "Anchor Contrast"),
    ("a_harmony_score", "Anchor Harmony Score"),
    ("nav_contrast", "Navigation Contrast"),
    ("nav_harmony_score", "Navigation Harmony Score"),
];

const CAPTIONS: [(&str, &str); 6] = [
    (
        "Contrast",
        "Contrast ratio measures the difference in luminance between background and text colors, ensuring readability.",
    ),
    (
        "Harmony",
        "Color harmony score evaluates how visually pleasing color combinations are, contributing to the design's aesthetic appeal.",
    ),
    (
        "Color Consistency",
        "Color consistency ensures that colors are applied uniformly across different elements, enhancing design cohesion.",
    ),
    (
        "Body Contrast Importance",
        "High body contrast ensures text is legible against the background, improving user experience.",
    ),
    (
        "Average Harmony Score",
        "A higher average harmony score suggests a more aesthetically balanced design, promoting visual appeal.",
    ),
    (
        "Navigation Contrast",
        "Navigation contrast helps in distinguishing navigational elements, making site structure clear and accessible.",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericalEntry {
    pub title: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneLiner {
    pub title: String,
    pub details: String,
}

/// Structured grading result handed to the API layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullReport {
    pub numerical_data: IndexMap<String, NumericalEntry>,
    pub one_liner_data: Vec<OneLiner>,
    pub color_usage_details: Vec<String>,
    pub total_score: f64,
    pub score_report: ScoreReport,
}

/// Two decimals, ties to even (`0.125` -> `0.12`)
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn color_grading_report(elements: &ElementsProperties) -> FullReport {
    color_grading_report_with(elements, &GradingOptions::default())
}

pub fn color_grading_report_with(
    elements: &ElementsProperties,
    options: &GradingOptions,
) -> FullReport {
    FullReport::from_grading(&color_grading_with(elements, options), &options.thresholds)
}

impl FullReport {
    /// Shape an existing grading into the report layout
    pub fn from_grading(grading: &ColorGrading, thresholds: &Thresholds) -> Self {
        let numerical_data = HEADLINE_METRICS
            .iter()
            .map(|&(key, title)| {
                let entry = NumericalEntry {
                    title: title.to_string(),
                    value: round2(grading.get(key).unwrap_or(0.0)),
                };
                (key.to_string(), entry)
            })
            .collect();

        let one_liner_data = CAPTIONS
            .iter()
            .map(|&(title, details)| OneLiner {
                title: title.to_string(),
                details: details.to_string(),
            })
            .collect();

        let score = grading.score(thresholds);
        let total_score = round2(score.total_score);
        info!(
            passing = score.passing_elements,
            total = score.total_elements,
            total_score,
            "color grading report ready"
        );

        Self {
            numerical_data,
            one_liner_data,
            color_usage_details: usage_statements(&grading.color_consistency),
            total_score,
            score_report: ScoreReport {
                total_score,
                ..score
            },
        }
    }

    /// Headline metric values in `numerical_data` order
    pub fn headline_values(&self) -> Vec<f64> {
        self.numerical_data.values().map(|e| e.value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(83.33333333333333), 83.33);
        assert_eq!(round2(3.998), 4.0);
    }
}
