//! Per-element contrast and harmony aggregation

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::consistency::{ColorUsageIndex, color_consistency};
use super::score::{ScoreReport, Thresholds, generate_report};
use super::{
    CONTRAST, GradingOptions, HARMONY_SCORE, WITH_BODY_CONTRAST, WITH_BODY_HARMONY_SCORE,
    metric_key,
};
use crate::color::{Harmony, Rgb, contrast_ratio, parse_color};
use crate::style::{BODY, ElementStyle, ElementsProperties};

/// Metric key -> harmony score
pub type HarmonyScores = IndexMap<String, u8>;

/// Contrast and harmony metrics for a page, plus the color usage index.
///
/// Serializes flat: metric keys sit next to `color_consistency`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorGrading {
    #[serde(flatten)]
    pub metrics: IndexMap<String, f64>,
    pub color_consistency: ColorUsageIndex,
}

/// The four metrics recorded for a non-body element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementMetrics {
    pub contrast: Option<f64>,
    pub harmony: Option<f64>,
    pub with_body_contrast: Option<f64>,
    pub with_body_harmony: Option<f64>,
}

impl ElementMetrics {
    pub fn is_empty(&self) -> bool {
        self.contrast.is_none()
            && self.harmony.is_none()
            && self.with_body_contrast.is_none()
            && self.with_body_harmony.is_none()
    }
}

impl ColorGrading {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    /// Look up an element's metrics. For `body` only the own-color pair
    /// exists.
    pub fn element_metrics(&self, element: &str) -> ElementMetrics {
        let lookup = |suffix: &str| self.get(&metric_key(element, suffix));
        ElementMetrics {
            contrast: lookup(CONTRAST),
            harmony: lookup(HARMONY_SCORE),
            with_body_contrast: lookup(WITH_BODY_CONTRAST),
            with_body_harmony: lookup(WITH_BODY_HARMONY_SCORE),
        }
    }

    pub fn score(&self, thresholds: &Thresholds) -> ScoreReport {
        generate_report(
            self.metrics.iter().map(|(k, v)| (k.as_str(), *v)),
            thresholds,
        )
    }
}

/// Both colors of an element, when both are present and parse
fn own_colors(element: &str, style: &ElementStyle) -> Option<(Rgb, Rgb)> {
    let (bg, text) = (style.background()?, style.text()?);
    match (parse_color(bg), parse_color(text)) {
        (Some(bg), Some(text)) => Some((bg, text)),
        _ => {
            debug!(element, bg, text, "skipping unparseable color pair");
            None
        }
    }
}

fn parsed_background(style: &ElementStyle) -> Option<Rgb> {
    style.background().and_then(parse_color)
}

fn body_text_color(elements: &ElementsProperties) -> Option<Rgb> {
    elements.body()?.text().and_then(parse_color)
}

pub fn color_harmony(elements: &ElementsProperties) -> HarmonyScores {
    color_harmony_with(elements, &GradingOptions::default())
}

/// Harmony scores for body, each element's own colors, and each element's
/// background against the body text color.
///
/// Unlike [`color_grading_with`], an element only gets a with-body score
/// when it declares both a background and a text color.
pub fn color_harmony_with(
    elements: &ElementsProperties,
    options: &GradingOptions,
) -> HarmonyScores {
    let score = |a: Rgb, b: Rgb| Harmony::classify(a, b, options.hue_distance).score();
    let mut results = HarmonyScores::new();

    if let Some((bg, text)) = elements.body().and_then(|s| own_colors(BODY, s)) {
        results.insert(metric_key(BODY, HARMONY_SCORE), score(bg, text));
    }

    let body_text = body_text_color(elements);

    for (element, style) in elements.others() {
        if style.background().is_none() || style.text().is_none() {
            continue;
        }
        if let Some((bg, text)) = own_colors(element, style) {
            results.insert(metric_key(element, HARMONY_SCORE), score(bg, text));
        }
        if let (Some(body_text), Some(bg)) = (body_text, parsed_background(style)) {
            results.insert(
                metric_key(element, WITH_BODY_HARMONY_SCORE),
                score(body_text, bg),
            );
        }
    }

    results
}

pub fn color_grading(elements: &ElementsProperties) -> ColorGrading {
    color_grading_with(elements, &GradingOptions::default())
}

/// Contrast and harmony for every color pairing on the page
pub fn color_grading_with(
    elements: &ElementsProperties,
    options: &GradingOptions,
) -> ColorGrading {
    let mut metrics = IndexMap::new();
    let mut record = |element: &str, contrast_key: &str, harmony_key: &str, a: Rgb, b: Rgb| {
        metrics.insert(metric_key(element, contrast_key), contrast_ratio(a, b));
        metrics.insert(
            metric_key(element, harmony_key),
            Harmony::classify(a, b, options.hue_distance).score() as f64,
        );
    };

    if let Some((bg, text)) = elements.body().and_then(|s| own_colors(BODY, s)) {
        record(BODY, CONTRAST, HARMONY_SCORE, bg, text);
    }

    let body_text = body_text_color(elements);
    if body_text.is_none() {
        debug!("no usable body text color, skipping with-body pairings");
    }

    for (element, style) in elements.others() {
        if let Some((bg, text)) = own_colors(element, style) {
            record(element, CONTRAST, HARMONY_SCORE, bg, text);
        }
        if let (Some(body_text), Some(bg)) = (body_text, parsed_background(style)) {
            record(
                element,
                WITH_BODY_CONTRAST,
                WITH_BODY_HARMONY_SCORE,
                body_text,
                bg,
            );
        }
    }

    debug!(
        elements = elements.len(),
        metrics = metrics.len(),
        hue_distance = ?options.hue_distance,
        "graded page colors"
    );

    ColorGrading {
        metrics,
        color_consistency: color_consistency(elements),
    }
}

