//! Threshold scoring of contrast and harmony metrics

use serde::{Deserialize, Serialize};

/// Default minimum contrast ratio (exclusive), WCAG AAA for body text
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 7.0;

/// Default minimum harmony score (exclusive)
pub const DEFAULT_HARMONY_THRESHOLD: f64 = 5.0;

/// Pass marks. A metric passes when it is strictly above its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub contrast: f64,
    pub harmony: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST_THRESHOLD,
            harmony: DEFAULT_HARMONY_THRESHOLD,
        }
    }
}

/// Passing vs total measurements
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub passing_elements: usize,
    pub total_elements: usize,
    /// Percentage of passing measurements, 0 when there are none
    pub total_score: f64,
}

/// Score every entry whose key names a contrast or harmony metric.
///
/// A key containing `contrast` passes above the contrast threshold, one
/// containing `harmony` above the harmony threshold. A key naming both
/// passes if either check does. Other keys are ignored.
pub fn generate_report<'a>(
    data: impl IntoIterator<Item = (&'a str, f64)>,
    thresholds: &Thresholds,
) -> ScoreReport {
    let mut passing_elements = 0;
    let mut total_elements = 0;

    for (key, value) in data {
        let is_contrast = key.contains("contrast");
        let is_harmony = key.contains("harmony");
        if !is_contrast && !is_harmony {
            continue;
        }

        total_elements += 1;
        if (is_contrast && value > thresholds.contrast)
            || (is_harmony && value > thresholds.harmony)
        {
            passing_elements += 1;
        }
    }

    let total_score = if total_elements > 0 {
        passing_elements as f64 / total_elements as f64 * 100.0
    } else {
        0.0
    };

    ScoreReport {
        passing_elements,
        total_elements,
        total_score,
    }
}
