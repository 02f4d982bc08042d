//! Hue-based harmony classification

use serde::Serialize;

use super::Rgb;

/// Hue difference above which two colors count as complementary (linear mode)
const COMPLEMENTARY_MIN: f64 = 0.5;

/// Hue window for analogous colors, also the tolerance of the triadic check
const ANALOGOUS_WINDOW: f64 = 0.1;

/// How the difference between two hues is measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HueDistance {
    /// Raw `|h1 - h2|`. Hues 0.02 and 0.98 are treated as far apart.
    #[default]
    Linear,
    /// Shortest way round the color wheel, `min(|d|, 1 - |d|)`.
    Circular,
}

/// Relationship between the hues of two colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    Complementary,
    Analogous,
    Triadic,
    Clashing,
}

impl Harmony {
    /// Classify two colors. Checks run in fixed order and the first match
    /// wins: complementary, analogous, triadic, clashing.
    pub fn classify(c1: Rgb, c2: Rgb, distance: HueDistance) -> Self {
        let delta = hue(c1) - hue(c2);

        let (spread, complementary_min) = match distance {
            HueDistance::Linear => (delta.abs(), COMPLEMENTARY_MIN),
            // circular spread tops out at 0.5
            HueDistance::Circular => {
                let d = delta.abs();
                (d.min(1.0 - d), COMPLEMENTARY_MIN - ANALOGOUS_WINDOW)
            }
        };

        let triadic_offset = match distance {
            HueDistance::Linear => (delta * 3.0).abs() % 1.0,
            HueDistance::Circular => (spread * 3.0) % 1.0,
        };

        if spread > complementary_min {
            Harmony::Complementary
        } else if spread < ANALOGOUS_WINDOW {
            Harmony::Analogous
        } else if triadic_offset < ANALOGOUS_WINDOW {
            Harmony::Triadic
        } else {
            Harmony::Clashing
        }
    }

    pub fn score(self) -> u8 {
        match self {
            Harmony::Complementary => 10,
            Harmony::Analogous => 7,
            Harmony::Triadic => 5,
            Harmony::Clashing => 2,
        }
    }
}

/// Harmony score of two colors in {2, 5, 7, 10}, linear hue distance
pub fn harmony_score(c1: Rgb, c2: Rgb) -> u8 {
    Harmony::classify(c1, c2, HueDistance::Linear).score()
}

/// HSV hue in [0, 1). Grays, black and white get hue 0.
pub fn hue(c: Rgb) -> f64 {
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }

    let span = max - min;
    let rc = (max - r) / span;
    let gc = (max - g) / span;
    let bc = (max - b) / span;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (h / 6.0).rem_euclid(1.0)
}
