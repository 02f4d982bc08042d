//! Relative luminance and contrast ratio (WCAG 2.0)

use super::Rgb;

/// sRGB linearization breakpoint as published in WCAG 2.0
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Flare term added to both luminances
const FLARE: f64 = 0.05;

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in [0, 1] using ITU-R BT.709 coefficients
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrast ratio between two colors, in [1, 21].
///
/// Argument order does not matter: the lighter luminance is always the
/// numerator.
pub fn contrast_ratio(c1: Rgb, c2: Rgb) -> f64 {
    let l1 = luminance(c1.r, c1.g, c1.b);
    let l2 = luminance(c2.r, c2.g, c2.b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + FLARE) / (darker + FLARE)
}
