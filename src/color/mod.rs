//! Color parsing, WCAG contrast and hue harmony

mod contrast;
mod harmony;
mod parse;

pub use contrast::{contrast_ratio, luminance};
pub use harmony::{Harmony, HueDistance, harmony_score, hue};
pub use parse::{Rgb, parse_color};
