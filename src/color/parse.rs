//! CSS color literal parsing (hex and rgba forms)

use std::fmt;

/// An 8-bit sRGB color. Alpha is never carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#RGB`, `#RRGGBB` or `rgba(r,g,b,a)` literal.
///
/// Returns `None` for anything else, including named colors and `rgb()`
/// without alpha. Callers skip the computation that needed the color.
pub fn parse_color(spec: &str) -> Option<Rgb> {
    if spec.starts_with('#') {
        parse_hex(spec.trim_start_matches('#'))
    } else if let Some(inner) = spec
        .strip_prefix("rgba(")
        .and_then(|s| s.strip_suffix(')'))
    {
        parse_rgba(inner)
    } else {
        None
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        6 => hex.to_string(),
        // #abc -> #aabbcc
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_rgba(args: &str) -> Option<Rgb> {
    let fields: Vec<&str> = args.split(',').collect();
    if fields.len() != 4 {
        return None;
    }

    let channel = |i: usize| fields[i].trim().parse::<u8>().ok();
    Some(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
}
