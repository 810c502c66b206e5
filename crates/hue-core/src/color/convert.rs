//! Free-function conversion surface.
//!
//! Thin wrappers over the `From`/`FromStr` impls on the color types, for
//! callers that work with loose channel values instead of typed colors.
//! Malformed hex is the only recognized invalid input and is reported as
//! `None`; numeric inputs are clamped rather than rejected.

use super::cmyk::Cmyk;
use super::hsb::Hsb;
use super::hsl::Hsl;
use super::rgb::Rgb;

/// Decode `#rgb`, `#rrggbb` (hash optional). Anything else yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}

/// Encode channels as `#rrggbb`, clamping each into `0..=255` first.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb::clamped(r, g, b).to_hex()
}

/// True for 3 or 6 hex digits with an optional leading `#`.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// RGB to rounded HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    Hsl::from(Rgb::new(r, g, b))
}

/// HSL to RGB. Hue wraps and percentages clamp before converting.
pub fn hsl_to_rgb(h: i32, s: i32, l: i32) -> Rgb {
    Rgb::from(Hsl::new(h, s, l))
}

/// RGB to rounded HSB/HSV.
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> Hsb {
    Hsb::from(Rgb::new(r, g, b))
}

/// RGB to rounded CMYK percentages.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> Cmyk {
    Cmyk::from(Rgb::new(r, g, b))
}
