//! Relative luminance, contrast ratio and WCAG classification.
//!
//! Luminance follows the WCAG 2.x definition, including its `0.03928`
//! linearization cutoff (IEC 61966-2-1 uses `0.04045`; the two differ only
//! below the 8-bit quantization step).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Text color to overlay on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    /// The RGB value of this text color.
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::White => Rgb::WHITE,
            TextColor::Black => Rgb::BLACK,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::White => f.write_str("white"),
            TextColor::Black => f.write_str("black"),
        }
    }
}

/// WCAG 2.x pass/fail flags for one contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WcagLevels {
    /// Normal text, level AA (>= 4.5)
    pub aa: bool,
    /// Normal text, level AAA (>= 7)
    pub aaa: bool,
    /// Large text, level AA (>= 3)
    pub aa_large: bool,
    /// Large text, level AAA (>= 4.5)
    pub aaa_large: bool,
}

impl WcagLevels {
    /// Classify a contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            aa: ratio >= 4.5,
            aaa: ratio >= 7.0,
            aa_large: ratio >= 3.0,
            // Same threshold as `aa`.
            aaa_large: ratio >= 4.5,
        }
    }
}

fn linearize(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `0.0..=1.0`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio in `1.0..=21.0`. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Pick white or black text for a background, whichever contrasts more.
/// Ties go to white.
pub fn accessible_text_color(bg: Rgb) -> TextColor {
    let on_white = contrast_ratio(bg, Rgb::WHITE);
    let on_black = contrast_ratio(bg, Rgb::BLACK);
    if on_black > on_white {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// WCAG flags for a ratio. See [`WcagLevels::from_ratio`].
pub fn wcag_levels(ratio: f64) -> WcagLevels {
    WcagLevels::from_ratio(ratio)
}
