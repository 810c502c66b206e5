//! HSB (a.k.a. HSV) display representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hsl::{hue_degrees, round_hue};
use super::rgb::Rgb;

/// A color in hue/saturation/brightness form, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsb {
    /// Hue in degrees (0..360)
    pub h: u16,
    /// Saturation percentage (0..=100)
    pub s: u8,
    /// Brightness (value) percentage (0..=100)
    pub b: u8,
}

impl From<Rgb> for Hsb {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        let h = if max == min {
            0
        } else {
            round_hue(hue_degrees(r, g, b, max, min))
        };

        Self {
            h,
            s: (s * 100.0).round() as u8,
            b: (max * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsb({}, {}%, {}%)", self.h, self.s, self.b)
    }
}
