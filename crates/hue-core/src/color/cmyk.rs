//! CMYK display representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// A color as cyan/magenta/yellow/key percentages, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cmyk {
    /// Cyan percentage (0..=100)
    pub c: u8,
    /// Magenta percentage (0..=100)
    pub m: u8,
    /// Yellow percentage (0..=100)
    pub y: u8,
    /// Key (black) percentage (0..=100)
    pub k: u8,
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let k = (1.0 - r).min(1.0 - g).min(1.0 - b);

        // Pure black: c/m/y are undefined, report 0
        let ink = |v: f64| {
            if k == 1.0 {
                0.0
            } else {
                (1.0 - v - k) / (1.0 - k)
            }
        };
        let pct = |v: f64| (v * 100.0).round() as u8;

        Self {
            c: pct(ink(r)),
            m: pct(ink(g)),
            y: pct(ink(b)),
            k: pct(k),
        }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}
