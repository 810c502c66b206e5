//! HSL color type
//!
//! HSL is the canonical in-memory representation: harmonies and tonal
//! scales are derived by shifting hue, saturation and lightness. Values are
//! whole numbers; conversions round on purpose since the output is meant
//! for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// A color in hue/saturation/lightness form.
///
/// Hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`. Use [`Hsl::new`] to build a value from arbitrary integers; it
/// wraps the hue and clamps the percentages. Deserialization goes through
/// the same normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "HslRepr")]
pub struct Hsl {
    /// Hue in degrees (0..360)
    pub h: u16,
    /// Saturation percentage (0..=100)
    pub s: u8,
    /// Lightness percentage (0..=100)
    pub l: u8,
}

/// Unchecked wire form of [`Hsl`].
#[derive(Deserialize)]
struct HslRepr {
    h: i32,
    s: i32,
    l: i32,
}

impl From<HslRepr> for Hsl {
    fn from(repr: HslRepr) -> Self {
        Hsl::new(repr.h, repr.s, repr.l)
    }
}

impl Hsl {
    /// Create a color, normalizing hue modulo 360 and clamping saturation
    /// and lightness into `0..=100`.
    ///
    /// # Example
    /// ```
    /// use hue_core::Hsl;
    /// let c = Hsl::new(-30, 120, 50);
    /// assert_eq!((c.h, c.s, c.l), (330, 100, 50));
    /// ```
    #[inline]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Same hue and saturation, different lightness (clamped).
    #[inline]
    pub fn with_lightness(self, l: i32) -> Self {
        Self::new(self.h as i32, self.s as i32, l)
    }

    /// Rotate the hue by `degrees`, wrapping into `0..360`.
    #[inline]
    pub fn rotate(self, degrees: i32) -> Self {
        Self::new(self.h as i32 + degrees, self.s as i32, self.l as i32)
    }

    /// Convert to 8-bit RGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from(self)
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[inline]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Parse a hex string straight into HSL. Returns `None` for malformed
    /// input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse::<Rgb>().ok().map(Self::from)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Wrap any integer hue into `0..360`.
#[inline]
pub(crate) fn normalize_hue(h: i32) -> u16 {
    h.rem_euclid(360) as u16
}

#[inline]
pub(crate) fn clamp_percent(v: i32) -> u8 {
    v.clamp(0, 100) as u8
}

/// Hue in degrees from unit-scale channels, shared by HSL and HSB.
///
/// `max`/`min` are the largest and smallest channel; the caller handles the
/// achromatic case (`max == min`).
pub(crate) fn hue_degrees(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    let d = max - min;
    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    sextant * 60.0
}

/// Round a hue in degrees, folding 360 back to 0.
#[inline]
pub(crate) fn round_hue(degrees: f64) -> u16 {
    normalize_hue(degrees.round() as i32)
}

impl From<Rgb> for Hsl {
    /// Standard max/min channel conversion with all outputs rounded.
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self {
                h: 0,
                s: 0,
                l: (l * 100.0).round() as u8,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        Self {
            h: round_hue(hue_degrees(r, g, b, max, min)),
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

/// One channel of the HSL -> RGB piecewise function.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let h = hsl.h as f64 / 360.0;
        let s = hsl.s as f64 / 100.0;
        let l = hsl.l as f64 / 100.0;

        let to_byte = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

        if hsl.s == 0 {
            let v = to_byte(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_byte(hue_to_channel(p, q, h)),
            to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}
