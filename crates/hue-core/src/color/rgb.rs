//! 8-bit RGB color type
//!
//! RGB is the interchange representation: hex strings decode into it and
//! luminance math reads from it. All derivation happens in HSL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a new color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from integer channels, clamping each into 0..=255.
    ///
    /// # Example
    /// ```
    /// use hue_core::Rgb;
    /// assert_eq!(Rgb::clamped(300, -4, 12), Rgb::new(255, 0, 12));
    /// ```
    #[inline]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Channels scaled into the unit range 0.0..=1.0.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Encode as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use hue_core::Rgb;
    /// assert_eq!(Rgb::new(59, 130, 246).to_hex(), "#3b82f6");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex, optional hash
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (each digit duplicated)
    ///
    /// Parsing is case-insensitive. Surrounding whitespace is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidChar(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match *digits.as_slice() {
            // Shorthand: 0xF * 17 == 0xFF
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_6digit_with_hash() {
        let c: Rgb = "#3b82f6".parse().unwrap();
        assert_eq!(c, Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_parse_without_hash_and_uppercase() {
        let c: Rgb = "3B82F6".parse().unwrap();
        assert_eq!(c, Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_parse_shorthand_duplicates_digits() {
        let c: Rgb = "#f0a".parse().unwrap();
        assert_eq!(c, Rgb::new(0xff, 0x00, 0xaa));
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!("#ffff".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert_eq!("#gg0000".parse::<Rgb>(), Err(ParseColorError::InvalidChar('g')));
        // Signs are not digits
        assert_eq!("#+f0000".parse::<Rgb>(), Err(ParseColorError::InvalidChar('+')));
        assert_eq!("#é00".parse::<Rgb>(), Err(ParseColorError::InvalidChar('é')));
    }

    #[test]
    fn test_to_hex_zero_pads() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000aff");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    }
}
