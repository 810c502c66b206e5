//! Display formatting for swatch values.

use std::fmt;
use std::str::FromStr;

use hue_core::{accessible_text_color, Cmyk, Hsb, Hsl, Rgb, TextColor};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How a swatch's value is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    Hsb,
    Cmyk,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Hsb,
        ColorFormat::Cmyk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsb => "hsb",
            ColorFormat::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            "hsb" | "hsv" => Ok(ColorFormat::Hsb),
            "cmyk" => Ok(ColorFormat::Cmyk),
            _ => Err(AppError::UnknownFormat(s.to_string())),
        }
    }
}

/// Format a color for display.
///
/// ```
/// use hue_core::Hsl;
/// use huekit::services::{format_color, ColorFormat};
///
/// let blue = Hsl::new(217, 91, 60);
/// assert_eq!(format_color(blue, ColorFormat::Hsl), "hsl(217, 91%, 60%)");
/// ```
pub fn format_color(color: Hsl, format: ColorFormat) -> String {
    let rgb = color.to_rgb();
    match format {
        ColorFormat::Hex => rgb.to_hex(),
        ColorFormat::Rgb => rgb.to_string(),
        ColorFormat::Hsl => color.to_string(),
        ColorFormat::Hsb => Hsb::from(rgb).to_string(),
        ColorFormat::Cmyk => Cmyk::from(rgb).to_string(),
    }
}

/// Every representation of one color, for the `convert` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsb: Hsb,
    pub cmyk: Cmyk,
    pub name: String,
    pub text_color: TextColor,
}

impl ColorReport {
    /// Build a report from an RGB value. HSL is derived with rounding, so
    /// the report keeps the exact input hex.
    pub fn new(rgb: Rgb, name: String) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: Hsl::from(rgb),
            hsb: Hsb::from(rgb),
            cmyk: Cmyk::from(rgb),
            name,
            text_color: accessible_text_color(rgb),
        }
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name  {}", self.name)?;
        writeln!(f, "hex   {}", self.hex)?;
        writeln!(f, "rgb   {}", self.rgb)?;
        writeln!(f, "hsl   {}", self.hsl)?;
        writeln!(f, "hsb   {}", self.hsb)?;
        writeln!(f, "cmyk  {}", self.cmyk)?;
        write!(f, "text  {}", self.text_color)
    }
}
