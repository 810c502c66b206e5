//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - **Rgb**: 8-bit interchange form. Hex strings decode into it.
//! - **Hsl**: canonical working form. Harmonies and scales operate here.
//! - **Hsb** / **Cmyk**: display-only representations, rounded to whole numbers.
//!
//! # Example
//!
//! ```
//! use hue_core::{Hsl, Rgb};
//!
//! let rgb: Rgb = "#3b82f6".parse().unwrap();
//! let hsl = Hsl::from(rgb);
//! assert_eq!((hsl.h, hsl.s, hsl.l), (217, 91, 60));
//! ```

mod cmyk;
mod convert;
mod hsb;
mod hsl;
mod rgb;

pub use cmyk::Cmyk;
pub use convert::{
    hex_to_rgb, hsl_to_rgb, is_valid_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsb, rgb_to_hsl,
};
pub use hsb::Hsb;
pub use hsl::Hsl;
pub use rgb::Rgb;
