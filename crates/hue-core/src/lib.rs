//! hue-core: deterministic color derivation
//!
//! Derives a set of related colors from one seed color and evaluates them
//! for text legibility. Everything here is a pure computation over small
//! value types, except [`PaletteState`], which a host mutates in place.
//!
//! # Quick Start
//!
//! ```
//! use hue_core::{accessible_text_color, HarmonyRule, Hsl, PaletteState, RngSource, TextColor};
//!
//! let mut palette = PaletteState::new(RngSource::seeded(42));
//! palette.set_base_color(Hsl::from_hex("#3b82f6").unwrap());
//! palette.set_harmony_mode(HarmonyRule::Triadic.into());
//!
//! let colors = palette.render();
//! assert_eq!(colors.len(), 5);
//! assert_eq!(accessible_text_color(colors[0].to_rgb()), TextColor::Black);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! base color + effective rule
//!     |
//!     v
//! generate_harmony()         5 candidate colors, slot 0 = base
//!     |
//!     v
//! LockMap::apply()           locked slots keep their frozen color
//!     |
//!     +---> color conversions   (hex / rgb / hsl / hsb / cmyk for display)
//!     +---> accessible_text_color()   (white or black overlay text)
//! ```
//!
//! [`generate_scale`] is independent of the harmony pipeline and is run on
//! demand for a single color.
//!
//! # Rounding
//!
//! All conversions round to whole degrees and percentages. HSL -> RGB ->
//! HSL is therefore lossy by up to one unit; RGB -> hex -> RGB is exact.

pub mod color;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod random;
pub mod scale;


pub use color::{
    hex_to_rgb, hsl_to_rgb, is_valid_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsb, rgb_to_hsl, Cmyk,
    Hsb, Hsl, Rgb,
};
pub use contrast::{
    accessible_text_color, contrast_ratio, relative_luminance, wcag_levels, TextColor, WcagLevels,
};
pub use error::{PaletteError, ParseColorError, ParseRuleError};
pub use harmony::{generate_harmony, generate_harmony_named, HarmonyRule, HARMONY_SIZE};
pub use palette::{HarmonyMode, LockMap, ModeState, PaletteState, DEFAULT_BASE};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use scale::{generate_scale, scale_step, ScaleStep, BASE_KEY, SCALE_KEYS};
