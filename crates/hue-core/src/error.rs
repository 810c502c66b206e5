//! Error types for color parsing and palette state operations.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// a non-hex character or an invalid digit count.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Non-hex character (including signs and whitespace)
    #[error("invalid hex character: {0:?}")]
    InvalidChar(char),
}

/// Error type for parsing harmony rule and mode names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony rule: {0:?}")]
pub struct ParseRuleError(pub String);

/// Error type for palette state operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Lock slot outside the palette (valid slots are 0..=4)
    #[error("slot {slot} is out of range (palette has {len} slots)")]
    SlotOutOfRange {
        /// Requested slot
        slot: usize,
        /// Palette length
        len: usize,
    },
}
