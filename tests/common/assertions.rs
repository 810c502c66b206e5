//! Assertion helpers for tests.

use hue_core::{Hsl, HARMONY_SIZE};
use huekit::services::Swatch;
use pretty_assertions::assert_eq;

/// Assert a rendered palette has one swatch per slot, in slot order
pub fn assert_full_palette(swatches: &[Swatch]) {
    assert_eq!(swatches.len(), HARMONY_SIZE, "Expected {HARMONY_SIZE} swatches");
    for (i, swatch) in swatches.iter().enumerate() {
        assert_eq!(swatch.slot, i, "Swatch out of order: {swatch:?}");
    }
}

/// Assert every swatch carries text that passes WCAG AA.
///
/// Black or white always reaches at least sqrt(21) against any color, so
/// this holds for every palette.
pub fn assert_readable(swatches: &[Swatch]) {
    for swatch in swatches {
        assert!(
            swatch.wcag.aa,
            "Slot {} ({}) has unreadable text: ratio {:.2}",
            swatch.slot, swatch.hex, swatch.contrast_ratio
        );
    }
}

/// Assert the colors shown in each slot
pub fn assert_colors(swatches: &[Swatch], expected: &[Hsl]) {
    let colors: Vec<Hsl> = swatches.iter().map(|s| s.color).collect();
    assert_eq!(colors, expected);
}

/// Assert which slots are locked
pub fn assert_locked(swatches: &[Swatch], expected: &[usize]) {
    let locked: Vec<usize> = swatches
        .iter()
        .filter(|s| s.locked)
        .map(|s| s.slot)
        .collect();
    assert_eq!(locked, expected, "Unexpected locked slots");
}
