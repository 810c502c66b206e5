//! Harmony generation
//!
//! A harmony is an ordered set of five colors. Slot 0 is always the base
//! color, unchanged; slots 1-4 are derived by the rule's table:
//!
//! | rule                | slot 1         | slot 2              | slot 3                      | slot 4                      |
//! |---------------------|----------------|---------------------|-----------------------------|-----------------------------|
//! | monochromatic       | l+30           | l-30                | s-20, l+40 (max 95)         | s+20, l-30 (min 10)         |
//! | analogous           | h+30           | h-30                | h+60                        | h-60                        |
//! | complementary       | h+180          | h+180, l+20 (max 90)| h+180, l-20 (min 10)        | l-30 (min 10)               |
//! | split-complementary | h+150          | h+210               | h+150, l-20 (min 10)        | h+210, l-20 (min 10)        |
//! | triadic             | h+120          | h+240               | h+120, l-20 (min 10)        | h+240, l-20 (min 10)        |
//!
//! Everything is clamped back into range after the table is applied.

mod rule;

pub use rule::HarmonyRule;

use crate::color::Hsl;

/// Number of colors in a generated harmony.
pub const HARMONY_SIZE: usize = 5;

/// Generate the five-color harmony for `base`.
///
/// # Example
/// ```
/// use hue_core::{generate_harmony, HarmonyRule, Hsl};
///
/// let base = Hsl::new(217, 91, 60);
/// let colors = generate_harmony(base, HarmonyRule::Complementary);
/// assert_eq!(colors[0], base);
/// assert_eq!(colors[1], Hsl::new(37, 91, 60));
/// ```
pub fn generate_harmony(base: Hsl, rule: HarmonyRule) -> [Hsl; HARMONY_SIZE] {
    let (h, s, l) = (base.h as i32, base.s as i32, base.l as i32);

    match rule {
        HarmonyRule::Monochromatic => [
            base,
            Hsl::new(h, s, l + 30),
            Hsl::new(h, s, l - 30),
            Hsl::new(h, s - 20, (l + 40).min(95)),
            Hsl::new(h, s + 20, (l - 30).max(10)),
        ],
        HarmonyRule::Analogous => [
            base,
            Hsl::new(h + 30, s, l),
            Hsl::new(h - 30, s, l),
            Hsl::new(h + 60, s, l),
            Hsl::new(h - 60, s, l),
        ],
        HarmonyRule::Complementary => [
            base,
            Hsl::new(h + 180, s, l),
            Hsl::new(h + 180, s, (l + 20).min(90)),
            Hsl::new(h + 180, s, (l - 20).max(10)),
            Hsl::new(h, s, (l - 30).max(10)),
        ],
        HarmonyRule::SplitComplementary => [
            base,
            Hsl::new(h + 150, s, l),
            Hsl::new(h + 210, s, l),
            Hsl::new(h + 150, s, (l - 20).max(10)),
            Hsl::new(h + 210, s, (l - 20).max(10)),
        ],
        HarmonyRule::Triadic => [
            base,
            Hsl::new(h + 120, s, l),
            Hsl::new(h + 240, s, l),
            Hsl::new(h + 120, s, (l - 20).max(10)),
            Hsl::new(h + 240, s, (l - 20).max(10)),
        ],
    }
}

/// Generate a harmony from a rule name.
///
/// An unrecognized name does not fail: the result holds only the base
/// color. Callers rendering a fixed number of swatches must handle the
/// short result.
pub fn generate_harmony_named(base: Hsl, rule: &str) -> Vec<Hsl> {
    match rule.parse::<HarmonyRule>() {
        Ok(rule) => generate_harmony(base, rule).to_vec(),
        Err(_) => {
            tracing::debug!(rule, "unknown harmony rule, returning base color only");
            vec![base]
        }
    }
}
