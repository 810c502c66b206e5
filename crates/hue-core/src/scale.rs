//! Tonal scale generation.
//!
//! Produces the conventional design-system ramp (50 lightest ... 900
//! darkest) around one color. Step 500 is the input itself. Lighter steps
//! move lightness toward 100; darker steps move it toward 0 and add a
//! little saturation so deep shades do not look washed out. Hue never
//! changes.

use serde::{Deserialize, Serialize};

use crate::color::Hsl;

/// Step keys of a tonal scale, lightest first.
pub const SCALE_KEYS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// The key whose color equals the input.
pub const BASE_KEY: u16 = 500;

/// One step of a tonal scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleStep {
    /// Design-system step number (50..=900)
    pub key: u16,
    /// Color at this step
    pub color: Hsl,
}

/// Derive the color for one scale key.
pub fn scale_step(base: Hsl, key: u16) -> Hsl {
    let l = base.l as f64;
    let key = key as f64;
    let mid = BASE_KEY as f64;

    if key < mid {
        let factor = (mid - key) / mid;
        let new_l = l + (100.0 - l) * factor * 0.9;
        Hsl::new(base.h as i32, base.s as i32, new_l.round() as i32)
    } else if key > mid {
        let factor = (key - mid) / 400.0;
        let new_l = l - l * factor * 0.9;
        Hsl::new(base.h as i32, base.s as i32 + 5, new_l.round() as i32)
    } else {
        base
    }
}

/// Generate the 10-step tonal scale for `base`.
///
/// # Example
/// ```
/// use hue_core::{generate_scale, Hsl};
///
/// let base = Hsl::new(217, 91, 60);
/// let scale = generate_scale(base);
/// assert_eq!(scale[5].key, 500);
/// assert_eq!(scale[5].color, base);
/// ```
pub fn generate_scale(base: Hsl) -> [ScaleStep; 10] {
    SCALE_KEYS.map(|key| ScaleStep {
        key,
        color: scale_step(base, key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keys_in_order() {
        let scale = generate_scale(Hsl::new(0, 50, 50));
        let keys: Vec<u16> = scale.iter().map(|s| s.key).collect();
        assert_eq!(keys, SCALE_KEYS.to_vec());
    }

    #[test]
    fn test_known_values() {
        let scale = generate_scale(Hsl::new(217, 91, 40));
        let lightness: Vec<u8> = scale.iter().map(|s| s.color.l).collect();
        // 50:  40 + 60 * 0.9 * 0.9  = 88.6
        // 400: 40 + 60 * 0.2 * 0.9  = 50.8
        // 600: 40 - 40 * 0.25 * 0.9 = 31
        // 900: 40 - 40 * 1.0 * 0.9  = 4
        assert_eq!(lightness, vec![89, 83, 72, 62, 51, 40, 31, 22, 13, 4]);
    }

    #[test]
    fn test_darker_steps_boost_saturation() {
        let scale = generate_scale(Hsl::new(120, 40, 50));
        for step in &scale {
            let expected = if step.key > BASE_KEY { 45 } else { 40 };
            assert_eq!(step.color.s, expected, "key {}", step.key);
        }
    }

    #[test]
    fn test_saturation_boost_caps_at_100() {
        let scale = generate_scale(Hsl::new(120, 98, 50));
        assert_eq!(scale[9].color.s, 100);
    }

    #[test]
    fn test_hue_never_changes() {
        let base = Hsl::new(333, 70, 45);
        assert!(generate_scale(base).iter().all(|s| s.color.h == 333));
    }
}
