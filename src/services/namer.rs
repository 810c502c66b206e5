//! Hex -> display name lookup.
//!
//! Names are best effort: every valid color gets the name of the closest
//! entry in the table, so two different colors can share a name.

use std::collections::HashMap;

use hue_core::Rgb;

/// Name reported for input that is not a valid hex color.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Maps a hex color to a human-readable name. Never fails.
pub trait Namer {
    fn lookup(&self, hex: &str) -> String;
}

impl<F> Namer for F
where
    F: Fn(&str) -> String,
{
    fn lookup(&self, hex: &str) -> String {
        self(hex)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct NamedColor {
    name: String,
    rgb: Rgb,
}

/// Nearest-match namer over the CSS named colors plus user extras.
#[derive(Debug, Clone)]
pub struct NearestNamer {
    entries: Vec<NamedColor>,
}

impl Default for NearestNamer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NearestNamer {
    /// The built-in CSS color table.
    pub fn builtin() -> Self {
        Self::with_extra(&HashMap::new())
    }

    /// Built-in table plus `extra` (hex -> name). Extra entries win exact
    /// ties. Keys that are not valid hex are skipped with a warning.
    pub fn with_extra(extra: &HashMap<String, String>) -> Self {
        let mut custom: Vec<NamedColor> = extra
            .iter()
            .filter_map(|(hex, name)| match hex.parse::<Rgb>() {
                Ok(rgb) => Some(NamedColor {
                    name: name.clone(),
                    rgb,
                }),
                Err(e) => {
                    tracing::warn!(%hex, %e, "Skipping custom color name with invalid hex");
                    None
                }
            })
            .collect();
        // HashMap order is arbitrary; keep lookups deterministic
        custom.sort_by_key(|c| (c.rgb.r, c.rgb.g, c.rgb.b));

        let builtin = CSS_COLORS.iter().map(|&(name, r, g, b)| NamedColor {
            name: name.to_string(),
            rgb: Rgb::new(r, g, b),
        });

        Self {
            entries: custom.into_iter().chain(builtin).collect(),
        }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Closest entry to `rgb` by squared RGB distance; first entry wins ties.
    pub fn nearest(&self, rgb: Rgb) -> Option<&str> {
        let distance = |c: &NamedColor| {
            let dr = c.rgb.r as i32 - rgb.r as i32;
            let dg = c.rgb.g as i32 - rgb.g as i32;
            let db = c.rgb.b as i32 - rgb.b as i32;
            dr * dr + dg * dg + db * db
        };

        let mut best: Option<(&NamedColor, i32)> = None;
        for entry in &self.entries {
            let d = distance(entry);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((entry, d));
            }
        }
        best.map(|(entry, _)| entry.name.as_str())
    }
}

impl Namer for NearestNamer {
    fn lookup(&self, hex: &str) -> String {
        match hex.parse::<Rgb>() {
            Ok(rgb) => self
                .nearest(rgb)
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            Err(_) => {
                tracing::debug!(%hex, "Cannot name invalid hex color");
                UNKNOWN_NAME.to_string()
            }
        }
    }
}

/// CSS Color Module Level 4 named colors (grey aliases omitted).
const CSS_COLORS: &[(&str, u8, u8, u8)] = &[
    ("Alice Blue", 240, 248, 255),
    ("Antique White", 250, 235, 215),
    ("Aqua", 0, 255, 255),
    ("Aquamarine", 127, 255, 212),
    ("Azure", 240, 255, 255),
    ("Beige", 245, 245, 220),
    ("Bisque", 255, 228, 196),
    ("Black", 0, 0, 0),
    ("Blanched Almond", 255, 235, 205),
    ("Blue", 0, 0, 255),
    ("Blue Violet", 138, 43, 226),
    ("Brown", 165, 42, 42),
    ("Burlywood", 222, 184, 135),
    ("Cadet Blue", 95, 158, 160),
    ("Chartreuse", 127, 255, 0),
    ("Chocolate", 210, 105, 30),
    ("Coral", 255, 127, 80),
    ("Cornflower Blue", 100, 149, 237),
    ("Cornsilk", 255, 248, 220),
    ("Crimson", 220, 20, 60),
    ("Dark Blue", 0, 0, 139),
    ("Dark Cyan", 0, 139, 139),
    ("Dark Goldenrod", 184, 134, 11),
    ("Dark Gray", 169, 169, 169),
    ("Dark Green", 0, 100, 0),
    ("Dark Khaki", 189, 183, 107),
    ("Dark Magenta", 139, 0, 139),
    ("Dark Olive Green", 85, 107, 47),
    ("Dark Orange", 255, 140, 0),
    ("Dark Orchid", 153, 50, 204),
    ("Dark Red", 139, 0, 0),
    ("Dark Salmon", 233, 150, 122),
    ("Dark Sea Green", 143, 188, 143),
    ("Dark Slate Blue", 72, 61, 139),
    ("Dark Slate Gray", 47, 79, 79),
    ("Dark Turquoise", 0, 206, 209),
    ("Dark Violet", 148, 0, 211),
    ("Deep Pink", 255, 20, 147),
    ("Deep Sky Blue", 0, 191, 255),
    ("Dim Gray", 105, 105, 105),
    ("Dodger Blue", 30, 144, 255),
    ("Fire Brick", 178, 34, 34),
    ("Floral White", 255, 250, 240),
    ("Forest Green", 34, 139, 34),
    ("Fuchsia", 255, 0, 255),
    ("Gainsboro", 220, 220, 220),
    ("Ghost White", 248, 248, 255),
    ("Gold", 255, 215, 0),
    ("Goldenrod", 218, 165, 32),
    ("Gray", 128, 128, 128),
    ("Green", 0, 128, 0),
    ("Green Yellow", 173, 255, 47),
    ("Honeydew", 240, 255, 240),
    ("Hot Pink", 255, 105, 180),
    ("Indian Red", 205, 92, 92),
    ("Indigo", 75, 0, 130),
    ("Ivory", 255, 255, 240),
    ("Khaki", 240, 230, 140),
    ("Lavender", 230, 230, 250),
    ("Lavender Blush", 255, 240, 245),
    ("Lawn Green", 124, 252, 0),
    ("Lemon Chiffon", 255, 250, 205),
    ("Light Blue", 173, 216, 230),
    ("Light Coral", 240, 128, 128),
    ("Light Cyan", 224, 255, 255),
    ("Light Goldenrod Yellow", 250, 250, 210),
    ("Light Gray", 211, 211, 211),
    ("Light Green", 144, 238, 144),
    ("Light Pink", 255, 182, 193),
    ("Light Salmon", 255, 160, 122),
    ("Light Sea Green", 32, 178, 170),
    ("Light Sky Blue", 135, 206, 250),
    ("Light Slate Gray", 119, 136, 153),
    ("Light Steel Blue", 176, 196, 222),
    ("Light Yellow", 255, 255, 224),
    ("Lime", 0, 255, 0),
    ("Lime Green", 50, 205, 50),
    ("Linen", 250, 240, 230),
    ("Maroon", 128, 0, 0),
    ("Medium Aquamarine", 102, 205, 170),
    ("Medium Blue", 0, 0, 205),
    ("Medium Orchid", 186, 85, 211),
    ("Medium Purple", 147, 112, 219),
    ("Medium Sea Green", 60, 179, 113),
    ("Medium Slate Blue", 123, 104, 238),
    ("Medium Spring Green", 0, 250, 154),
    ("Medium Turquoise", 72, 209, 204),
    ("Medium Violet Red", 199, 21, 133),
    ("Midnight Blue", 25, 25, 112),
    ("Mint Cream", 245, 255, 250),
    ("Misty Rose", 255, 228, 225),
    ("Moccasin", 255, 228, 181),
    ("Navajo White", 255, 222, 173),
    ("Navy", 0, 0, 128),
    ("Old Lace", 253, 245, 230),
    ("Olive", 128, 128, 0),
    ("Olive Drab", 107, 142, 35),
    ("Orange", 255, 165, 0),
    ("Orange Red", 255, 69, 0),
    ("Orchid", 218, 112, 214),
    ("Pale Goldenrod", 238, 232, 170),
    ("Pale Green", 152, 251, 152),
    ("Pale Turquoise", 175, 238, 238),
    ("Pale Violet Red", 219, 112, 147),
    ("Papaya Whip", 255, 239, 213),
    ("Peach Puff", 255, 218, 185),
    ("Peru", 205, 133, 63),
    ("Pink", 255, 192, 203),
    ("Plum", 221, 160, 221),
    ("Powder Blue", 176, 224, 230),
    ("Purple", 128, 0, 128),
    ("Rebecca Purple", 102, 51, 153),
    ("Red", 255, 0, 0),
    ("Rosy Brown", 188, 143, 143),
    ("Royal Blue", 65, 105, 225),
    ("Saddle Brown", 139, 69, 19),
    ("Salmon", 250, 128, 114),
    ("Sandy Brown", 244, 164, 96),
    ("Sea Green", 46, 139, 87),
    ("Seashell", 255, 245, 238),
    ("Sienna", 160, 82, 45),
    ("Silver", 192, 192, 192),
    ("Sky Blue", 135, 206, 235),
    ("Slate Blue", 106, 90, 205),
    ("Slate Gray", 112, 128, 144),
    ("Snow", 255, 250, 250),
    ("Spring Green", 0, 255, 127),
    ("Steel Blue", 70, 130, 180),
    ("Tan", 210, 180, 140),
    ("Teal", 0, 128, 128),
    ("Thistle", 216, 191, 216),
    ("Tomato", 255, 99, 71),
    ("Turquoise", 64, 224, 208),
    ("Violet", 238, 130, 238),
    ("Wheat", 245, 222, 179),
    ("White", 255, 255, 255),
    ("White Smoke", 245, 245, 245),
    ("Yellow", 255, 255, 0),
    ("Yellow Green", 154, 205, 50),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let namer = NearestNamer::builtin();
        assert_eq!(namer.lookup("#ff0000"), "Red");
        assert_eq!(namer.lookup("FFF"), "White");
        assert_eq!(namer.lookup("#663399"), "Rebecca Purple");
    }

    #[test]
    fn test_nearest_match() {
        let namer = NearestNamer::builtin();
        assert_eq!(namer.lookup("#fa0a05"), "Red");
        assert_eq!(namer.lookup("#3b82f6"), "Royal Blue");
        assert_eq!(namer.lookup("#000001"), "Black");
    }

    #[test]
    fn test_invalid_hex_is_unknown() {
        let namer = NearestNamer::builtin();
        assert_eq!(namer.lookup("#12"), UNKNOWN_NAME);
        assert_eq!(namer.lookup("banana"), UNKNOWN_NAME);
    }

    #[test]
    fn test_extra_names_win_exact_ties() {
        let mut extra = HashMap::new();
        extra.insert("#ff0000".to_string(), "Signal Red".to_string());
        extra.insert("#010203".to_string(), "Almost Black".to_string());
        extra.insert("zzz".to_string(), "Ignored".to_string());

        let namer = NearestNamer::with_extra(&extra);
        assert_eq!(namer.len(), NearestNamer::builtin().len() + 2);
        assert_eq!(namer.lookup("#ff0000"), "Signal Red");
        assert_eq!(namer.lookup("#010203"), "Almost Black");
        assert_eq!(namer.lookup("#020304"), "Almost Black");
        assert_eq!(namer.lookup("#000000"), "Black");
    }

    #[test]
    fn test_closure_namer() {
        let namer = |hex: &str| format!("name-of-{hex}");
        assert_eq!(namer.lookup("#abcdef"), "name-of-#abcdef");
    }
}
