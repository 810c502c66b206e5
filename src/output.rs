//! Plain-text rendering of palettes, scales and contrast checks.

use std::fmt::Write;

use hue_core::{
    accessible_text_color, contrast_ratio, wcag_levels, Rgb, ScaleStep, TextColor, WcagLevels,
};
use serde::Serialize;

use crate::services::{format_color, ColorFormat, Swatch};

/// Result of comparing a foreground against a background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub wcag: WcagLevels,
    pub best_text_on_background: TextColor,
}

impl ContrastReport {
    pub fn new(foreground: Rgb, background: Rgb) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            foreground: foreground.to_hex(),
            background: background.to_hex(),
            ratio,
            wcag: wcag_levels(ratio),
            best_text_on_background: accessible_text_color(background),
        }
    }
}

fn mark(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "fail"
    }
}

/// One line per slot: slot, lock marker, hex, value, text color, name.
pub fn palette_table(swatches: &[Swatch]) -> String {
    let mut out = String::new();
    for s in swatches {
        let lock = if s.locked { "*" } else { " " };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{}{} {}  {:<24} {:<5} {:>5.2}  {}",
            s.slot,
            lock,
            s.hex,
            s.formatted_value,
            s.text_color,
            s.contrast_ratio,
            s.display_name
        );
    }
    out
}

/// One line per scale step.
pub fn scale_table(steps: &[ScaleStep], format: ColorFormat) -> String {
    let mut out = String::new();
    for step in steps {
        let _ = writeln!(
            out,
            "{:>3}  {}  {}",
            step.key,
            step.color.to_hex(),
            format_color(step.color, format)
        );
    }
    out
}

pub fn contrast_text(report: &ContrastReport) -> String {
    let w = &report.wcag;
    format!(
        "{} on {}: {:.2}:1\n\
         AA {}  AAA {}  AA large {}  AAA large {}\n\
         best text on {}: {}",
        report.foreground,
        report.background,
        report.ratio,
        mark(w.aa),
        mark(w.aaa),
        mark(w.aa_large),
        mark(w.aaa_large),
        report.background,
        report.best_text_on_background,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_core::{generate_scale, Hsl};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contrast_report_black_on_white() {
        let report = ContrastReport::new(Rgb::BLACK, Rgb::WHITE);
        assert!((report.ratio - 21.0).abs() < 1e-9);
        assert!(report.wcag.aaa);
        assert_eq!(report.best_text_on_background, TextColor::Black);
        assert_eq!(
            contrast_text(&report),
            "#000000 on #ffffff: 21.00:1\n\
             AA pass  AAA pass  AA large pass  AAA large pass\n\
             best text on #ffffff: black"
        );
    }

    #[test]
    fn test_scale_table_lines() {
        let steps = generate_scale(Hsl::new(0, 0, 50));
        let table = scale_table(&steps, ColorFormat::Hsl);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[5], "500  #808080  hsl(0, 0%, 50%)");
        assert!(lines[0].starts_with(" 50  "));
    }

    #[test]
    fn test_palette_table_marks_locked() {
        let swatch = Swatch {
            slot: 2,
            color: Hsl::new(0, 100, 50),
            hex: "#ff0000".to_string(),
            formatted_value: "#ff0000".to_string(),
            text_color: TextColor::Black,
            contrast_ratio: 5.25,
            wcag: wcag_levels(5.25),
            display_name: "Red".to_string(),
            locked: true,
        };
        let table = palette_table(&[swatch]);
        assert!(table.starts_with("2* #ff0000"));
        assert!(table.trim_end().ends_with("Red"));
    }
}
