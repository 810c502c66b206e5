//! Palette session: palette state plus the formatting a renderer needs.

use hue_core::{
    accessible_text_color, contrast_ratio, generate_scale, wcag_levels, HarmonyMode,
    HarmonyRule, Hsl, PaletteState, RandomSource, RngSource, ScaleStep, TextColor, WcagLevels,
};
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::AppError;
use crate::models::AppConfig;

use super::format::{format_color, ColorFormat};
use super::namer::{Namer, NearestNamer};

/// Everything a renderer needs to draw one palette slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub slot: usize,
    pub color: Hsl,
    pub hex: String,
    pub formatted_value: String,
    pub text_color: TextColor,
    pub contrast_ratio: f64,
    pub wcag: WcagLevels,
    pub display_name: String,
    pub locked: bool,
}

impl Swatch {
    pub fn build<N: Namer + ?Sized>(
        slot: usize,
        color: Hsl,
        locked: bool,
        format: ColorFormat,
        namer: &N,
    ) -> Self {
        let rgb = color.to_rgb();
        let hex = rgb.to_hex();
        let text_color = accessible_text_color(rgb);
        let ratio = contrast_ratio(rgb, text_color.rgb());

        Self {
            slot,
            color,
            formatted_value: format_color(color, format),
            display_name: namer.lookup(&hex),
            hex,
            text_color,
            contrast_ratio: ratio,
            wcag: wcag_levels(ratio),
            locked,
        }
    }
}

/// A palette session as seen from the command line.
pub type CliSession = PaletteSession<RngSource<StdRng>, NearestNamer>;

/// One user's palette: state, namer and display format.
#[derive(Debug, Clone)]
pub struct PaletteSession<R, N> {
    state: PaletteState<R>,
    namer: N,
    format: ColorFormat,
}

impl CliSession {
    /// Session from configuration. A configured seed makes the session
    /// replay exactly.
    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        let state = PaletteState::with_base(config.base_hsl(), config.harmony_mode, rng);
        let namer = NearestNamer::with_extra(&config.names);

        tracing::debug!(
            base = %state.base(),
            mode = %state.mode(),
            rule = %state.effective_rule(),
            seeded = config.seed.is_some(),
            "Created palette session"
        );

        Self::new(state, namer, config.format)
    }
}

impl<R: RandomSource, N: Namer> PaletteSession<R, N> {
    pub fn new(state: PaletteState<R>, namer: N, format: ColorFormat) -> Self {
        Self {
            state,
            namer,
            format,
        }
    }

    pub fn state(&self) -> &PaletteState<R> {
        &self.state
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn mode(&self) -> HarmonyMode {
        self.state.mode()
    }

    pub fn effective_rule(&self) -> HarmonyRule {
        self.state.effective_rule()
    }

    /// Set the base color from hex. Malformed input leaves the session
    /// unchanged.
    pub fn set_base_hex(&mut self, hex: &str) -> Result<Hsl, AppError> {
        let color = Hsl::from_hex(hex).ok_or_else(|| AppError::InvalidHex(hex.to_string()))?;
        self.set_base(color);
        Ok(color)
    }

    pub fn set_base(&mut self, color: Hsl) {
        tracing::info!(base = %color, "Set base color");
        self.state.set_base_color(color);
    }

    pub fn set_mode(&mut self, mode: HarmonyMode) {
        self.state.set_harmony_mode(mode);
        tracing::info!(%mode, rule = %self.state.effective_rule(), "Set harmony mode");
    }

    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
    }

    /// Lock or unlock a slot, freezing the color it currently shows.
    /// Returns `true` when the slot ends up locked.
    pub fn toggle_lock(&mut self, slot: usize) -> Result<bool, AppError> {
        let locked = self.state.toggle_lock_rendered(slot)?;
        tracing::info!(slot, locked, "Toggled lock");
        Ok(locked)
    }

    pub fn randomize(&mut self) {
        self.state.randomize();
        tracing::info!(
            base = %self.state.base(),
            rule = %self.state.effective_rule(),
            "Randomized palette"
        );
    }

    /// The five rendered slots, locks applied, formatted for display.
    pub fn swatches(&self) -> Vec<Swatch> {
        let locks = self.state.locks();
        self.state
            .render()
            .iter()
            .enumerate()
            .map(|(slot, &color)| {
                Swatch::build(slot, color, locks.is_locked(slot), self.format, &self.namer)
            })
            .collect()
    }

    /// The raw tonal scale of the color rendered in `slot`.
    pub fn scale(&self, slot: usize) -> Result<Vec<ScaleStep>, AppError> {
        let color = self.state.color_at(slot)?;
        Ok(generate_scale(color).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_core::{SequenceSource, DEFAULT_BASE};
    use pretty_assertions::assert_eq;

    fn session(rule: HarmonyRule) -> PaletteSession<SequenceSource, NearestNamer> {
        let state = PaletteState::with_base(DEFAULT_BASE, rule.into(), SequenceSource::default());
        PaletteSession::new(state, NearestNamer::builtin(), ColorFormat::Hsl)
    }

    #[test]
    fn test_swatches_complementary() {
        let session = session(HarmonyRule::Complementary);
        let swatches = session.swatches();

        assert_eq!(swatches.len(), 5);
        let values: Vec<&str> = swatches.iter().map(|s| s.formatted_value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "hsl(217, 91%, 60%)",
                "hsl(37, 91%, 60%)",
                "hsl(37, 91%, 80%)",
                "hsl(37, 91%, 40%)",
                "hsl(217, 91%, 30%)",
            ]
        );
        assert!(swatches.iter().all(|s| !s.locked));
        assert_eq!(swatches[4].text_color, TextColor::White);
        assert_eq!(swatches[2].text_color, TextColor::Black);
    }

    #[test]
    fn test_swatch_contrast_matches_text_color() {
        let session = session(HarmonyRule::Triadic);
        for swatch in session.swatches() {
            let expected = contrast_ratio(swatch.color.to_rgb(), swatch.text_color.rgb());
            assert_eq!(swatch.contrast_ratio, expected);
            assert_eq!(swatch.wcag, wcag_levels(expected));
            assert!(swatch.wcag.aa_large, "slot {} ratio {}", swatch.slot, expected);
        }
    }

    #[test]
    fn test_set_base_hex_rejects_malformed() {
        let mut session = session(HarmonyRule::Analogous);
        assert!(matches!(
            session.set_base_hex("#12"),
            Err(AppError::InvalidHex(_))
        ));
        assert_eq!(session.state().base(), DEFAULT_BASE);

        let color = session.set_base_hex("#ff0000").unwrap();
        assert_eq!(color, Hsl::new(0, 100, 50));
        assert_eq!(session.swatches()[1].color, Hsl::new(30, 100, 50));
    }

    #[test]
    fn test_toggle_lock_marks_swatch() {
        let mut session = session(HarmonyRule::Analogous);
        let before = session.swatches()[3].clone();

        assert!(session.toggle_lock(3).unwrap());
        session.set_base_hex("#00ff00").unwrap();

        let after = &session.swatches()[3];
        assert!(after.locked);
        assert_eq!(after.color, before.color);

        assert!(!session.toggle_lock(3).unwrap());
        assert!(!session.swatches()[3].locked);
    }

    #[test]
    fn test_toggle_lock_out_of_range() {
        let mut session = session(HarmonyRule::Analogous);
        assert!(matches!(session.toggle_lock(5), Err(AppError::Palette(_))));
    }

    #[test]
    fn test_scale_for_slot() {
        let session = session(HarmonyRule::Complementary);
        let scale = session.scale(1).unwrap();
        assert_eq!(scale.len(), 10);
        assert_eq!(scale[5].color, Hsl::new(37, 91, 60));
        assert!(session.scale(9).is_err());
    }

    #[test]
    fn test_format_switch() {
        let mut session = session(HarmonyRule::Complementary);
        session.set_format(ColorFormat::Rgb);
        assert_eq!(session.swatches()[0].formatted_value, "rgb(60, 131, 246)");
    }

    #[test]
    fn test_display_name_uses_namer() {
        let state = PaletteState::with_base(
            Hsl::new(0, 100, 50),
            HarmonyRule::Triadic.into(),
            SequenceSource::default(),
        );
        let session = PaletteSession::new(state, |hex: &str| hex.to_uppercase(), ColorFormat::Hex);
        assert_eq!(session.swatches()[0].display_name, "#FF0000");
    }

    #[test]
    fn test_from_config_seeded_replays() {
        let config = AppConfig {
            seed: Some(5),
            ..AppConfig::default()
        };
        let mut a = CliSession::from_config(&config);
        let mut b = CliSession::from_config(&config);
        a.randomize();
        b.randomize();
        assert_eq!(a.swatches(), b.swatches());
    }
}
