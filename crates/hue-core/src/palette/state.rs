//! Palette session state.

use crate::color::Hsl;
use crate::error::PaletteError;
use crate::harmony::{generate_harmony, HarmonyRule, HARMONY_SIZE};
use crate::random::RandomSource;
use crate::scale::{generate_scale, ScaleStep};

use super::locks::LockMap;
use super::mode::{HarmonyMode, ModeState};

/// Base color a fresh palette starts from (`#3b82f6`).
pub const DEFAULT_BASE: Hsl = Hsl {
    h: 217,
    s: 91,
    l: 60,
};

/// Hue range sampled by [`PaletteState::randomize`].
pub const RANDOM_HUE: (i32, i32) = (0, 360);
/// Saturation range sampled by [`PaletteState::randomize`].
pub const RANDOM_SATURATION: (i32, i32) = (60, 100);
/// Lightness range sampled by [`PaletteState::randomize`].
pub const RANDOM_LIGHTNESS: (i32, i32) = (40, 80);

/// The mutable state behind one palette: base color, harmony mode and
/// slot locks, plus the random source used to resample them.
///
/// Each session owns its own state and generator, so independent sessions
/// never interfere and a seeded generator replays exactly.
///
/// # Example
///
/// ```
/// use hue_core::{HarmonyRule, Hsl, PaletteState, SequenceSource};
///
/// let mut state = PaletteState::new(SequenceSource::new([0.5]));
/// state.set_harmony_mode(HarmonyRule::Complementary.into());
///
/// let colors = state.render();
/// assert_eq!(colors[0], Hsl::new(217, 91, 60));
/// assert_eq!(colors[1], Hsl::new(37, 91, 60));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteState<R> {
    base: Hsl,
    mode: ModeState,
    locks: LockMap,
    rng: R,
}

impl<R: RandomSource> PaletteState<R> {
    /// Fresh state: default base color, random mode.
    pub fn new(rng: R) -> Self {
        Self::with_base(DEFAULT_BASE, HarmonyMode::Random, rng)
    }

    /// State with an explicit starting color and mode.
    pub fn with_base(base: Hsl, mode: HarmonyMode, mut rng: R) -> Self {
        let mode = ModeState::enter(mode, &mut rng);
        Self {
            base,
            mode,
            locks: LockMap::new(),
            rng,
        }
    }

    /// Current base (seed) color.
    pub fn base(&self) -> Hsl {
        self.base
    }

    /// Mode selected by the user.
    pub fn mode(&self) -> HarmonyMode {
        self.mode.mode()
    }

    /// Mode together with the rule it resolves to.
    pub fn mode_state(&self) -> ModeState {
        self.mode
    }

    /// Rule used by [`render`](Self::render).
    pub fn effective_rule(&self) -> HarmonyRule {
        self.mode.effective_rule()
    }

    /// Current locks.
    pub fn locks(&self) -> &LockMap {
        &self.locks
    }

    /// Replace the base color. Locks and mode are untouched.
    pub fn set_base_color(&mut self, color: Hsl) {
        tracing::debug!(base = %color, "set base color");
        self.base = color;
    }

    /// Select a harmony mode. Selecting `random` draws a new effective rule
    /// immediately, even if random mode was already active.
    pub fn set_harmony_mode(&mut self, mode: HarmonyMode) {
        self.mode = ModeState::enter(mode, &mut self.rng);
        tracing::debug!(%mode, rule = %self.mode.effective_rule(), "set harmony mode");
    }

    /// Produce a new palette.
    ///
    /// In random mode the effective rule is resampled first. Then, unless
    /// slot 0 is locked, a new vibrant base is drawn: hue in `[0, 360)`,
    /// saturation in `[60, 100)`, lightness in `[40, 80)`. Locks survive.
    pub fn randomize(&mut self) {
        self.mode.resample(&mut self.rng);

        if !self.locks.is_locked(0) {
            let h = self.rng.range(RANDOM_HUE.0, RANDOM_HUE.1);
            let s = self.rng.range(RANDOM_SATURATION.0, RANDOM_SATURATION.1);
            let l = self.rng.range(RANDOM_LIGHTNESS.0, RANDOM_LIGHTNESS.1);
            self.base = Hsl::new(h, s, l);
        }

        tracing::debug!(
            base = %self.base,
            rule = %self.mode.effective_rule(),
            locked = self.locks.len(),
            "randomized palette"
        );
    }

    /// Lock `slot` to `current` (the color it shows now), or unlock it if
    /// already locked. Returns `true` when the slot ends up locked.
    pub fn toggle_lock(&mut self, slot: usize, current: Hsl) -> Result<bool, PaletteError> {
        let locked = self.locks.toggle(slot, current)?;
        tracing::debug!(slot, locked, "toggled lock");
        Ok(locked)
    }

    /// Toggle a lock using the color currently rendered in that slot.
    pub fn toggle_lock_rendered(&mut self, slot: usize) -> Result<bool, PaletteError> {
        let current = self.color_at(slot)?;
        self.toggle_lock(slot, current)
    }

    /// Generate candidates for the effective rule and overlay locked slots.
    pub fn render(&self) -> [Hsl; HARMONY_SIZE] {
        let candidates = generate_harmony(self.base, self.mode.effective_rule());
        self.locks.apply(candidates)
    }

    /// Rendered color of one slot.
    pub fn color_at(&self, slot: usize) -> Result<Hsl, PaletteError> {
        self.render()
            .get(slot)
            .copied()
            .ok_or(PaletteError::SlotOutOfRange {
                slot,
                len: HARMONY_SIZE,
            })
    }

    /// Tonal scale of the rendered color in one slot.
    pub fn scale_at(&self, slot: usize) -> Result<[ScaleStep; 10], PaletteError> {
        self.color_at(slot).map(generate_scale)
    }
}
