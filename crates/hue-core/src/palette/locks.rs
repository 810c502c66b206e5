//! Per-slot lock overrides.

use serde::{Deserialize, Serialize};

use crate::color::Hsl;
use crate::error::PaletteError;
use crate::harmony::HARMONY_SIZE;

/// Frozen colors keyed by palette slot.
///
/// A locked slot always renders its frozen color, whatever the base color
/// or harmony rule. Keys are limited to the palette's slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockMap {
    slots: [Option<Hsl>; HARMONY_SIZE],
}

impl LockMap {
    /// An empty lock map.
    pub fn new() -> Self {
        Self::default()
    }

    fn check(slot: usize) -> Result<(), PaletteError> {
        if slot < HARMONY_SIZE {
            Ok(())
        } else {
            Err(PaletteError::SlotOutOfRange {
                slot,
                len: HARMONY_SIZE,
            })
        }
    }

    /// The frozen color for `slot`, if locked. Out-of-range slots are never
    /// locked.
    pub fn get(&self, slot: usize) -> Option<Hsl> {
        self.slots.get(slot).copied().flatten()
    }

    /// Whether `slot` is locked.
    pub fn is_locked(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Freeze `color` at `slot`, replacing any previous value.
    pub fn lock(&mut self, slot: usize, color: Hsl) -> Result<(), PaletteError> {
        Self::check(slot)?;
        self.slots[slot] = Some(color);
        Ok(())
    }

    /// Release `slot`, returning the color it held.
    pub fn unlock(&mut self, slot: usize) -> Result<Option<Hsl>, PaletteError> {
        Self::check(slot)?;
        Ok(self.slots[slot].take())
    }

    /// Lock `slot` with `color` if unlocked, unlock it otherwise.
    /// Returns `true` when the slot ends up locked.
    pub fn toggle(&mut self, slot: usize, color: Hsl) -> Result<bool, PaletteError> {
        Self::check(slot)?;
        match self.slots[slot] {
            Some(_) => {
                self.slots[slot] = None;
                Ok(false)
            }
            None => {
                self.slots[slot] = Some(color);
                Ok(true)
            }
        }
    }

    /// Number of locked slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True when nothing is locked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locked slots and their colors, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Hsl)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, color)| color.map(|c| (slot, c)))
    }

    /// Overlay the frozen colors onto generated candidates.
    pub fn apply(&self, candidates: [Hsl; HARMONY_SIZE]) -> [Hsl; HARMONY_SIZE] {
        let mut out = candidates;
        for (slot, color) in self.iter() {
            out[slot] = color;
        }
        out
    }
}
