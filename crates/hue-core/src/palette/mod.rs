//! Palette state
//!
//! Combines a base color, a harmony mode and per-slot locks into the
//! five colors handed to a renderer.

mod locks;
mod mode;
mod state;

pub use locks::LockMap;
pub use mode::{HarmonyMode, ModeState};
pub use state::{
    PaletteState, DEFAULT_BASE, RANDOM_HUE, RANDOM_LIGHTNESS, RANDOM_SATURATION,
};
