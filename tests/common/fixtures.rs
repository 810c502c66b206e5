//! Test fixtures and constants.

use std::io::Write;

use hue_core::{HarmonyMode, HarmonyRule, PaletteState, SequenceSource, DEFAULT_BASE};
use huekit::services::{ColorFormat, NearestNamer, PaletteSession};
use tempfile::NamedTempFile;

/// Hex colors used across tests
pub mod hexes {
    /// The default base color
    pub const BLUE: &str = "#3b82f6";

    /// A mid gray just under the AA threshold against white
    pub const MID_GRAY: &str = "#777777";

    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#000000";
}

/// Config exercising every key
pub const FULL_CONFIG: &str = r##"
base_color: "#ff0000"
harmony_mode: split-complementary
format: rgb
seed: 42
names:
  "#ff0001": "Almost Red"
"##;

pub type TestSession = PaletteSession<SequenceSource, NearestNamer>;

/// Session on the default base with a scripted random source
pub fn session(mode: HarmonyMode, draws: &[f64], format: ColorFormat) -> TestSession {
    let state = PaletteState::with_base(
        DEFAULT_BASE,
        mode,
        SequenceSource::new(draws.iter().copied()),
    );
    PaletteSession::new(state, NearestNamer::builtin(), format)
}

/// Fixed-rule session whose randomize always draws 0.5
pub fn fixed_session(rule: HarmonyRule) -> TestSession {
    session(rule.into(), &[0.5], ColorFormat::Hex)
}

/// Write YAML to a temp file that lives as long as the returned handle
pub fn config_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}
