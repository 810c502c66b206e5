use std::collections::HashMap;
use std::path::{Path, PathBuf};

use hue_core::{HarmonyMode, Hsl, DEFAULT_BASE};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::services::ColorFormat;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "HUEKIT_CONFIG";

/// Hex form of the default base color.
pub const DEFAULT_BASE_HEX: &str = "#3b82f6";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Starting base color as hex
    pub base_color: String,

    /// Starting harmony mode (`random` or a rule name)
    pub harmony_mode: HarmonyMode,

    /// Display format for swatch values
    pub format: ColorFormat,

    /// Seed for the random source; unset means OS entropy
    pub seed: Option<u64>,

    /// Extra hex -> name entries for the namer
    pub names: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_HEX.to_string(),
            harmony_mode: HarmonyMode::Random,
            format: ColorFormat::Hex,
            seed: None,
            names: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file. Read and parse failures are errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            mode = %config.harmony_mode,
            names = config.names.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve configuration for the command line.
    ///
    /// An explicit path must load. Otherwise the file named by
    /// `HUEKIT_CONFIG` is tried, falling back to defaults with a warning.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::discover_with(explicit, std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// [`discover`](Self::discover) with the environment path passed in.
    pub fn discover_with(
        explicit: Option<&Path>,
        env_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let Some(path) = env_path else {
            tracing::debug!("No config file configured, using defaults");
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    %e,
                    path = %path.display(),
                    "Failed to load config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// The configured base color, or the default if it is not valid hex.
    pub fn base_hsl(&self) -> Hsl {
        Hsl::from_hex(&self.base_color).unwrap_or_else(|| {
            tracing::warn!(
                base_color = %self.base_color,
                "Invalid base color in config, using default"
            );
            DEFAULT_BASE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_core::HarmonyRule;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.base_color, "#3b82f6");
        assert_eq!(config.harmony_mode, HarmonyMode::Random);
        assert_eq!(config.format, ColorFormat::Hex);
        assert_eq!(config.seed, None);
        assert!(config.names.is_empty());
        assert_eq!(config.base_hsl(), DEFAULT_BASE);
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r##"
base_color: "#ff0000"
harmony_mode: split-complementary
format: hsl
seed: 42
names:
  "#123456": Midnight Ink
"##;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.base_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(
            config.harmony_mode,
            HarmonyMode::Rule(HarmonyRule::SplitComplementary)
        );
        assert_eq!(config.format, ColorFormat::Hsl);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.names.get("#123456").unwrap(), "Midnight Ink");
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = AppConfig::from_yaml("format: cmyk\n").unwrap();
        assert_eq!(config.format, ColorFormat::Cmyk);
        assert_eq!(config.harmony_mode, HarmonyMode::Random);
        assert_eq!(config.base_color, "#3b82f6");
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_mode() {
        let result = AppConfig::from_yaml("harmony_mode: tetradic\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_base_color_falls_back() {
        let config = AppConfig::from_yaml("base_color: \"not-a-color\"\n").unwrap();
        assert_eq!(config.base_hsl(), DEFAULT_BASE);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "harmony_mode: triadic").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.harmony_mode, HarmonyMode::Rule(HarmonyRule::Triadic));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(&dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_discover_explicit_path_must_load() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(AppConfig::discover(Some(&missing)).is_err());
    }

    #[test]
    fn test_discover_env_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");

        let config = AppConfig::discover_with(None, Some(missing)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_env_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: not-a-number").unwrap();

        let config = AppConfig::discover_with(None, Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_env_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "harmony_mode: analogous\nseed: 3").unwrap();

        let config = AppConfig::discover_with(None, Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.harmony_mode, HarmonyMode::Rule(HarmonyRule::Analogous));
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_discover_explicit_path_wins_over_env() {
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, "format: cmyk").unwrap();
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::discover_with(
            Some(explicit.path()),
            Some(dir.path().join("missing.yaml")),
        )
        .unwrap();
        assert_eq!(config.format, ColorFormat::Cmyk);
    }

    #[test]
    fn test_discover_without_any_path_uses_defaults() {
        let config = AppConfig::discover_with(None, None).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
