use std::path::PathBuf;

use hue_core::{PaletteError, ParseRuleError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Rule(#[from] ParseRuleError),

    #[error("Unknown color format: {0:?} (expected hex, rgb, hsl, hsb or cmyk)")]
    UnknownFormat(String),

    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid slot {0:?}: expected a number from 0 to 4")]
    InvalidSlot(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_invalid_hex() {
        let error = AppError::InvalidHex("#12".to_string());
        assert_eq!(error.to_string(), "Invalid hex color: \"#12\"");
    }

    #[test]
    fn test_app_error_unknown_command() {
        let error = AppError::UnknownCommand("paint".to_string());
        assert_eq!(error.to_string(), "Unknown command: \"paint\"");
    }

    #[test]
    fn test_app_error_missing_argument() {
        let error = AppError::MissingArgument {
            command: "base",
            expected: "a hex color",
        };
        assert_eq!(
            error.to_string(),
            "Missing argument for 'base': expected a hex color"
        );
    }

    #[test]
    fn test_app_error_from_palette_error() {
        let error: AppError = PaletteError::SlotOutOfRange { slot: 9, len: 5 }.into();
        match error {
            AppError::Palette(_) => {}
            _ => panic!("Expected Palette variant"),
        }
        assert_eq!(
            error.to_string(),
            "Palette error: slot 9 is out of range (palette has 5 slots)"
        );
    }

    #[test]
    fn test_app_error_from_rule_error() {
        let error: AppError = ParseRuleError("zigzag".to_string()).into();
        assert_eq!(error.to_string(), "unknown harmony rule: \"zigzag\"");
    }

    #[test]
    fn test_config_error_read() {
        let error = ConfigError::Read {
            path: PathBuf::from("/missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "Failed to read /missing.yaml: not found");
    }
}
