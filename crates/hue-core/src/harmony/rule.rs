//! Harmony rule names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRuleError;

/// A fixed pattern for deriving four related colors from a seed hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyRule {
    /// Same hue, lightness and saturation variations
    Monochromatic,
    /// Neighbouring hues, +-30 and +-60 degrees
    Analogous,
    /// Opposite hue (180 degrees) plus light/dark variants
    Complementary,
    /// The two hues adjacent to the complement (150 and 210 degrees)
    SplitComplementary,
    /// Three hues evenly spaced (120 and 240 degrees)
    Triadic,
}

impl HarmonyRule {
    /// All rules, in table order.
    pub const ALL: [HarmonyRule; 5] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
    ];

    /// The kebab-case name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monochromatic" => Ok(Self::Monochromatic),
            "analogous" => Ok(Self::Analogous),
            "complementary" => Ok(Self::Complementary),
            "split-complementary" | "split_complementary" | "splitcomplementary" => {
                Ok(Self::SplitComplementary)
            }
            "triadic" => Ok(Self::Triadic),
            _ => Err(ParseRuleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("triadic".parse(), Ok(HarmonyRule::Triadic));
        assert_eq!("Analogous".parse(), Ok(HarmonyRule::Analogous));
        assert_eq!("split_complementary".parse(), Ok(HarmonyRule::SplitComplementary));
        assert_eq!(
            "tetradic".parse::<HarmonyRule>(),
            Err(ParseRuleError("tetradic".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for rule in HarmonyRule::ALL {
            assert_eq!(rule.to_string().parse(), Ok(rule));
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&HarmonyRule::SplitComplementary).unwrap();
        assert_eq!(json, "\"split-complementary\"");
    }
}
