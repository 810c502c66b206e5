//! Harmony mode selection.
//!
//! The user picks either one of the five rules or `random`. Random mode
//! holds a concrete *effective* rule that is resampled explicitly, on
//! entering the mode and on each randomize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRuleError;
use crate::harmony::HarmonyRule;
use crate::random::RandomSource;

/// What the user selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HarmonyMode {
    /// Pick a concrete rule at random for every new palette
    #[default]
    Random,
    /// Always use this rule
    Rule(HarmonyRule),
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarmonyMode::Random => f.write_str("random"),
            HarmonyMode::Rule(rule) => fmt::Display::fmt(rule, f),
        }
    }
}

impl FromStr for HarmonyMode {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            Ok(HarmonyMode::Random)
        } else {
            s.parse().map(HarmonyMode::Rule)
        }
    }
}

impl From<HarmonyRule> for HarmonyMode {
    fn from(rule: HarmonyRule) -> Self {
        HarmonyMode::Rule(rule)
    }
}

impl TryFrom<String> for HarmonyMode {
    type Error = ParseRuleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HarmonyMode> for String {
    fn from(mode: HarmonyMode) -> Self {
        mode.to_string()
    }
}

/// Selected mode projected onto the rule actually used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeState {
    /// A rule chosen directly by the user
    Fixed(HarmonyRule),
    /// Random mode and the rule it currently resolves to
    Random {
        /// Rule used until the next resample
        effective: HarmonyRule,
    },
}

impl ModeState {
    /// Enter `mode`. Random mode draws its first effective rule here.
    pub fn enter<R: RandomSource>(mode: HarmonyMode, rng: &mut R) -> Self {
        match mode {
            HarmonyMode::Rule(rule) => ModeState::Fixed(rule),
            HarmonyMode::Random => ModeState::Random {
                effective: sample_rule(rng),
            },
        }
    }

    /// The mode the user selected.
    pub fn mode(&self) -> HarmonyMode {
        match *self {
            ModeState::Fixed(rule) => HarmonyMode::Rule(rule),
            ModeState::Random { .. } => HarmonyMode::Random,
        }
    }

    /// The rule used for generation.
    pub fn effective_rule(&self) -> HarmonyRule {
        match *self {
            ModeState::Fixed(rule) => rule,
            ModeState::Random { effective } => effective,
        }
    }

    /// Draw a new effective rule. No-op (and no draw) for a fixed rule.
    pub fn resample<R: RandomSource>(&mut self, rng: &mut R) {
        if let ModeState::Random { effective } = self {
            *effective = sample_rule(rng);
            tracing::debug!(rule = %effective, "resampled harmony rule");
        }
    }
}

fn sample_rule<R: RandomSource>(rng: &mut R) -> HarmonyRule {
    HarmonyRule::ALL[rng.pick(HarmonyRule::ALL.len())]
}
