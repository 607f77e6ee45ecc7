//! Match configuration.
//!
//! A host configures a match with:
//! - a target score: the cumulative score that makes a side eligible to win
//! - a strategy mode: how the computer picks dice to hold on a reroll
//!
//! Both survive `reset_match`; only an explicit reconfiguration changes them.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Target score used when the host does not pick one.
pub const DEFAULT_TARGET_SCORE: u32 = 101;

/// Extra throws each side gets per round after its first throw.
pub const REROLL_BUDGET: u8 = 2;

/// How the computer decides which dice to keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyMode {
    /// Rule-based policy that weighs the roll, the score gap and the
    /// distance to the target.
    #[default]
    Smart,
    /// Holds each die with probability 1/2. Baseline for comparison.
    Random,
}

impl StrategyMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StrategyMode::Smart => "Smart Strategy",
            StrategyMode::Random => "Random Strategy",
        }
    }
}

impl std::fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for StrategyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "smart" => Ok(StrategyMode::Smart),
            "random" => Ok(StrategyMode::Random),
            other => Err(format!("unknown strategy '{other}' (expected smart or random)")),
        }
    }
}

/// Configuration for one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score a side must reach or exceed to be eligible to win.
    pub target_score: u32,

    /// Computer hold policy.
    pub strategy: StrategyMode,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            strategy: StrategyMode::Smart,
        }
    }
}

impl MatchConfig {
    /// Set the target score, rejecting non-positive values.
    pub fn with_target_score(mut self, target: i64) -> EngineResult<Self> {
        self.target_score = parse_target(target)?;
        Ok(self)
    }

    /// Set the computer's strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyMode) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check the configuration. Only the target score can be invalid.
    pub fn validate(&self) -> EngineResult<()> {
        if self.target_score == 0 {
            return Err(EngineError::InvalidTarget(0));
        }
        Ok(())
    }
}

/// Convert a host-supplied target into a score threshold.
///
/// Hosts usually parse free text, so the input is signed: zero, negatives
/// and values beyond `u32` are all `InvalidTarget`.
pub fn parse_target(target: i64) -> EngineResult<u32> {
    match u32::try_from(target) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(EngineError::InvalidTarget(target)),
    }
}
