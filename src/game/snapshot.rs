//! Immutable views returned to the host after every engine call.
//!
//! The host keeps the latest snapshot and renders from it; nothing in here
//! points back into the live match.

use serde::{Deserialize, Serialize};

use crate::core::{DiceSet, MatchConfig, PlayerState, Side, Sides};
use crate::rules::TurnPhase;

/// Tie-break bookkeeping. Exists only while a tie is being broken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakState {
    /// Tie rounds thrown so far.
    pub round: u32,
    /// Sums from the latest tie round, if any.
    pub last_sums: Option<Sides<u32>>,
}

/// Match-level phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Regular rounds are being played.
    InProgress,
    /// Scores and attempts are level at or past the target.
    TieBreak(TieBreakState),
    /// Decided. Frozen until the match is reset.
    Won(Side),
}

impl MatchPhase {
    pub(crate) fn describe(self) -> &'static str {
        match self {
            MatchPhase::InProgress => "a round is in progress",
            MatchPhase::TieBreak(_) => "a tie-break is running",
            MatchPhase::Won(_) => "the match is over",
        }
    }
}

/// Result of scoring a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub human_score: u32,
    pub computer_score: u32,
    /// What each side banked this round.
    pub round_sums: Sides<u32>,
    /// The dice each side finished the round with.
    pub final_dice: Sides<DiceSet>,
    /// Set when this round decided the match.
    pub winner: Option<Side>,
    /// Set when this round sent the match into a tie-break.
    pub tie_break: bool,
}

/// One tie-break round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieRound {
    /// 1-based round number.
    pub round: u32,
    pub dice: Sides<DiceSet>,
    pub sums: Sides<u32>,
    /// `None` when the sums matched and another round is needed.
    pub winner: Option<Side>,
}

/// Dice state after a throw or a hold toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSnapshot {
    /// Dice to display for each side.
    pub dice: Sides<DiceSet>,
    /// Human rerolls left this round, `-1` once exhausted.
    pub rerolls_remaining: i8,
    /// Whether the score action is available.
    pub can_score: bool,
    /// Present when this throw spent the last reroll and the round was
    /// scored automatically.
    pub scored: Option<ScoreReport>,
    /// Present when this throw was a tie-break round.
    pub tie_round: Option<TieRound>,
}

/// Everything a host needs to redraw the game screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: MatchConfig,
    pub players: Sides<PlayerState>,
    pub phase: MatchPhase,
    /// Current round dice, or the latest tie round's dice once a tie-break
    /// has been thrown (kept after a tie-break win until the match resets).
    pub dice: Sides<DiceSet>,
    /// Human turn phase within the current round.
    pub turn: TurnPhase,
    pub computer_rerolls_remaining: i8,
    pub can_score: bool,
}

impl MatchSnapshot {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::Won(side) => Some(side),
            _ => None,
        }
    }

    /// Whether regular play (throw, hold, score) is possible.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == MatchPhase::InProgress
    }

    #[must_use]
    pub fn is_first_throw(&self) -> bool {
        self.turn == TurnPhase::AwaitingFirstThrow
    }

    #[must_use]
    pub fn rerolls_remaining(&self) -> i8 {
        self.turn.rerolls_remaining()
    }

    /// Match-win tally, e.g. `H:2 / C:1`.
    #[must_use]
    pub fn tally(&self) -> String {
        format!(
            "H:{} / C:{}",
            self.players[Side::Human].total_wins,
            self.players[Side::Computer].total_wins
        )
    }
}
