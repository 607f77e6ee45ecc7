//! Reroll cycle for one side within one round.
//!
//! ```text
//! AwaitingFirstThrow --throw--> Thrown{1} --throw--> Thrown{0} --throw--> Exhausted
//!                                 hold/unhold          hold/unhold
//! ```
//!
//! The first throw rolls all five dice. Every later throw rolls only the
//! unheld dice. After the third throw the budget is spent and the round has
//! to be scored.

use serde::{Deserialize, Serialize};

use crate::core::{DiceSet, EngineError, EngineResult, HoldMask, RandomSource, REROLL_BUDGET};

/// Where a side is in its reroll cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Round started, nothing thrown yet.
    AwaitingFirstThrow,
    /// At least one throw made; `rerolls_remaining` more are allowed.
    Thrown { rerolls_remaining: u8 },
    /// Budget spent. Only scoring can follow.
    Exhausted,
}

impl TurnPhase {
    /// Rerolls left, reporting `-1` once exhausted.
    #[must_use]
    pub fn rerolls_remaining(self) -> i8 {
        match self {
            TurnPhase::AwaitingFirstThrow => REROLL_BUDGET as i8,
            TurnPhase::Thrown { rerolls_remaining } => rerolls_remaining as i8,
            TurnPhase::Exhausted => -1,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            TurnPhase::AwaitingFirstThrow => "awaiting the first throw",
            TurnPhase::Thrown { .. } => "mid-round",
            TurnPhase::Exhausted => "the rerolls are exhausted",
        }
    }
}

/// One side's dice and reroll budget for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEngine {
    dice: DiceSet,
    phase: TurnPhase,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    /// Fresh round: unrolled dice, full budget.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dice: DiceSet::new(),
            phase: TurnPhase::AwaitingFirstThrow,
        }
    }

    #[must_use]
    pub fn dice(&self) -> DiceSet {
        self.dice
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn rerolls_remaining(&self) -> i8 {
        self.phase.rerolls_remaining()
    }

    /// Whether at least one throw has been made this round.
    #[must_use]
    pub fn has_thrown(&self) -> bool {
        self.phase != TurnPhase::AwaitingFirstThrow
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.phase == TurnPhase::Exhausted
    }

    /// Throw the dice: all of them the first time, the unheld ones after.
    pub fn throw(&mut self, rng: &mut impl RandomSource) -> EngineResult<DiceSet> {
        let (dice, phase) = match self.phase {
            TurnPhase::AwaitingFirstThrow => (
                DiceSet::roll_all(rng),
                TurnPhase::Thrown {
                    rerolls_remaining: REROLL_BUDGET - 1,
                },
            ),
            TurnPhase::Thrown { rerolls_remaining } => {
                let next = match rerolls_remaining.checked_sub(1) {
                    Some(left) => TurnPhase::Thrown { rerolls_remaining: left },
                    None => TurnPhase::Exhausted,
                };
                (self.dice.reroll_unheld(rng), next)
            }
            TurnPhase::Exhausted => return Err(EngineError::RerollsExhausted),
        };

        self.dice = dice;
        self.phase = phase;
        Ok(dice)
    }

    /// Keep die `index` on the next reroll.
    pub fn hold(&mut self, index: usize) -> EngineResult<DiceSet> {
        self.update_dice("hold a die", |dice| dice.set_hold(index, true))
    }

    /// Release die `index` so the next reroll draws it again.
    pub fn unhold(&mut self, index: usize) -> EngineResult<DiceSet> {
        self.update_dice("release a die", |dice| dice.set_hold(index, false))
    }

    pub fn toggle_hold(&mut self, index: usize) -> EngineResult<DiceSet> {
        self.update_dice("hold a die", |dice| dice.toggle_hold(index))
    }

    /// Replace every hold at once (the computer's decisions).
    pub fn apply_holds(&mut self, mask: HoldMask) -> EngineResult<DiceSet> {
        self.update_dice("hold dice", |dice| dice.with_holds(mask))
    }

    /// Tie-break throw: a full roll with no holds and no reroll cycle.
    #[must_use]
    pub fn single_throw(rng: &mut impl RandomSource) -> DiceSet {
        DiceSet::roll_all(rng)
    }

    /// Back to the start of a round.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn update_dice(
        &mut self,
        action: &'static str,
        f: impl FnOnce(&DiceSet) -> EngineResult<DiceSet>,
    ) -> EngineResult<DiceSet> {
        if !matches!(self.phase, TurnPhase::Thrown { .. }) {
            return Err(EngineError::InvalidTransition {
                action,
                phase: self.phase.describe(),
            });
        }
        self.dice = f(&self.dice)?;
        Ok(self.dice)
    }
}
