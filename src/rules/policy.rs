//! Computer hold policies.
//!
//! Policies are trait-based so a host (or the autopilot) can plug in its own:
//! - `SmartHolds`: rule-based, deterministic
//! - `RandomHolds`: fair coin per die, the baseline the smart policy is
//!   measured against
//!
//! Policies only decide. Applying the mask and rerolling is the turn
//! engine's job.

use crate::core::{DiceSet, HoldMask, RandomSource, StrategyMode, DIE_COUNT};

/// Score context a policy decides in, seen from the deciding side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolicyContext {
    /// The deciding side's score.
    pub own_score: u32,
    /// The other side's score.
    pub opponent_score: u32,
    /// Match target score.
    pub target_score: u32,
}

impl PolicyContext {
    #[must_use]
    pub fn new(own_score: u32, opponent_score: u32, target_score: u32) -> Self {
        Self {
            own_score,
            opponent_score,
            target_score,
        }
    }

    /// How far behind the opponent we are (negative when ahead).
    #[must_use]
    pub fn deficit(&self) -> i64 {
        i64::from(self.opponent_score) - i64::from(self.own_score)
    }

    /// Points still needed to reach the target (negative once past it).
    #[must_use]
    pub fn remaining_to_target(&self) -> i64 {
        i64::from(self.target_score) - i64::from(self.own_score)
    }
}

/// Decides which dice to keep before a reroll.
pub trait HoldPolicy {
    /// Return the hold mask for `dice`. `rng` is available to stochastic
    /// policies; deterministic ones ignore it.
    fn decide(&self, dice: &DiceSet, ctx: &PolicyContext, rng: &mut dyn RandomSource) -> HoldMask;

    fn name(&self) -> &'static str;
}

/// Roll total above which the whole roll is banked.
const BANK_SUM: u32 = 20;
/// A roll below this total counts as weak.
const WEAK_SUM: u32 = 15;
/// Deficit beyond which a weak roll is rerolled aggressively.
const CATCH_UP_DEFICIT: i64 = 10;
/// Deficit up to which fives are still worth keeping.
const KEEP_FIVES_DEFICIT: i64 = 15;
/// Within this many points of the target, play safe.
const CLOSE_TO_TARGET: i64 = 25;
/// Under this many points from the target, fours are worth keeping.
const NEAR_TARGET: i64 = 40;

/// Rule-based policy. First matching rule wins:
///
/// 1. roll total above 20: keep everything
/// 2. more than 10 behind and total below 15: keep only 5s and 6s
/// 3. within 25 of the target: keep 4s and up
/// 4. otherwise per die: 6 always, 5 unless more than 15 behind,
///    4 if total is at least 15 or the target is under 40 away, 1-3 never
///
/// A total of 15 to 20 while far behind matches neither rule 1 nor rule 2
/// and lands in rule 4.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmartHolds;

impl SmartHolds {
    /// Pure form of the policy.
    #[must_use]
    pub fn holds_for(dice: &DiceSet, ctx: &PolicyContext) -> HoldMask {
        let sum = dice.sum();
        let deficit = ctx.deficit();
        let remaining = ctx.remaining_to_target();
        let values = dice.values();

        if sum > BANK_SUM {
            return [true; DIE_COUNT];
        }

        if deficit > CATCH_UP_DEFICIT && sum < WEAK_SUM {
            return values.map(|v| v >= 5);
        }

        if remaining <= CLOSE_TO_TARGET {
            return values.map(|v| v >= 4);
        }

        values.map(|v| match v {
            6 => true,
            5 => deficit <= KEEP_FIVES_DEFICIT,
            4 => sum >= WEAK_SUM || remaining < NEAR_TARGET,
            _ => false,
        })
    }
}

impl HoldPolicy for SmartHolds {
    fn decide(&self, dice: &DiceSet, ctx: &PolicyContext, _rng: &mut dyn RandomSource) -> HoldMask {
        Self::holds_for(dice, ctx)
    }

    fn name(&self) -> &'static str {
        "smart"
    }
}

/// Holds each die independently with probability 1/2.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomHolds;

impl HoldPolicy for RandomHolds {
    fn decide(
        &self,
        _dice: &DiceSet,
        _ctx: &PolicyContext,
        rng: &mut dyn RandomSource,
    ) -> HoldMask {
        let mut mask = [false; DIE_COUNT];
        for held in &mut mask {
            *held = rng.next_bool();
        }
        mask
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Computer hold decision from the raw scores.
///
/// Deterministic: same dice and scores, same mask.
#[must_use]
pub fn decide_holds(
    dice: &DiceSet,
    human_score: u32,
    comp_score: u32,
    target_score: u32,
) -> HoldMask {
    SmartHolds::holds_for(dice, &PolicyContext::new(comp_score, human_score, target_score))
}

impl StrategyMode {
    /// The policy this mode selects.
    #[must_use]
    pub fn policy(self) -> &'static dyn HoldPolicy {
        match self {
            StrategyMode::Smart => &SmartHolds,
            StrategyMode::Random => &RandomHolds,
        }
    }
}
