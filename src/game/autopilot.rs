//! Plays the human side of a match with a hold policy.
//!
//! The autopilot only uses the public host API (`throw_dice`,
//! `toggle_hold`, `score`), so a match it drives goes through exactly the
//! same transitions a UI would trigger.

use crate::core::{EngineResult, RandomSource, Side, DIE_COUNT};
use crate::rules::{HoldPolicy, PolicyContext};

use super::controller::DiceMatch;
use super::snapshot::{MatchPhase, ScoreReport, TieRound};

/// What one autopilot step produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A regular round was scored.
    Scored(ScoreReport),
    /// A tie-break round was thrown.
    TieRound(TieRound),
}

impl RoundOutcome {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            RoundOutcome::Scored(report) => report.winner,
            RoundOutcome::TieRound(round) => round.winner,
        }
    }
}

/// Play one round (or one tie-break round) for the human side.
///
/// Throws, asks `policy` which dice to keep, syncs the holds, and repeats
/// until the round is scored. Keeping all five dice ends the round early
/// with an explicit score.
pub fn play_round<R: RandomSource>(
    game: &mut DiceMatch<R>,
    policy: &dyn HoldPolicy,
) -> EngineResult<RoundOutcome> {
    loop {
        let snap = game.throw_dice()?;
        if let Some(report) = snap.scored {
            return Ok(RoundOutcome::Scored(report));
        }
        if let Some(round) = snap.tie_round {
            return Ok(RoundOutcome::TieRound(round));
        }

        let config = game.config();
        let ctx = PolicyContext::new(
            game.player(Side::Human).score,
            game.player(Side::Computer).score,
            config.target_score,
        );
        let dice = snap.dice[Side::Human];
        let mask = policy.decide(&dice, &ctx, game.rng_mut());

        if mask.iter().all(|&held| held) {
            return game.score().map(RoundOutcome::Scored);
        }

        let current = dice.holds();
        for index in (0..DIE_COUNT).filter(|&i| current[i] != mask[i]) {
            game.toggle_hold(index)?;
        }
    }
}

/// Play until the match is decided or `round_limit` rounds have passed.
///
/// Returns the winner, or `None` if the limit was hit first. A match that
/// is already decided returns its winner without playing.
pub fn play_match<R: RandomSource>(
    game: &mut DiceMatch<R>,
    policy: &dyn HoldPolicy,
    round_limit: usize,
) -> EngineResult<Option<Side>> {
    if let MatchPhase::Won(side) = game.phase() {
        return Ok(Some(side));
    }
    for _ in 0..round_limit {
        if let Some(side) = play_round(game, policy)?.winner() {
            return Ok(Some(side));
        }
    }
    Ok(None)
}
