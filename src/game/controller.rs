//! Round and match controller.
//!
//! `DiceMatch` owns the two turn engines, the players' records and the match
//! phase. Each host action runs to completion and hands back a snapshot.
//!
//! ## Round flow
//!
//! - The human's first throw also gives the computer its first throw.
//! - The human may hold dice and reroll twice. The third throw spends the
//!   budget and scores the round automatically; an explicit `score` ends the
//!   round earlier.
//! - On scoring, the computer plays out its own two rerolls with its hold
//!   policy, both sums are banked, and the winner check runs.
//!
//! ## Tie-break
//!
//! When both sides reach the target with identical attempts and scores,
//! every throw becomes a single full roll per side until the sums differ.

use crate::core::{
    parse_target, DiceSet, EngineError, EngineResult, GameRng, MatchConfig, PlayerState,
    RandomSource, Side, Sides, StrategyMode,
};
use crate::rules::{judge, judge_tie_round, PolicyContext, TurnEngine, TurnPhase, Verdict};

use super::snapshot::{
    DiceSnapshot, MatchPhase, MatchSnapshot, ScoreReport, TieBreakState, TieRound,
};

/// One human-vs-computer match.
///
/// ```
/// use dice_duel::{DiceMatch, MatchConfig};
///
/// let mut game = DiceMatch::seeded(MatchConfig::default(), 42).unwrap();
/// let snap = game.throw_dice().unwrap();
/// assert_eq!(snap.rerolls_remaining, 1);
/// assert!(snap.can_score);
///
/// let report = game.score().unwrap();
/// assert_eq!(report.human_score, report.round_sums[dice_duel::Side::Human]);
/// ```
#[derive(Clone, Debug)]
pub struct DiceMatch<R: RandomSource = GameRng> {
    config: MatchConfig,
    rng: R,
    players: Sides<PlayerState>,
    turns: Sides<TurnEngine>,
    /// Dice of the latest tie round, shown until the match is reset.
    tie_dice: Option<Sides<DiceSet>>,
    phase: MatchPhase,
}

impl DiceMatch<GameRng> {
    /// Match driven by a seeded [`GameRng`].
    pub fn seeded(config: MatchConfig, seed: u64) -> EngineResult<Self> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> DiceMatch<R> {
    /// Start a match with the given randomness source.
    pub fn new(config: MatchConfig, rng: R) -> EngineResult<Self> {
        config.validate()?;
        log::info!(
            "new match: target {} with {}",
            config.target_score,
            config.strategy
        );
        Ok(Self {
            config,
            rng,
            players: Sides::default(),
            turns: Sides::default(),
            tie_dice: None,
            phase: MatchPhase::InProgress,
        })
    }

    #[must_use]
    pub fn config(&self) -> MatchConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn player(&self, side: Side) -> PlayerState {
        self.players[side]
    }

    /// The injected randomness source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Whether an explicit score is allowed right now.
    #[must_use]
    pub fn can_score(&self) -> bool {
        self.phase == MatchPhase::InProgress && self.turns[Side::Human].has_thrown()
    }

    /// Whether the human has thrown in the current round.
    #[must_use]
    pub fn round_in_progress(&self) -> bool {
        self.turns[Side::Human].has_thrown()
    }

    /// Throw the human's dice.
    ///
    /// During a tie-break this throws one tie round for both sides instead.
    /// If the throw spends the last reroll, the round is scored before
    /// returning and the report is attached to the snapshot.
    pub fn throw_dice(&mut self) -> EngineResult<DiceSnapshot> {
        match self.phase {
            MatchPhase::Won(_) => Err(self.forbidden("throw the dice")),
            MatchPhase::TieBreak(state) => self.throw_tie_round(state),
            MatchPhase::InProgress => {
                let first_throw = !self.turns[Side::Human].has_thrown();
                let dice = self.turns[Side::Human].throw(&mut self.rng)?;
                if first_throw {
                    let computer = self.turns[Side::Computer].throw(&mut self.rng)?;
                    log::debug!("computer opening throw {:?}", computer.values());
                }
                log::debug!(
                    "human throw {:?} ({} rerolls left)",
                    dice.values(),
                    self.turns[Side::Human].rerolls_remaining()
                );

                if self.turns[Side::Human].is_exhausted() {
                    let report = self.score_round()?;
                    Ok(DiceSnapshot {
                        dice: report.final_dice,
                        rerolls_remaining: self.turns[Side::Human].rerolls_remaining(),
                        can_score: false,
                        scored: Some(report),
                        tie_round: None,
                    })
                } else {
                    Ok(self.dice_snapshot())
                }
            }
        }
    }

    /// Flip the hold on one of the human's dice.
    pub fn toggle_hold(&mut self, index: usize) -> EngineResult<DiceSnapshot> {
        if self.phase != MatchPhase::InProgress {
            return Err(self.forbidden("hold a die"));
        }
        let dice = self.turns[Side::Human].toggle_hold(index)?;
        log::debug!("human holds {:?}", dice.holds());
        Ok(self.dice_snapshot())
    }

    /// End the round now and bank both sides' dice.
    pub fn score(&mut self) -> EngineResult<ScoreReport> {
        match self.phase {
            MatchPhase::InProgress if self.can_score() => self.score_round(),
            MatchPhase::InProgress => Err(EngineError::PrematureScore),
            _ => Err(self.forbidden("score")),
        }
    }

    /// Discard the current round's dice, holds and budgets.
    pub fn reset_round(&mut self) {
        self.turns = Sides::default();
        log::debug!("round reset");
    }

    /// Start the match over. Target, strategy and win tallies are kept.
    pub fn reset_match(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.reset_match();
        }
        self.turns = Sides::default();
        self.tie_dice = None;
        self.phase = MatchPhase::InProgress;
        log::info!("match reset ({})", self.snapshot().tally());
    }

    pub fn set_strategy(&mut self, mode: StrategyMode) {
        self.config.strategy = mode;
        log::info!("computer now uses {mode}");
    }

    /// Change the target score between rounds.
    pub fn set_target_score(&mut self, target: i64) -> EngineResult<()> {
        let target = parse_target(target)?;
        if self.round_in_progress() {
            return Err(self.forbidden("change the target score"));
        }
        if let MatchPhase::TieBreak(_) = self.phase {
            return Err(self.forbidden("change the target score"));
        }
        self.config.target_score = target;
        log::info!("target score set to {target}");
        Ok(())
    }

    /// Full view of the match for rendering.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config,
            players: self.players,
            phase: self.phase,
            dice: self.dice(),
            turn: self.turns[Side::Human].phase(),
            computer_rerolls_remaining: self.turns[Side::Computer].rerolls_remaining(),
            can_score: self.can_score(),
        }
    }

    fn dice(&self) -> Sides<DiceSet> {
        self.tie_dice.unwrap_or_else(|| self.turns.map(TurnEngine::dice))
    }

    fn dice_snapshot(&self) -> DiceSnapshot {
        DiceSnapshot {
            dice: self.dice(),
            rerolls_remaining: self.turns[Side::Human].rerolls_remaining(),
            can_score: self.can_score(),
            scored: None,
            tie_round: None,
        }
    }

    fn forbidden(&self, action: &'static str) -> EngineError {
        let phase = match self.phase {
            MatchPhase::InProgress if self.round_in_progress() => "a round is in progress",
            MatchPhase::InProgress => "a new round is waiting",
            other => other.describe(),
        };
        EngineError::InvalidTransition { action, phase }
    }

    fn score_round(&mut self) -> EngineResult<ScoreReport> {
        self.play_computer_rerolls()?;

        let final_dice = self.turns.map(|turn| turn.dice().released());
        let round_sums = final_dice.map(DiceSet::sum);
        for (side, player) in self.players.iter_mut() {
            player.bank(round_sums[side]);
        }
        self.turns = Sides::default();

        let verdict = judge(&self.players, self.config.target_score);
        match verdict {
            Verdict::Continue => {}
            Verdict::Winner(side) => self.declare_winner(side),
            Verdict::TieBreak => {
                log::info!(
                    "tie at {} after {} attempts, entering tie-break",
                    self.players[Side::Human].score,
                    self.players[Side::Human].attempts
                );
                self.phase = MatchPhase::TieBreak(TieBreakState::default());
            }
        }

        log::debug!(
            "round scored: human +{} = {}, computer +{} = {}",
            round_sums[Side::Human],
            self.players[Side::Human].score,
            round_sums[Side::Computer],
            self.players[Side::Computer].score
        );

        Ok(ScoreReport {
            human_score: self.players[Side::Human].score,
            computer_score: self.players[Side::Computer].score,
            round_sums,
            final_dice,
            winner: verdict.winner(),
            tie_break: verdict == Verdict::TieBreak,
        })
    }

    /// Computer spends its rerolls, stopping early once it keeps everything.
    fn play_computer_rerolls(&mut self) -> EngineResult<()> {
        let ctx = PolicyContext::new(
            self.players[Side::Computer].score,
            self.players[Side::Human].score,
            self.config.target_score,
        );
        let policy = self.config.strategy.policy();

        while let TurnPhase::Thrown { .. } = self.turns[Side::Computer].phase() {
            let dice = self.turns[Side::Computer].dice();
            let mask = policy.decide(&dice, &ctx, &mut self.rng);
            log::debug!(
                "computer ({}) holds {:?} of {:?}",
                policy.name(),
                mask,
                dice.values()
            );
            if mask.iter().all(|&held| held) {
                break;
            }
            self.turns[Side::Computer].apply_holds(mask)?;
            self.turns[Side::Computer].throw(&mut self.rng)?;
        }
        Ok(())
    }

    fn throw_tie_round(&mut self, state: TieBreakState) -> EngineResult<DiceSnapshot> {
        let rng = &mut self.rng;
        let dice = Sides::from_fn(|_| TurnEngine::single_throw(&mut *rng));
        let sums = dice.map(DiceSet::sum);
        let round = state.round.saturating_add(1);
        let winner = judge_tie_round(sums);
        self.tie_dice = Some(dice);

        log::debug!(
            "tie-break round {round}: human {} vs computer {}",
            sums[Side::Human],
            sums[Side::Computer]
        );

        match winner {
            Some(side) => self.declare_winner(side),
            None => {
                self.phase = MatchPhase::TieBreak(TieBreakState {
                    round,
                    last_sums: Some(sums),
                });
            }
        }

        Ok(DiceSnapshot {
            dice,
            rerolls_remaining: self.turns[Side::Human].rerolls_remaining(),
            can_score: false,
            scored: None,
            tie_round: Some(TieRound {
                round,
                dice,
                sums,
                winner,
            }),
        })
    }

    fn declare_winner(&mut self, side: Side) {
        self.players[side].total_wins += 1;
        self.phase = MatchPhase::Won(side);
        log::info!(
            "{side} wins {}-{} ({})",
            self.players[Side::Human].score,
            self.players[Side::Computer].score,
            self.snapshot().tally()
        );
    }
}
