//! # dice-duel
//!
//! Rules engine for a five-dice race between a human and the computer.
//!
//! Each round both sides throw five dice. The human may hold dice and reroll
//! up to twice; the computer does the same with a hold policy. Round sums
//! accumulate, and the first side to reach the target score wins. Both
//! reaching it in the same round is settled by attempts, then score, then a
//! tie-break of single throws.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: every die comes from a `RandomSource` the
//!    host supplies. A seed or a scripted sequence replays a match exactly.
//!
//! 2. **Explicit states**: turn and match progress are enums
//!    (`TurnPhase`, `MatchPhase`), not loose flags.
//!
//! 3. **Snapshots out**: every action returns an immutable snapshot for the
//!    host to render. The engine holds no UI state.
//!
//! ## Modules
//!
//! - `core`: dice, sides, configuration, errors, randomness
//! - `rules`: turn engine, computer hold policies, win resolution
//! - `game`: match controller, snapshots, autopilot

pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceSet, EngineError, EngineResult, GameRng, HoldMask, MatchConfig, PlayerState,
    RandomSource, ScriptedSource, Side, Sides, StrategyMode, DEFAULT_TARGET_SCORE, DIE_COUNT,
    REROLL_BUDGET,
};

pub use crate::rules::{
    decide_holds, judge, HoldPolicy, PolicyContext, RandomHolds, SmartHolds, TurnEngine,
    TurnPhase, Verdict,
};

pub use crate::game::{
    play_match, play_round, DiceMatch, DiceSnapshot, MatchPhase, MatchSnapshot, RoundOutcome,
    ScoreReport, TieBreakState, TieRound,
};
