//! Core engine types: dice, sides, configuration, errors, randomness.
//!
//! Everything here is plain data plus the injected randomness seam. The
//! turn and match state machines in `rules` and `game` are built on top.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{parse_target, MatchConfig, StrategyMode, DEFAULT_TARGET_SCORE, REROLL_BUDGET};
pub use dice::{DiceSet, HoldMask, DIE_COUNT, DIE_FACES};
pub use error::{EngineError, EngineResult};
pub use player::{PlayerState, Side, Sides};
pub use rng::{GameRng, RandomSource, ScriptedSource};
