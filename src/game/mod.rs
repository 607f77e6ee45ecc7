//! Match orchestration for a host UI.
//!
//! - `controller`: `DiceMatch`, the round/match state machine
//! - `snapshot`: immutable views handed back after every action
//! - `autopilot`: drives the human side with a hold policy

pub mod autopilot;
pub mod controller;
pub mod snapshot;

pub use autopilot::{play_match, play_round, RoundOutcome};
pub use controller::DiceMatch;
pub use snapshot::{DiceSnapshot, MatchPhase, MatchSnapshot, ScoreReport, TieBreakState, TieRound};
