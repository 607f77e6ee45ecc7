//! Game rules: the per-side reroll cycle, the computer's hold policies, and
//! win resolution.
//!
//! Nothing here owns match state. The controller in `game` strings these
//! pieces together and decides when each one runs.

pub mod outcome;
pub mod policy;
pub mod turn;

pub use outcome::{judge, judge_tie_round, Verdict};
pub use policy::{decide_holds, HoldPolicy, PolicyContext, RandomHolds, SmartHolds};
pub use turn::{TurnEngine, TurnPhase};
