//! Engine error taxonomy.
//!
//! Every error is local and recoverable: a failed call leaves the match
//! exactly as it was. Only [`EngineError::PrematureScore`] and
//! [`EngineError::RerollsExhausted`] are meant for players; the rest mean
//! the host called the engine out of contract.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("die index {0} out of range (expected 0..=4)")]
    InvalidIndex(usize),
    #[error("die face {0} out of range (expected 1..=6)")]
    InvalidFace(u8),
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
    #[error("please throw the dice first")]
    PrematureScore,
    #[error("no rerolls left this round")]
    RerollsExhausted,
    #[error("invalid target score {0}: must be a positive integer")]
    InvalidTarget(i64),
}

impl EngineError {
    /// Whether the host should show this error to the player as a message.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, EngineError::PrematureScore | EngineError::RerollsExhausted)
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
