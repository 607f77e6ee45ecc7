//! Win resolution after a scored round.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerState, Side, Sides};

/// What a scored round means for the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Nobody has reached the target.
    Continue,
    /// The match is decided.
    Winner(Side),
    /// Both reached the target with identical attempts and scores.
    TieBreak,
}

impl Verdict {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, Verdict::Winner(s) if *s == side)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Verdict::Winner(side) => Some(*side),
            _ => None,
        }
    }
}

/// Decide the match from both records and the target.
///
/// - neither at the target: continue
/// - one at the target: that side wins
/// - both at the target: fewer attempts wins, then higher score, and a full
///   tie goes to a tie-break
#[must_use]
pub fn judge(players: &Sides<PlayerState>, target: u32) -> Verdict {
    let human = &players[Side::Human];
    let computer = &players[Side::Computer];

    match (human.reached(target), computer.reached(target)) {
        (false, false) => Verdict::Continue,
        (true, false) => Verdict::Winner(Side::Human),
        (false, true) => Verdict::Winner(Side::Computer),
        (true, true) => {
            if human.attempts != computer.attempts {
                Verdict::Winner(if human.attempts < computer.attempts {
                    Side::Human
                } else {
                    Side::Computer
                })
            } else if human.score != computer.score {
                Verdict::Winner(if human.score > computer.score {
                    Side::Human
                } else {
                    Side::Computer
                })
            } else {
                Verdict::TieBreak
            }
        }
    }
}

/// Compare one tie-break round. `None` means the sums matched.
#[must_use]
pub fn judge_tie_round(sums: Sides<u32>) -> Option<Side> {
    match sums[Side::Human].cmp(&sums[Side::Computer]) {
        std::cmp::Ordering::Greater => Some(Side::Human),
        std::cmp::Ordering::Less => Some(Side::Computer),
        std::cmp::Ordering::Equal => None,
    }
}
