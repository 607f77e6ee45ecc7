//! The two sides of a duel and their per-match records.
//!
//! ## Side
//!
//! `Human` or `Computer`. A duel always has exactly two sides.
//!
//! ## Sides
//!
//! One value per side, indexable by `Side`. Backed by a fixed array, so it is
//! `Copy` whenever `T` is.
//!
//! ## PlayerState
//!
//! Score, completed rounds and match wins for one side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Computer];

    /// Array index (human = 0, computer = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// Per-side storage with O(1) access.
///
/// ```
/// use dice_duel::core::{Side, Sides};
///
/// let mut sums = Sides::new(18, 14);
/// assert_eq!(sums[Side::Human], 18);
///
/// sums[Side::Computer] += 1;
/// assert_eq!(sums[Side::Computer], 15);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sides<T> {
    data: [T; 2],
}

impl<T> Sides<T> {
    /// Create from the human and computer values.
    pub const fn new(human: T, computer: T) -> Self {
        Self {
            data: [human, computer],
        }
    }

    /// Create with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self::new(factory(Side::Human), factory(Side::Computer))
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs, human first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Apply `f` to both values.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Sides<U> {
        Sides::new(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<Side> for Sides<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Match record for one side.
///
/// `score` and `attempts` only grow within a match and return to zero on a
/// match reset. `total_wins` survives match resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cumulative score this match.
    pub score: u32,
    /// Rounds scored this match.
    pub attempts: u32,
    /// Matches won since the engine was created.
    pub total_wins: u32,
}

impl PlayerState {
    /// Bank a round's dice sum.
    pub fn bank(&mut self, round_sum: u32) {
        self.score += round_sum;
        self.attempts += 1;
    }

    /// Zero the per-match fields, keeping the win tally.
    pub fn reset_match(&mut self) {
        self.score = 0;
        self.attempts = 0;
    }

    #[must_use]
    pub fn reached(&self, target: u32) -> bool {
        self.score >= target
    }
}
