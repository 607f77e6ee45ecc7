//! Randomness sources for dice throws.
//!
//! The engine never reaches for ambient randomness. Every throw draws from a
//! [`RandomSource`] handed to the match at construction, so a fixed seed (or
//! a scripted sequence) reproduces a whole match.
//!
//! ## Sources
//!
//! - [`GameRng`]: seeded ChaCha8 stream, forkable per simulated match
//! - [`ScriptedSource`]: replays a fixed sequence of values, for tests
//!
//! ```
//! use dice_duel::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.next_in_range(1, 6);
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.next_in_range(1, 6), b.next_in_range(1, 6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer source injected into the engine.
pub trait RandomSource {
    /// Draw a uniform integer in `[low, high]` (both inclusive).
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Fair coin flip built on [`next_in_range`](Self::next_in_range).
    fn next_bool(&mut self) -> bool {
        self.next_in_range(0, 1) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).next_in_range(low, high)
    }

    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

/// Deterministic RNG for dice throws.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// Forking gives independent but reproducible streams, one per simulated
/// match.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }
}

impl RandomSource for GameRng {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    fn next_bool(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

/// Replays a fixed list of values, cycling when it runs out.
///
/// Values outside the requested range are clamped into it, so a script
/// written for die faces can also drive coin flips (1 or more reads as
/// `true`, 0 as `false`).
///
/// ```
/// use dice_duel::core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([6, 5, 4]);
/// assert_eq!(source.next_in_range(1, 6), 6);
/// assert_eq!(source.next_in_range(1, 6), 5);
/// assert_eq!(source.next_in_range(1, 6), 4);
/// assert_eq!(source.next_in_range(1, 6), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from a non-empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let values: Vec<u32> = values.into_iter().collect();
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}
