//! Five dice with per-die hold flags.
//!
//! `DiceSet` is a small `Copy` value: every operation returns a new set and
//! leaves the input untouched, so snapshots handed to the host can never be
//! mutated behind its back.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::rng::RandomSource;

/// Number of dice per player.
pub const DIE_COUNT: usize = 5;

/// Faces per die (values are `1..=DIE_FACES`).
pub const DIE_FACES: u8 = 6;

/// Hold decision for each die, `true` = keep.
pub type HoldMask = [bool; DIE_COUNT];

/// Five die values plus their held flags.
///
/// Held flags can only be set on a set that has been rolled at least once.
/// An unrolled set shows all ones. Deserialization checks both rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDiceSet")]
pub struct DiceSet {
    values: [u8; DIE_COUNT],
    held: HoldMask,
    rolled: bool,
}

/// Wire form of [`DiceSet`], validated before it becomes one.
#[derive(Deserialize)]
struct RawDiceSet {
    values: [u8; DIE_COUNT],
    held: HoldMask,
    rolled: bool,
}

impl TryFrom<RawDiceSet> for DiceSet {
    type Error = EngineError;

    fn try_from(raw: RawDiceSet) -> EngineResult<Self> {
        if let Some(&face) = raw.values.iter().find(|v| !(1..=DIE_FACES).contains(v)) {
            return Err(EngineError::InvalidFace(face));
        }
        if !raw.rolled && (raw.values != [1; DIE_COUNT] || raw.held.iter().any(|&h| h)) {
            return Err(EngineError::InvalidTransition {
                action: "hold or set dice",
                phase: "the dice have not been thrown",
            });
        }
        Ok(Self {
            values: raw.values,
            held: raw.held,
            rolled: raw.rolled,
        })
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceSet {
    /// An unrolled set: all ones, nothing held.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [1; DIE_COUNT],
            held: [false; DIE_COUNT],
            rolled: false,
        }
    }

    /// Build a rolled set from explicit values, nothing held.
    ///
    /// Returns `None` if any value is outside `1..=6`.
    #[must_use]
    pub fn from_values(values: [u8; DIE_COUNT]) -> Option<Self> {
        values
            .iter()
            .all(|v| (1..=DIE_FACES).contains(v))
            .then_some(Self {
                values,
                held: [false; DIE_COUNT],
                rolled: true,
            })
    }

    /// Roll every die; all holds cleared.
    #[must_use]
    pub fn roll_all(rng: &mut impl RandomSource) -> Self {
        let mut values = [0u8; DIE_COUNT];
        for value in &mut values {
            *value = draw_face(rng);
        }
        Self {
            values,
            held: [false; DIE_COUNT],
            rolled: true,
        }
    }

    /// Reroll every die that is not held. Held flags are kept as they are.
    #[must_use]
    pub fn reroll_unheld(&self, rng: &mut impl RandomSource) -> Self {
        let mut next = *self;
        for (value, &held) in next.values.iter_mut().zip(&self.held) {
            if !held {
                *value = draw_face(rng);
            }
        }
        next.rolled = true;
        next
    }

    /// Flip the held flag of one die.
    pub fn toggle_hold(&self, index: usize) -> EngineResult<Self> {
        let current = self.is_held(index)?;
        self.set_hold(index, !current)
    }

    /// Set the held flag of one die.
    pub fn set_hold(&self, index: usize, held: bool) -> EngineResult<Self> {
        check_index(index)?;
        self.ensure_rolled()?;
        let mut next = *self;
        next.held[index] = held;
        Ok(next)
    }

    /// Replace all held flags at once.
    pub fn with_holds(&self, mask: HoldMask) -> EngineResult<Self> {
        self.ensure_rolled()?;
        Ok(Self {
            held: mask,
            ..*self
        })
    }

    /// Same values, nothing held.
    #[must_use]
    pub fn released(&self) -> Self {
        Self {
            held: [false; DIE_COUNT],
            ..*self
        }
    }

    /// Sum of the five values, in `5..=30`.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }

    #[must_use]
    pub fn values(&self) -> [u8; DIE_COUNT] {
        self.values
    }

    #[must_use]
    pub fn holds(&self) -> HoldMask {
        self.held
    }

    pub fn is_held(&self, index: usize) -> EngineResult<bool> {
        check_index(index)?;
        Ok(self.held[index])
    }

    /// Whether the set has been rolled since it was created.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        self.rolled
    }

    /// Whether every die is held (a reroll would change nothing).
    #[must_use]
    pub fn all_held(&self) -> bool {
        self.held.iter().all(|&h| h)
    }

    fn ensure_rolled(&self) -> EngineResult<()> {
        if self.rolled {
            Ok(())
        } else {
            Err(EngineError::InvalidTransition {
                action: "hold a die",
                phase: "the dice have not been thrown",
            })
        }
    }
}

fn check_index(index: usize) -> EngineResult<()> {
    if index < DIE_COUNT {
        Ok(())
    } else {
        Err(EngineError::InvalidIndex(index))
    }
}

fn draw_face(rng: &mut impl RandomSource) -> u8 {
    let face = rng.next_in_range(1, u32::from(DIE_FACES));
    // out-of-range draws from a faulty source land on the nearest face
    u8::try_from(face).map_or(DIE_FACES, |f| f.clamp(1, DIE_FACES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedSource};

    #[test]
    fn test_new_set_is_unrolled() {
        let dice = DiceSet::new();
        assert_eq!(dice.values(), [1; 5]);
        assert_eq!(dice.holds(), [false; 5]);
        assert!(!dice.is_rolled());
        assert_eq!(dice.sum(), 5);
    }

    #[test]
    fn test_roll_all_uses_source() {
        let mut source = ScriptedSource::new([6, 5, 4, 3, 2]);
        let dice = DiceSet::roll_all(&mut source);

        assert_eq!(dice.values(), [6, 5, 4, 3, 2]);
        assert_eq!(dice.sum(), 20);
        assert!(dice.is_rolled());
    }

    /// Ignores the requested range.
    struct OutOfRange(Vec<u32>);

    impl RandomSource for OutOfRange {
        fn next_in_range(&mut self, _low: u32, _high: u32) -> u32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_out_of_range_draws_stay_on_the_die() {
        let mut source = OutOfRange(vec![256, 0, 7, 3, u32::MAX]);
        let dice = DiceSet::roll_all(&mut source);
        assert_eq!(dice.values(), [6, 1, 6, 3, 6]);
    }

    #[test]
    fn test_roll_all_clears_holds() {
        let mut rng = GameRng::new(1);
        let held = DiceSet::roll_all(&mut rng).with_holds([true; 5]).unwrap();
        assert!(held.all_held());

        let fresh = DiceSet::roll_all(&mut rng);
        assert_eq!(fresh.holds(), [false; 5]);
    }

    #[test]
    fn test_reroll_keeps_held_values() {
        let mut source = ScriptedSource::new([1, 2, 3, 4, 5]);
        let dice = DiceSet::roll_all(&mut source)
            .with_holds([true, false, true, false, false])
            .unwrap();

        let mut sixes = ScriptedSource::new([6]);
        let rerolled = dice.reroll_unheld(&mut sixes);

        assert_eq!(rerolled.values(), [1, 6, 3, 6, 6]);
        assert_eq!(rerolled.holds(), [true, false, true, false, false]);
        assert_eq!(sixes.draws(), 3);
    }

    #[test]
    fn test_toggle_hold() {
        let dice = DiceSet::from_values([2, 2, 2, 2, 2]).unwrap();

        let toggled = dice.toggle_hold(3).unwrap();
        assert_eq!(toggled.holds(), [false, false, false, true, false]);

        let back = toggled.toggle_hold(3).unwrap();
        assert_eq!(back.holds(), [false; 5]);

        // input untouched
        assert_eq!(dice.holds(), [false; 5]);
    }

    #[test]
    fn test_toggle_hold_invalid_index() {
        let dice = DiceSet::from_values([2, 2, 2, 2, 2]).unwrap();
        assert_eq!(dice.toggle_hold(5), Err(EngineError::InvalidIndex(5)));
    }

    #[test]
    fn test_hold_requires_roll() {
        let dice = DiceSet::new();
        assert!(matches!(
            dice.toggle_hold(0),
            Err(EngineError::InvalidTransition { .. })
        ));
        assert!(dice.with_holds([true; 5]).is_err());
    }

    #[test]
    fn test_from_values_rejects_bad_faces() {
        assert!(DiceSet::from_values([0, 1, 2, 3, 4]).is_none());
        assert!(DiceSet::from_values([7, 1, 2, 3, 4]).is_none());
        assert!(DiceSet::from_values([6, 6, 6, 6, 6]).is_some());
    }

    #[test]
    fn test_all_held_and_released() {
        let dice = DiceSet::from_values([3, 3, 3, 3, 3])
            .unwrap()
            .with_holds([true; 5])
            .unwrap();
        assert!(dice.all_held());
        assert!(!dice.released().all_held());
    }

    #[test]
    fn test_serde() {
        let dice = DiceSet::from_values([1, 2, 3, 4, 5]).unwrap().toggle_hold(0).unwrap();
        let json = serde_json::to_string(&dice).unwrap();
        let back: DiceSet = serde_json::from_str(&json).unwrap();
        assert_eq!(dice, back);

        let fresh = serde_json::to_string(&DiceSet::new()).unwrap();
        assert_eq!(serde_json::from_str::<DiceSet>(&fresh).unwrap(), DiceSet::new());
    }

    #[test]
    fn test_deserialize_rejects_bad_faces() {
        let json = r#"{"values":[9,0,200,9,9],"held":[true,true,true,true,true],"rolled":true}"#;
        let err = serde_json::from_str::<DiceSet>(json).unwrap_err();
        assert!(err.to_string().contains("die face 9"), "{err}");

        let json = r#"{"values":[1,2,3,4,7],"held":[false,false,false,false,false],"rolled":true}"#;
        assert!(serde_json::from_str::<DiceSet>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_holds_before_roll() {
        let json = r#"{"values":[1,1,1,1,1],"held":[true,false,false,false,false],"rolled":false}"#;
        assert!(serde_json::from_str::<DiceSet>(json).is_err());

        let json =
            r#"{"values":[6,6,6,6,6],"held":[false,false,false,false,false],"rolled":false}"#;
        assert!(serde_json::from_str::<DiceSet>(json).is_err());
    }
}
