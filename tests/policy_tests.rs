//! Computer hold policy scenarios.

use dice_duel::core::ScriptedSource;
use dice_duel::{
    decide_holds, DiceSet, HoldPolicy, PolicyContext, RandomHolds, SmartHolds, StrategyMode,
};

fn dice(values: [u8; 5]) -> DiceSet {
    DiceSet::from_values(values).unwrap()
}

/// A total over 20 is banked even when far behind.
#[test]
fn test_high_roll_beats_catch_up() {
    let mask = decide_holds(&dice([6, 6, 5, 3, 2]), 40, 20, 101);
    assert_eq!(mask, [true; 5]);
}

/// Behind by 30 with a total of exactly 15: not weak, so the per-die rule
/// keeps only the 4 (fives are dropped when more than 15 behind).
#[test]
fn test_boundary_total_falls_through() {
    let mask = decide_holds(&dice([3, 2, 1, 4, 5]), 50, 20, 101);
    assert_eq!(mask, [false, false, false, true, false]);
}

/// Behind with a weak roll: only 5s and 6s survive.
#[test]
fn test_catch_up_rerolls_aggressively() {
    let mask = decide_holds(&dice([6, 4, 1, 2, 1]), 45, 20, 101);
    assert_eq!(mask, [true, false, false, false, false]);
}

/// Exactly 10 behind is not enough to trigger catch-up.
#[test]
fn test_catch_up_needs_more_than_ten() {
    // total 9, deficit 10, remaining 81: per-die rule, 4 kept only when
    // total >= 15 or remaining < 40
    let mask = decide_holds(&dice([4, 2, 1, 1, 1]), 30, 20, 101);
    assert_eq!(mask, [false, false, false, false, false]);
}

/// Within 25 of the target, 4s and up are kept.
#[test]
fn test_close_to_target_is_conservative() {
    let mask = decide_holds(&dice([4, 5, 6, 1, 3]), 0, 76, 101);
    assert_eq!(mask, [true, true, true, false, false]);

    // 26 away is not close
    let mask = decide_holds(&dice([4, 5, 6, 1, 3]), 0, 75, 101);
    assert_eq!(mask, [true, true, true, false, false]);
    let mask = decide_holds(&dice([4, 1, 1, 1, 2]), 0, 75, 101);
    assert_eq!(mask, [true, false, false, false, false]);
}

/// Default rule never keeps 1-3.
#[test]
fn test_low_faces_never_kept_by_default() {
    let mask = decide_holds(&dice([1, 2, 3, 3, 2]), 0, 0, 101);
    assert_eq!(mask, [false; 5]);
}

/// The pure function and the trait object agree.
#[test]
fn test_trait_matches_pure_function() {
    let mut rng = ScriptedSource::new([0]);
    let roll = dice([5, 4, 3, 6, 1]);
    let ctx = PolicyContext::new(20, 30, 101);

    let via_trait = StrategyMode::Smart.policy().decide(&roll, &ctx, &mut rng);
    assert_eq!(via_trait, decide_holds(&roll, 30, 20, 101));
    assert_eq!(via_trait, SmartHolds::holds_for(&roll, &ctx));
    // the smart policy draws nothing
    assert_eq!(rng.draws(), 0);
}

/// Random mode takes one coin flip per die.
#[test]
fn test_random_policy_draws_per_die() {
    let mut rng = ScriptedSource::new([1, 1, 0, 0, 1]);
    let mask = RandomHolds.decide(&dice([6; 5]), &PolicyContext::default(), &mut rng);
    assert_eq!(mask, [true, true, false, false, true]);
    assert_eq!(rng.draws(), 5);
}
