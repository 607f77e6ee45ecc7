//! Property tests for dice, budgets, scores, policy and win resolution.

use dice_duel::core::ScriptedSource;
use dice_duel::{
    decide_holds, judge, DiceMatch, DiceSet, EngineError, GameRng, MatchConfig, MatchPhase,
    PlayerState, Side, Sides, StrategyMode, TurnEngine, Verdict,
};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum HostAction {
    Throw,
    Toggle(usize),
    Score,
    ResetRound,
}

fn host_action() -> impl Strategy<Value = HostAction> {
    prop_oneof![
        4 => Just(HostAction::Throw),
        3 => (0usize..6).prop_map(HostAction::Toggle),
        2 => Just(HostAction::Score),
        1 => Just(HostAction::ResetRound),
    ]
}

fn faces() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1u8..=6)
}

proptest! {
    #[test]
    fn prop_rolls_stay_on_the_die(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let dice = DiceSet::roll_all(&mut rng);
        prop_assert!(dice.values().iter().all(|v| (1..=6).contains(v)));
        prop_assert!((5..=30).contains(&dice.sum()));
    }

    #[test]
    fn prop_reroll_never_touches_held(
        seed in any::<u64>(),
        mask in prop::array::uniform5(any::<bool>()),
    ) {
        let mut rng = GameRng::new(seed);
        let dice = DiceSet::roll_all(&mut rng).with_holds(mask).unwrap();
        let rerolled = dice.reroll_unheld(&mut rng);

        for i in 0..5 {
            if mask[i] {
                prop_assert_eq!(rerolled.values()[i], dice.values()[i]);
            }
            prop_assert!((1..=6).contains(&rerolled.values()[i]));
        }
        prop_assert_eq!(rerolled.holds(), mask);
    }

    #[test]
    fn prop_budget_drops_by_one_per_throw(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut engine = TurnEngine::new();

        let mut expected = 2i8;
        prop_assert_eq!(engine.rerolls_remaining(), expected);
        for _ in 0..3 {
            engine.throw(&mut rng).unwrap();
            expected -= 1;
            prop_assert_eq!(engine.rerolls_remaining(), expected);
        }
        prop_assert_eq!(engine.throw(&mut rng), Err(EngineError::RerollsExhausted));
        prop_assert_eq!(engine.rerolls_remaining(), -1);
    }

    #[test]
    fn prop_scores_never_decrease(
        seed in any::<u64>(),
        random in any::<bool>(),
        actions in prop::collection::vec(host_action(), 1..120),
    ) {
        let strategy = if random { StrategyMode::Random } else { StrategyMode::Smart };
        let config = MatchConfig::default().with_strategy(strategy);
        let mut game = DiceMatch::seeded(config, seed).unwrap();
        let mut last = game.snapshot().players;

        for action in actions {
            let _ = match action {
                HostAction::Throw => game.throw_dice().map(|_| ()),
                HostAction::Toggle(i) => game.toggle_hold(i).map(|_| ()),
                HostAction::Score => game.score().map(|_| ()),
                HostAction::ResetRound => {
                    game.reset_round();
                    Ok(())
                }
            };

            let now = game.snapshot().players;
            for side in Side::ALL {
                prop_assert!(now[side].score >= last[side].score);
                prop_assert!(now[side].attempts >= last[side].attempts);
            }
            prop_assert_eq!(now[Side::Human].attempts, now[Side::Computer].attempts);
            prop_assert!(game.snapshot().rerolls_remaining() >= 0);
            last = now;
        }
    }

    #[test]
    fn prop_policy_is_deterministic(
        values in faces(),
        human in 0u32..150,
        comp in 0u32..150,
        target in 1u32..200,
    ) {
        let dice = DiceSet::from_values(values).unwrap();
        prop_assert_eq!(
            decide_holds(&dice, human, comp, target),
            decide_holds(&dice, human, comp, target)
        );
    }

    #[test]
    fn prop_policy_keeps_low_faces_only_when_banking(
        values in faces(),
        human in 0u32..150,
        comp in 0u32..150,
    ) {
        let dice = DiceSet::from_values(values).unwrap();
        let mask = decide_holds(&dice, human, comp, 101);

        if dice.sum() > 20 {
            prop_assert_eq!(mask, [true; 5]);
        } else {
            for i in 0..5 {
                if values[i] <= 3 {
                    prop_assert!(!mask[i]);
                }
                if values[i] == 6 {
                    prop_assert!(mask[i]);
                }
            }
        }
    }

    #[test]
    fn prop_judge_is_symmetric(
        h_score in 0u32..200, h_attempts in 0u32..30,
        c_score in 0u32..200, c_attempts in 0u32..30,
        target in 1u32..200,
    ) {
        let human = PlayerState {
            score: h_score,
            attempts: h_attempts,
            total_wins: 0,
        };
        let computer = PlayerState {
            score: c_score,
            attempts: c_attempts,
            total_wins: 0,
        };

        let verdict = judge(&Sides::new(human, computer), target);
        let swapped = judge(&Sides::new(computer, human), target);

        match verdict {
            Verdict::Continue => prop_assert_eq!(swapped, Verdict::Continue),
            Verdict::TieBreak => prop_assert_eq!(swapped, Verdict::TieBreak),
            Verdict::Winner(side) => prop_assert_eq!(swapped, Verdict::Winner(side.opponent())),
        }
        if h_score < target && c_score < target {
            prop_assert_eq!(verdict, Verdict::Continue);
        }
    }

    #[test]
    fn prop_tie_break_is_bounded_per_round(level_rounds in 0usize..40) {
        // every die 1 until the tie, then `level_rounds` level tie rounds,
        // then human 6s against computer 1s
        let mut values = vec![1u32; 20];
        values.extend(std::iter::repeat(2).take(10 * level_rounds));
        values.extend([6, 6, 6, 6, 6, 1, 1, 1, 1, 1]);
        let config = MatchConfig::default().with_target_score(5).unwrap();
        let mut game = DiceMatch::new(config, ScriptedSource::new(values)).unwrap();

        game.throw_dice().unwrap();
        prop_assert!(game.score().unwrap().tie_break);

        for round in 1..=level_rounds {
            let tie = game.throw_dice().unwrap().tie_round.unwrap();
            prop_assert_eq!(tie.round as usize, round);
            prop_assert_eq!(tie.winner, None);
        }
        let last = game.throw_dice().unwrap().tie_round.unwrap();
        prop_assert_eq!(last.winner, Some(Side::Human));
        prop_assert_eq!(game.phase(), MatchPhase::Won(Side::Human));
        prop_assert_eq!(game.player(Side::Human).total_wins, 1);
    }
}
