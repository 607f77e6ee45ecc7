//! Strategy comparison.
//!
//! Plays seeded matches with the autopilot on the human side and reports how
//! often the computer wins under each strategy.
//!
//! ```text
//! RUST_LOG=info cargo run --features cli --bin duel-sim -- --matches 500 --strategy both
//! ```

use clap::{Parser, ValueEnum};
use dice_duel::{
    play_match, DiceMatch, GameRng, HoldPolicy, MatchConfig, RandomHolds, Side, SmartHolds,
    StrategyMode,
};

#[derive(Parser, Debug)]
#[command(name = "duel-sim", about = "Compare computer dice strategies over many matches")]
struct Args {
    /// Matches to play per strategy.
    #[arg(long, default_value_t = 1000)]
    matches: usize,

    /// Base seed; every match forks its own stream from it.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Target score for every match.
    #[arg(long, default_value_t = 101)]
    target: i64,

    /// Computer strategy to measure.
    #[arg(long, value_enum, default_value_t = Computer::Both)]
    strategy: Computer,

    /// Policy the autopilot plays the human side with.
    #[arg(long, value_enum, default_value_t = Human::Smart)]
    human: Human,

    /// Give up on a match after this many rounds.
    #[arg(long, default_value_t = 500)]
    round_limit: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Computer {
    Smart,
    Random,
    Both,
}

impl Computer {
    fn modes(self) -> Vec<StrategyMode> {
        match self {
            Computer::Smart => vec![StrategyMode::Smart],
            Computer::Random => vec![StrategyMode::Random],
            Computer::Both => vec![StrategyMode::Smart, StrategyMode::Random],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Human {
    Smart,
    Random,
}

impl Human {
    fn policy(self) -> &'static dyn HoldPolicy {
        match self {
            Human::Smart => &SmartHolds,
            Human::Random => &RandomHolds,
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    human: usize,
    computer: usize,
    unfinished: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("duel-sim: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let human = args.human.policy();
    for strategy in args.strategy.modes() {
        let config = MatchConfig::default()
            .with_target_score(args.target)?
            .with_strategy(strategy);
        let tally = simulate(config, human, args)?;
        report(strategy, &tally, args.matches);
    }
    Ok(())
}

fn simulate(
    config: MatchConfig,
    human: &dyn HoldPolicy,
    args: &Args,
) -> Result<Tally, Box<dyn std::error::Error>> {
    log::info!("{:<32}{:<16}{}", "simulating", config.strategy, args.matches);
    let mut root = GameRng::new(args.seed);
    let mut tally = Tally::default();

    for i in 0..args.matches {
        let mut game = DiceMatch::new(config, root.fork())?;
        match play_match(&mut game, human, args.round_limit)? {
            Some(Side::Human) => tally.human += 1,
            Some(Side::Computer) => tally.computer += 1,
            None => tally.unfinished += 1,
        }
        if (i + 1) % 100 == 0 {
            log::debug!("{:<32}{:<16}{}", "progress", i + 1, args.matches);
        }
    }
    Ok(tally)
}

fn report(strategy: StrategyMode, tally: &Tally, matches: usize) {
    let rate = |n: usize| 100.0 * n as f64 / matches.max(1) as f64;
    println!(
        "{:<16} computer {:>6.2}%  human {:>6.2}%  unfinished {}",
        strategy,
        rate(tally.computer),
        rate(tally.human),
        tally.unfinished
    );
}
