//! Generates self-play training samples and prints a summary of each game.
//!
//! Usage: `iris_selfplay <model_path> [num_games]`

use std::env;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use iris_zero::api::generate_training_sample;
use iris_zero::State;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: iris_selfplay <model_path> [num_games]");
        std::process::exit(1);
    }
    let model_path = PathBuf::from(&args[1]);
    let num_games: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1);

    let mut rng = StdRng::from_entropy();

    for game in 0..num_games {
        match generate_training_sample(State::initial(), &model_path, &mut rng) {
            Ok((positions, policies, values)) => {
                let outcome = values.last().copied().unwrap_or(0.0);
                println!(
                    "game {game}: {} plies recorded, final value {outcome:+.2}",
                    positions.len()
                );
                debug_assert_eq!(positions.len(), policies.len());
            }
            Err(err) => {
                eprintln!("game {game}: failed to generate sample: {err}");
                std::process::exit(1);
            }
        }
    }
}
