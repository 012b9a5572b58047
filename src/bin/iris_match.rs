//! Pits two entry points against each other over N games and prints the
//! win/draw tally.
//!
//! Usage: `iris_match <player1> <player2> [num_games]`, where each player
//! is one of:
//!   random
//!   minmax:<depth>
//!   mcts_time:<seconds>
//!   mcts_sims:<n>
//!   puct_time:<seconds>:<model_path>
//!   puct_sims:<n>:<model_path>

use std::env;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use iris_zero::api::{mcts_move_sims, mcts_move_time, minmax_move, puct_move_sims, puct_move_time, random_move};
use iris_zero::{State, Winner};

type Player = Box<dyn FnMut(State, &mut StdRng) -> (i8, i8)>;

fn parse_player(spec: &str) -> Player {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts.as_slice() {
        ["random"] => Box::new(|state, rng| random_move(state, rng)),
        ["minmax", depth] => {
            let depth: u32 = depth.parse().expect("depth must be an integer");
            Box::new(move |state, rng| minmax_move(state, depth, rng))
        }
        ["mcts_time", seconds] => {
            let seconds: f64 = seconds.parse().expect("seconds must be a number");
            Box::new(move |state, rng| mcts_move_time(state, seconds, rng))
        }
        ["mcts_sims", n] => {
            let n: u32 = n.parse().expect("n must be an integer");
            Box::new(move |state, rng| mcts_move_sims(state, n, rng))
        }
        ["puct_time", seconds, model_path] => {
            let seconds: f64 = seconds.parse().expect("seconds must be a number");
            let model_path = PathBuf::from(model_path);
            Box::new(move |state, rng| {
                puct_move_time(state, seconds, &model_path, rng).expect("failed to load evaluator")
            })
        }
        ["puct_sims", n, model_path] => {
            let n: u32 = n.parse().expect("n must be an integer");
            let model_path = PathBuf::from(model_path);
            Box::new(move |state, rng| puct_move_sims(state, n, &model_path, rng).expect("failed to load evaluator"))
        }
        _ => {
            eprintln!("unrecognized player spec: {spec}");
            std::process::exit(1);
        }
    }
}

/// Apply an external `(pawn_tag, node)` move to `state` by re-enumerating
/// and matching on the decoded pair, since the match runner only has
/// access to the entry points' public return value, not internal indices.
fn apply_move(state: State, mv: (i8, i8)) -> State {
    use iris_zero::enumerator::enumerate;
    use iris_zero::move_encoder::decode;
    for (index, successor) in enumerate(state) {
        if decode(&state, index) == mv {
            return successor;
        }
    }
    panic!("{mv:?} is not a legal move in {state:?}");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: iris_match <player1> <player2> [num_games]");
        std::process::exit(1);
    }
    let mut player1 = parse_player(&args[1]);
    let mut player2 = parse_player(&args[2]);
    let num_games: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(10);

    let mut rng = StdRng::from_entropy();
    let (mut wins1, mut wins2, mut draws) = (0u32, 0u32, 0u32);

    for game in 0..num_games {
        let mut state = State::initial();
        let mut plies = 0u32;
        while !state.is_terminal() && plies < 200 {
            let mv = if state.yellow_turn { player1(state, &mut rng) } else { player2(state, &mut rng) };
            state = apply_move(state, mv);
            plies += 1;
        }
        match state.winner() {
            Some(Winner::Yellow) => wins1 += 1,
            Some(Winner::Red) => wins2 += 1,
            None => draws += 1,
        }
        println!("game {game}: {plies} plies, winner = {:?}", state.winner());
    }

    println!("player1 wins: {wins1}, player2 wins: {wins2}, draws: {draws}");
}
