//! # Iris engine
//!
//! A bit-encoded rule engine and family of search drivers for Iris, a
//! two-player, five-pawn board game played over a 21-node graph. Each
//! player steers one colored pawn toward the opposing outer ring while
//! three shared neutral pawns (black, white, orange) lay tiles that
//! constrain future colored moves.
//!
//! It provides modules for:
//! - Board topology and the position record (`topology`, `state`)
//! - Move legality and state transition (`rules`)
//! - Successor enumeration and the move index codec (`enumerator`, `move_encoder`)
//! - Neural-network input encoding (`tensor`)
//! - Shared reservoir sampling (`sampling`)
//! - Classical Monte Carlo tree search (`mcts`)
//! - Neural-guided PUCT search and self-play (`puct`)
//! - Depth-limited alpha-beta search (`minimax`)
//! - The pluggable evaluator interface (`evaluator`)
//! - Public entry points (`api`)

pub mod api;
pub mod constants;
pub mod enumerator;
pub mod evaluator;
pub mod mcts;
pub mod minimax;
pub mod move_encoder;
pub mod puct;
pub mod rules;
pub mod sampling;
pub mod state;
pub mod tensor;
pub mod topology;

pub use api::{
    generate_training_sample, mcts_move_sims, mcts_move_time, minmax_move, puct_move_sims, puct_move_time,
    random_move,
};
pub use evaluator::{EngineError, Evaluator, HeuristicEvaluator};
pub use state::{PawnKind, State, Winner};
