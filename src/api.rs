//! Public entry points (component J, §6): thin driver wrappers over the
//! rule engine, the two classical search engines, and the neural-guided
//! PUCT engine, each a plain function over a `State` plus driver
//! parameters.

use std::path::Path;

use rand::Rng;

use crate::enumerator::enumerate;
use crate::evaluator::{load_evaluator, EngineError};
use crate::move_encoder::decode;
use crate::puct;
use crate::sampling::reservoir_pick_uniform;
use crate::state::State;
use crate::tensor::Tensor;
use crate::{mcts, minimax};

/// Entry #1: a uniformly random legal move.
pub fn random_move(state: State, rng: &mut impl Rng) -> (i8, i8) {
    let (index, _) = reservoir_pick_uniform(enumerate(state), rng)
        .expect("enumerate always yields at least one item");
    decode(&state, index)
}

/// Entry #2: depth-limited alpha-beta minimax.
pub fn minmax_move(state: State, depth: u32, rng: &mut impl Rng) -> (i8, i8) {
    minimax::minmax_move(state, depth, rng)
}

/// Entry #3: classical MCTS with a wall-clock budget.
pub fn mcts_move_time(state: State, seconds: f64, rng: &mut impl Rng) -> (i8, i8) {
    mcts::mcts_move_time(state, seconds, rng)
}

/// Entry #4: classical MCTS with a fixed simulation count.
pub fn mcts_move_sims(state: State, n: u32, rng: &mut impl Rng) -> (i8, i8) {
    mcts::mcts_move_sims(state, n, rng)
}

/// Entry #5: PUCT with a wall-clock budget, evaluator loaded from `model_path`.
pub fn puct_move_time(
    state: State,
    seconds: f64,
    model_path: &Path,
    rng: &mut impl Rng,
) -> Result<(i8, i8), EngineError> {
    let evaluator = load_evaluator(model_path)?;
    Ok(puct::puct_move_time(state, seconds, &evaluator, rng))
}

/// Entry #6: PUCT with a fixed simulation count, evaluator loaded from `model_path`.
pub fn puct_move_sims(state: State, n: u32, model_path: &Path, rng: &mut impl Rng) -> Result<(i8, i8), EngineError> {
    let evaluator = load_evaluator(model_path)?;
    Ok(puct::puct_move_sims(state, n, &evaluator, rng))
}

/// Entry #7: self-play one game from `state`, returning a training sample
/// `(states, policies, values)`.
pub fn generate_training_sample(
    state: State,
    model_path: &Path,
    rng: &mut impl Rng,
) -> Result<(Vec<Tensor>, Vec<Vec<f64>>, Vec<f64>), EngineError> {
    let evaluator = load_evaluator(model_path)?;
    let sample = puct::generate_training_sample(state, &evaluator, rng);
    Ok((sample.positions, sample.policies, sample.values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_move_is_always_legal() {
        let mut rng = StdRng::seed_from_u64(3);
        let (pawn_tag, node) = random_move(State::initial(), &mut rng);
        assert!((-1..=3).contains(&pawn_tag));
        if pawn_tag != -1 {
            assert!((0..21).contains(&node));
        }
    }

    #[test]
    fn terminal_state_returns_sentinel_or_pass() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = State::initial();
        state.yellow_pos = 17;
        let (pawn_tag, node) = random_move(state, &mut rng);
        assert!(pawn_tag >= -1 && node >= -1);
    }

    #[test]
    fn puct_move_sims_surfaces_missing_model_as_engine_error() {
        let mut rng = StdRng::seed_from_u64(9);
        let err = puct_move_sims(State::initial(), 5, Path::new("/nonexistent/model.weights"), &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::EvaluatorLoad(_)));
    }
}
