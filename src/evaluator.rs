//! The evaluator interface (component I): a pluggable `(tensor) -> (policy,
//! value)` capability decoupling the PUCT engine from any particular neural
//! network or tensor backend.

use std::fmt;
use std::path::Path;

use crate::constants::MAX_MVTS;
use crate::tensor::Tensor;
use crate::topology::{degree, neighbor};

/// The one genuinely fallible boundary in this crate: loading or running an
/// evaluator. Surfaced to callers, never retried, never silently
/// substituted with a fallback.
#[derive(Debug)]
pub enum EngineError {
    EvaluatorLoad(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EvaluatorLoad(message) => write!(f, "failed to load evaluator: {message}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Given a state tensor, returns a policy distribution over the
/// `MAX_MVTS`-wide move-index space and a scalar value in `[-1, 1]` from the
/// perspective of the player to move. The policy must already be
/// soft-maxed; this engine never renormalizes it.
pub trait Evaluator {
    fn evaluate(&self, tensor: &Tensor) -> (Vec<f64>, f64);
}

/// Approximate number of hops from a node to the winning outer ring,
/// used only by [`HeuristicEvaluator`] below — not part of the rule engine.
const RING_DISTANCE: [u8; 21] = [
    3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0,
];

/// A working, non-learned stand-in for a neural evaluator: it makes the
/// engine runnable end to end without an external model file. A real
/// learned evaluator is a host-supplied [`Evaluator`] substituted at the
/// same seam.
///
/// It reads pawn positions and the turn indicator straight back out of the
/// tensor (never from a `State`, since a real network would not see one
/// either) and scores moves by how much closer they bring a pawn to the
/// outer ring.
#[derive(Debug)]
pub struct HeuristicEvaluator {
    progress_weight: f64,
}

impl HeuristicEvaluator {
    pub fn new(progress_weight: f64) -> Self {
        HeuristicEvaluator { progress_weight }
    }
}

fn argmax_col(tensor: &Tensor, col: usize) -> u8 {
    let mut best_node = 0u8;
    let mut best_value = f64::NEG_INFINITY;
    for node in 0..21u8 {
        let value = tensor.row(node as usize)[col];
        if value > best_value {
            best_value = value;
            best_node = node;
        }
    }
    best_node
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|x| x / sum).collect()
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, tensor: &Tensor) -> (Vec<f64>, f64) {
        let yellow_pos = argmax_col(tensor, 0);
        let red_pos = argmax_col(tensor, 1);
        let black_pos = argmax_col(tensor, 2);
        let white_pos = argmax_col(tensor, 3);
        let orange_pos = argmax_col(tensor, 4);
        let red_to_move = tensor.row(0)[22] > 0.5;

        let (mover_pos, opponent_pos) = if red_to_move {
            (red_pos, yellow_pos)
        } else {
            (yellow_pos, red_pos)
        };
        let value = (self.progress_weight
            * (RING_DISTANCE[opponent_pos as usize] as f64 - RING_DISTANCE[mover_pos as usize] as f64))
            .tanh();

        let mut logits = vec![0.0; MAX_MVTS as usize];
        for (band, pos) in [mover_pos, black_pos, white_pos, orange_pos].into_iter().enumerate() {
            for slot in 0..degree(pos) {
                let dest = neighbor(pos, slot);
                let idx = band * 10 + slot as usize;
                logits[idx] = self.progress_weight
                    * (RING_DISTANCE[pos as usize] as f64 - RING_DISTANCE[dest as usize] as f64);
            }
        }

        (softmax(&logits), value)
    }
}

/// Load a [`HeuristicEvaluator`] from `path`. The "model" format here is a
/// single floating-point progress weight — deliberately minimal, since
/// model deserialization is a host concern; a real evaluator backend would
/// implement its own loader and [`Evaluator`] impl at this same seam.
pub fn load_evaluator(path: &Path) -> Result<HeuristicEvaluator, EngineError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| EngineError::EvaluatorLoad(format!("failed to read {}: {e}", path.display())))?;
    let weight: f64 = contents
        .trim()
        .parse()
        .map_err(|e| EngineError::EvaluatorLoad(format!("malformed weights in {}: {e}", path.display())))?;
    Ok(HeuristicEvaluator::new(weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;
    use crate::tensor::encode;

    #[test]
    fn policy_is_a_probability_distribution() {
        let evaluator = HeuristicEvaluator::new(1.0);
        let (policy, value) = evaluator.evaluate(&encode(&State::initial()));
        assert_eq!(policy.len(), MAX_MVTS as usize);
        let sum: f64 = policy.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(policy.iter().all(|p| *p >= 0.0));
        assert!((-1.0..=1.0).contains(&value));
    }

    #[test]
    fn load_evaluator_surfaces_missing_file_as_engine_error() {
        let err = load_evaluator(Path::new("/nonexistent/path/to/model.weights")).unwrap_err();
        assert!(matches!(err, EngineError::EvaluatorLoad(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn load_evaluator_reads_a_weight_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.weights");
        std::fs::write(&path, "1.5\n").unwrap();
        let evaluator = load_evaluator(&path).unwrap();
        let (_, value) = evaluator.evaluate(&encode(&State::initial()));
        assert!((-1.0..=1.0).contains(&value));
    }
}
