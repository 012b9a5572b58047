//! Depth-limited minimax with alpha-beta pruning (component §4, entry #2).
//!
//! Grounded on the original engine's naive leaf evaluation (a near-win/loss
//! score shaded by depth so the search prefers quicker wins and slower
//! losses) and its alpha-beta recursion, reservoir-sampling uniformly among
//! root moves tied for the best value.

use rand::Rng;

use crate::enumerator::enumerate;
use crate::move_encoder::decode;
use crate::state::State;

/// Leaf/terminal evaluation: 0 for a non-terminal position, otherwise
/// ±1 shaded by `depth` so that a win found sooner (greater remaining
/// `depth`) scores closer to the extreme.
fn eval_game_state(state: &State, depth: u32) -> f64 {
    if state.yellow_pos >= crate::topology::OUTER_RING_START {
        1.0 - 0.01 / (depth as f64 + 1.0)
    } else if state.red_pos >= crate::topology::OUTER_RING_START {
        -1.0 + 0.01 / (depth as f64 + 1.0)
    } else {
        0.0
    }
}

fn search_minmax(depth: u32, state: State, mut alpha: f64, mut beta: f64) -> f64 {
    if depth == 0 {
        return eval_game_state(&state, 0);
    }
    if state.is_terminal() {
        return eval_game_state(&state, depth);
    }
    if state.yellow_turn {
        let mut value: f64 = -2.0;
        for (_, child) in enumerate(state) {
            value = value.max(search_minmax(depth - 1, child, alpha, beta));
            if value > beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value: f64 = 2.0;
        for (_, child) in enumerate(state) {
            value = value.min(search_minmax(depth - 1, child, alpha, beta));
            if value < alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Search `depth` plies from `state` and return the best move, converted
/// to the external `(pawn_tag, node)` pair. Ties at the root are broken by
/// uniform reservoir sampling over moves sharing the best value.
pub fn minmax_move(state: State, depth: u32, rng: &mut impl Rng) -> (i8, i8) {
    let alpha0 = -2.0f64;
    let beta0 = 2.0f64;

    let mut best_child: Option<State> = None;
    let mut ties_seen = 0u32;

    if state.yellow_turn {
        let mut best_value = -2.0;
        let mut alpha = alpha0;
        for (_, child) in enumerate(state) {
            let value = search_minmax(depth, child, alpha, beta0);
            if value > best_value {
                best_value = value;
                ties_seen = 1;
                best_child = Some(child);
                if value > beta0 {
                    break;
                }
                alpha = alpha.max(value);
            } else if value == best_value {
                ties_seen += 1;
                if rng.gen::<f64>() * ties_seen as f64 <= 1.0 {
                    best_child = Some(child);
                }
                if value > beta0 {
                    break;
                }
                alpha = alpha.max(value);
            }
        }
    } else {
        let mut best_value = 2.0;
        let mut beta = beta0;
        for (_, child) in enumerate(state) {
            let value = search_minmax(depth, child, alpha0, beta);
            if value < best_value {
                best_value = value;
                ties_seen = 1;
                best_child = Some(child);
                if value < alpha0 {
                    break;
                }
                beta = beta.min(value);
            } else if value == best_value {
                ties_seen += 1;
                if rng.gen::<f64>() * ties_seen as f64 <= 1.0 {
                    best_child = Some(child);
                }
                if value < alpha0 {
                    break;
                }
                beta = beta.min(value);
            }
        }
    }

    match best_child {
        Some(child) => crate::move_encoder::recover(&state, &child),
        None => decode(&state, 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn minmax_move_returns_a_legal_move() {
        let mut rng = StdRng::seed_from_u64(5);
        let (pawn_tag, node) = minmax_move(State::initial(), 2, &mut rng);
        assert!((-1..=3).contains(&pawn_tag));
        if pawn_tag != -1 {
            assert!((0..21).contains(&node));
        }
    }

    #[test]
    fn one_ply_from_near_win_takes_the_win() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = State::initial();
        state.yellow_pos = 15; // neighbors include outer-ring node 19
        let (pawn_tag, node) = minmax_move(state, 1, &mut rng);
        assert_eq!(pawn_tag, 0);
        assert!(node >= 16);
    }
}
