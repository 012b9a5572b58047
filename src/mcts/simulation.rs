//! Random-rollout simulation phase of classical MCTS (component G).

use rand::Rng;

use crate::constants::MAX_TURN_PER_GAME_SIM;
use crate::enumerator::enumerate;
use crate::sampling::reservoir_pick_uniform;
use crate::state::{State, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimResult {
    YellowWin,
    RedWin,
    Draw,
}

/// Play a uniform-random game from `start`, capped at `MAX_TURN_PER_GAME_SIM`
/// plies. Each move is chosen by reservoir sampling over the successor
/// enumerator of the current state.
pub fn simulate_random_playout(start: State, rng: &mut impl Rng) -> SimResult {
    let mut state = start;
    let mut turns = 0;
    while state.winner().is_none() && turns < MAX_TURN_PER_GAME_SIM {
        state = reservoir_pick_uniform(enumerate(state).map(|(_, s)| s), rng)
            .expect("enumerate always yields at least one item");
        turns += 1;
    }
    if turns >= MAX_TURN_PER_GAME_SIM {
        SimResult::Draw
    } else {
        match state.winner() {
            Some(Winner::Yellow) => SimResult::YellowWin,
            Some(Winner::Red) => SimResult::RedWin,
            None => unreachable!("loop only exits early when a winner exists"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rollout_terminates_and_yields_a_definite_result() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let result = simulate_random_playout(State::initial(), &mut rng);
            assert!(matches!(
                result,
                SimResult::YellowWin | SimResult::RedWin | SimResult::Draw
            ));
        }
    }

    #[test]
    fn already_terminal_state_returns_immediately() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = State::initial();
        s.yellow_pos = 16;
        assert_eq!(simulate_random_playout(s, &mut rng), SimResult::YellowWin);
    }
}
