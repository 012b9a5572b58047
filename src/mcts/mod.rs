//! Classical Monte Carlo Tree Search with random rollouts (component G).

pub mod node;
pub mod simulation;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::enumerator::enumerate;
use crate::move_encoder::decode;
use crate::sampling::reservoir_pick_uniform;
use crate::state::State;

pub use self::node::Node;
pub use self::simulation::SimResult;

/// If `node` is terminal, return it unchanged. Otherwise enumerate all
/// legal successors, attach them all as children, and return one chosen
/// uniformly at random via reservoir sampling.
fn expand(node: &Rc<RefCell<Node>>, rng: &mut impl Rng) -> Rc<RefCell<Node>> {
    if node.borrow().is_terminal() {
        return Rc::clone(node);
    }
    let state = node.borrow().state;
    for (index, child_state) in enumerate(state) {
        let child = Node::new_child(node, index, child_state);
        node.borrow_mut().children.push(child);
    }
    let children = node.borrow().children.clone();
    reservoir_pick_uniform(children.into_iter(), rng)
        .expect("enumerate always yields at least one item")
}

fn iterate(root: &Rc<RefCell<Node>>, rng: &mut impl Rng) {
    let selected = node::select(root);
    let expanded = expand(&selected, rng);
    let result = simulation::simulate_random_playout(expanded.borrow().state, rng);
    node::backpropagate(&expanded, result);
}

/// Run classical MCTS from `state` for a fixed wall-clock budget and return
/// the best move found, converted to the external `(pawn_tag, node)` pair.
pub fn mcts_move_time(state: State, seconds: f64, rng: &mut impl Rng) -> (i8, i8) {
    let root = Node::new_root(state);
    let budget = Duration::from_secs_f64(seconds);
    let start = Instant::now();
    while start.elapsed() < budget {
        iterate(&root, rng);
    }
    finish(state, &root)
}

/// Run classical MCTS from `state` for a fixed simulation count and return
/// the best move found, converted to the external `(pawn_tag, node)` pair.
pub fn mcts_move_sims(state: State, nb_simulations: u32, rng: &mut impl Rng) -> (i8, i8) {
    let root = Node::new_root(state);
    for _ in 0..nb_simulations {
        iterate(&root, rng);
    }
    finish(state, &root)
}

fn finish(state: State, root: &Rc<RefCell<Node>>) -> (i8, i8) {
    if root.borrow().children.is_empty() {
        // Root never got a chance to expand (budget of zero, or terminal root).
        return match enumerate(state).next() {
            Some((index, _)) => decode(&state, index),
            None => (-1, -1),
        };
    }
    let best = node::best_visit_child(root);
    let index = best.borrow().move_index;
    decode(&state, index)
}
