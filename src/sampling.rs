//! Reservoir sampling: a single-pass, streaming pick of one item from a
//! sequence of unknown length, with uniform or weighted probability and no
//! buffering of the whole sequence.
//!
//! Shared across random-move selection, classical-MCTS rollout/expansion,
//! minimax root tie-breaking, and stochastic PUCT move selection — in the
//! original engine these are all the identical streaming-sample-of-one
//! algorithm with different weight functions, so this crate keeps one
//! implementation rather than four copies of the same loop.

use rand::Rng;

/// Pick one item from `items`, weighted by `weight`. After seeing an item
/// with weight `w` and running total `s` (including `w`), the running
/// choice is replaced by that item with probability `w / s` — the standard
/// single-pass weighted reservoir-of-one algorithm. Passing a constant
/// weight function recovers uniform reservoir sampling.
pub fn reservoir_pick<T>(
    items: impl Iterator<Item = T>,
    weight: impl Fn(&T) -> f64,
    rng: &mut impl Rng,
) -> Option<T> {
    let mut chosen = None;
    let mut total_weight = 0.0;
    for item in items {
        let w = weight(&item);
        total_weight += w;
        if total_weight <= 0.0 {
            continue;
        }
        if rng.gen::<f64>() * total_weight <= w {
            chosen = Some(item);
        }
    }
    chosen
}

/// Uniform reservoir sampling: every item equally likely.
pub fn reservoir_pick_uniform<T>(items: impl Iterator<Item = T>, rng: &mut impl Rng) -> Option<T> {
    reservoir_pick(items, |_| 1.0, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_item_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(reservoir_pick_uniform([42].into_iter(), &mut rng), Some(42));
    }

    #[test]
    fn empty_sequence_chooses_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(reservoir_pick_uniform(std::iter::empty::<u8>(), &mut rng), None);
    }

    #[test]
    fn uniform_pick_is_roughly_balanced_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 3];
        for _ in 0..6000 {
            let pick = reservoir_pick_uniform([0, 1, 2].into_iter(), &mut rng).unwrap();
            counts[pick] += 1;
        }
        for count in counts {
            assert!((1700..2300).contains(&count), "counts = {counts:?}");
        }
    }

    #[test]
    fn weighted_pick_favors_heavier_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut heavy_wins = 0u32;
        for _ in 0..2000 {
            let pick = reservoir_pick([(0, 0.9), (1, 0.1)].into_iter(), |(_, w)| *w, &mut rng)
                .unwrap();
            if pick.0 == 0 {
                heavy_wins += 1;
            }
        }
        assert!(heavy_wins > 1600, "heavy_wins = {heavy_wins}");
    }
}
