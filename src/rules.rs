//! Per-pawn move legality and state transition (component C).
//!
//! The four move families (the active player's colored pawn, and the three
//! neutral pawns) share the same neighbor-lookup-then-occupancy-then-tile
//! shape, so they are parameterized by [`PawnKind`] rather than duplicated.

use crate::state::{PawnKind, State};
use crate::topology::{degree, neighbor, neighbour_mask};

/// The four positions other than `pawn`'s own — used for the "not occupied
/// by any other pawn" legality clause.
fn other_positions(state: &State, pawn: PawnKind) -> [u8; 4] {
    match pawn {
        PawnKind::Active => {
            if state.yellow_turn {
                [state.red_pos, state.black_pos, state.white_pos, state.orange_pos]
            } else {
                [state.yellow_pos, state.black_pos, state.white_pos, state.orange_pos]
            }
        }
        PawnKind::Black => [state.yellow_pos, state.red_pos, state.white_pos, state.orange_pos],
        PawnKind::White => [state.yellow_pos, state.red_pos, state.black_pos, state.orange_pos],
        PawnKind::Orange => [state.yellow_pos, state.red_pos, state.black_pos, state.white_pos],
    }
}

fn occupied_by_other(state: &State, c: u8, pawn: PawnKind) -> bool {
    c != 0 && other_positions(state, pawn).contains(&c)
}

/// Whether the player on the move may move a given neutral pawn at all,
/// independent of which destination slot is chosen.
///
/// `run == 0` is an unconditional "anyone may move it" escape hatch: it is
/// checked as a standalone disjunct, never combined with `last_was_yellow`.
/// A stale `last_was_yellow` left over from a much earlier move is simply
/// irrelevant while `run` is 0.
pub fn can_play(state: &State, pawn: PawnKind) -> bool {
    let is_last_mover = state.last_was_yellow(pawn) == state.yellow_turn;
    let run = state.run(pawn);
    (is_last_mover && run < 2) || run == 0
}

fn is_legal_active(state: &State, slot: u8) -> bool {
    let pos = state.active_pos();
    if slot >= degree(pos) {
        return false;
    }
    let c = neighbor(pos, slot);
    if occupied_by_other(state, c, PawnKind::Active) {
        return false;
    }
    let (own_opponent_tiles, opponent_pos) = if state.yellow_turn {
        (state.red_tiles, state.red_pos)
    } else {
        (state.yellow_tiles, state.yellow_pos)
    };
    let mask = (1u32 << c)
        & (!own_opponent_tiles | neighbour_mask(opponent_pos) | neighbour_mask(state.orange_pos))
        & (!state.black_tiles | neighbour_mask(state.black_pos))
        & (!state.white_tiles | neighbour_mask(state.white_pos));
    mask != 0
}

fn is_legal_black_or_white(state: &State, pawn: PawnKind, slot: u8) -> bool {
    let pos = state.neutral_pos(pawn);
    if slot >= degree(pos) {
        return false;
    }
    let c = neighbor(pos, slot);
    if c == 0 || occupied_by_other(state, c, pawn) {
        return false;
    }
    (1u32 << c) & (state.yellow_tiles | state.red_tiles) == 0
}

fn is_legal_orange(state: &State, slot: u8) -> bool {
    let pos = state.orange_pos;
    if slot >= degree(pos) {
        return false;
    }
    let c = neighbor(pos, slot);
    if c == 0 || occupied_by_other(state, c, PawnKind::Orange) {
        return false;
    }
    let mask = (1u32 << c)
        & (!state.black_tiles | neighbour_mask(state.black_pos))
        & (!state.white_tiles | neighbour_mask(state.white_pos));
    mask != 0
}

/// `is-legal(state, k)` for the given pawn family and neighbor slot `k`.
pub fn is_legal(state: &State, pawn: PawnKind, slot: u8) -> bool {
    match pawn {
        PawnKind::Active => is_legal_active(state, slot),
        PawnKind::Black | PawnKind::White => {
            can_play(state, pawn) && is_legal_black_or_white(state, pawn, slot)
        }
        PawnKind::Orange => can_play(state, pawn) && is_legal_orange(state, slot),
    }
}

/// Zero out the run counter of every neutral pawn whose last mover was the
/// player who just moved a colored pawn (or passed) — the rule block
/// expires the moment its owner plays a non-neutral move.
fn expire_runs(new_state: &mut State, old_state: &State, mover_is_yellow: bool) {
    if old_state.black_last_was_yellow == mover_is_yellow {
        new_state.black_run = 0;
    }
    if old_state.white_last_was_yellow == mover_is_yellow {
        new_state.white_run = 0;
    }
    if old_state.orange_last_was_yellow == mover_is_yellow {
        new_state.orange_run = 0;
    }
}

fn apply_active(state: &State, slot: u8) -> State {
    let pos = state.active_pos();
    let c = neighbor(pos, slot);
    let mover_is_yellow = state.yellow_turn;

    let mut next = *state;
    next.yellow_turn = !state.yellow_turn;
    if mover_is_yellow {
        next.yellow_pos = c;
    } else {
        next.red_pos = c;
    }
    let clear = !(1u32 << c);
    next.yellow_tiles &= clear;
    next.red_tiles &= clear;
    next.black_tiles &= clear;
    next.white_tiles &= clear;
    expire_runs(&mut next, state, mover_is_yellow);
    next
}

fn apply_neutral(state: &State, pawn: PawnKind, slot: u8) -> State {
    let pos = state.neutral_pos(pawn);
    let c = neighbor(pos, slot);
    let mover_is_yellow = state.yellow_turn;

    let mut next = *state;
    next.yellow_turn = !state.yellow_turn;
    match pawn {
        PawnKind::Black => {
            next.black_pos = c;
            next.black_last_was_yellow = mover_is_yellow;
            next.black_run = state.black_run + 1;
        }
        PawnKind::White => {
            next.white_pos = c;
            next.white_last_was_yellow = mover_is_yellow;
            next.white_run = state.white_run + 1;
        }
        PawnKind::Orange => {
            next.orange_pos = c;
            next.orange_last_was_yellow = mover_is_yellow;
            next.orange_run = state.orange_run + 1;
        }
        PawnKind::Active => unreachable!("apply_neutral called with Active"),
    }
    // Every other neutral pawn expires the same way a colored move would.
    let others = match pawn {
        PawnKind::Black => [PawnKind::White, PawnKind::Orange],
        PawnKind::White => [PawnKind::Black, PawnKind::Orange],
        PawnKind::Orange => [PawnKind::Black, PawnKind::White],
        PawnKind::Active => unreachable!(),
    };
    for other in others {
        if state.last_was_yellow(other) == mover_is_yellow {
            match other {
                PawnKind::Black => next.black_run = 0,
                PawnKind::White => next.white_run = 0,
                PawnKind::Orange => next.orange_run = 0,
                PawnKind::Active => unreachable!(),
            }
        }
    }
    next
}

/// `apply(state, k)` for the given pawn family and neighbor slot `k`.
/// Callers must only invoke this on slots for which `is_legal` holds.
pub fn apply(state: &State, pawn: PawnKind, slot: u8) -> State {
    match pawn {
        PawnKind::Active => apply_active(state, slot),
        PawnKind::Black | PawnKind::White | PawnKind::Orange => apply_neutral(state, pawn, slot),
    }
}

/// The pass transition, taken when the enumerator found no legal move.
pub fn apply_pass(state: &State) -> State {
    let mover_is_yellow = state.yellow_turn;
    let mut next = *state;
    next.yellow_turn = !state.yellow_turn;
    if mover_is_yellow {
        next.yellow_pos = 0;
    } else {
        next.red_pos = 0;
    }
    expire_runs(&mut next, state, mover_is_yellow);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_removal_on_colored_move() {
        let mut s = State::initial();
        s.yellow_pos = 1;
        s.red_tiles = 1 << 2;
        assert!(is_legal_active(&s, slot_to(&s, 1, 2)));
        let next = apply(&s, PawnKind::Active, slot_to(&s, 1, 2));
        assert_eq!(next.red_tiles & (1 << 2), 0);
        assert_eq!(next.yellow_pos, 2);
        assert!(!next.yellow_turn);
    }

    #[test]
    fn rule_of_two_blocks_third_consecutive_move() {
        let mut s = State::initial();
        s.yellow_turn = true;
        s.black_last_was_yellow = true;
        s.black_run = 2;
        assert!(!can_play(&s, PawnKind::Black));

        s.yellow_turn = false;
        assert!(can_play(&s, PawnKind::Black));
    }

    #[test]
    fn run_zero_is_an_unconditional_escape_hatch() {
        let mut s = State::initial();
        s.yellow_turn = true;
        s.black_last_was_yellow = false;
        s.black_run = 0;
        assert!(can_play(&s, PawnKind::Black));
    }

    #[test]
    fn pass_resets_mover_to_center_and_flips_turn() {
        let mut s = State::initial();
        s.yellow_pos = 6;
        let next = apply_pass(&s);
        assert_eq!(next.yellow_pos, 0);
        assert!(!next.yellow_turn);
    }

    #[test]
    fn neutral_move_increments_run_and_sets_last_mover() {
        let s = State::initial();
        assert!(is_legal(&s, PawnKind::Black, 0));
        let next = apply(&s, PawnKind::Black, 0);
        assert_eq!(next.black_run, 1);
        assert!(next.black_last_was_yellow);
        assert!(!next.yellow_turn);
    }

    /// Helper: find the slot index out of `pos`'s neighbor list leading to `dest`.
    fn slot_to(state: &State, pos: u8, dest: u8) -> u8 {
        for slot in 0..degree(pos) {
            if neighbor(pos, slot) == dest {
                return slot;
            }
        }
        panic!("{dest} is not a neighbor of {pos} in state {state:?}");
    }
}
