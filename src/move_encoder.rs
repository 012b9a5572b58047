//! Translation between the enumerator's internal move index and the
//! external `(pawn_tag, node)` pair (component E).

use crate::enumerator::enumerate;
use crate::state::{PawnKind, State};
use crate::topology::neighbor;

/// Decode a move index into `(pawn_tag, node)` without re-enumerating —
/// valid whenever the caller already knows the index that produced a
/// successor, as every search-tree node does.
pub fn decode(parent: &State, index: u16) -> (i8, i8) {
    if index == 40 {
        return (-1, -1);
    }
    let band = index / 10;
    let slot = (index % 10) as u8;
    let pawn = match band {
        0 => PawnKind::Active,
        1 => PawnKind::Black,
        2 => PawnKind::White,
        3 => PawnKind::Orange,
        _ => unreachable!("move index {index} out of range"),
    };
    let pos = if pawn == PawnKind::Active {
        parent.active_pos()
    } else {
        parent.neutral_pos(pawn)
    };
    (pawn.tag(), neighbor(pos, slot) as i8)
}

/// Recover `(pawn_tag, node)` for a successor whose originating index is
/// unknown, by re-enumerating `parent` until a state equal to `child` turns
/// up. This is the only place the engine uses successor-state equality as a
/// lookup key.
pub fn recover(parent: &State, child: &State) -> (i8, i8) {
    for (index, successor) in enumerate(*parent) {
        if successor == *child {
            return decode(parent, index);
        }
    }
    panic!("{child:?} is not a successor of {parent:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_and_recover_agree_for_every_successor() {
        let parent = State::initial();
        for (index, child) in enumerate(parent) {
            assert_eq!(decode(&parent, index), recover(&parent, &child));
        }
    }

    #[test]
    fn pass_decodes_to_sentinel_pair() {
        assert_eq!(decode(&State::initial(), 40), (-1, -1));
    }
}
