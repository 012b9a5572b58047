//! The immutable game-state record (component B).

use crate::topology::OUTER_RING_START;

/// One of the four move-families a successor can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PawnKind {
    /// The current player's own colored pawn (yellow or red, whichever has the move).
    Active,
    Black,
    White,
    Orange,
}

impl PawnKind {
    /// The `pawn_tag` this kind is encoded as in the external (pawn_tag, node) pair (§4.E).
    pub fn tag(self) -> i8 {
        match self {
            PawnKind::Active => 0,
            PawnKind::Black => 1,
            PawnKind::White => 2,
            PawnKind::Orange => 3,
        }
    }
}

/// Which player last moved a neutral pawn, or whose colored pawn a move
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    Yellow,
    Red,
}

/// The full 16-field position. Small, `Copy`, and compared field-wise —
/// search code never needs to clone it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub yellow_turn: bool,

    pub yellow_pos: u8,
    pub red_pos: u8,
    pub black_pos: u8,
    pub white_pos: u8,
    pub orange_pos: u8,

    pub yellow_tiles: u32,
    pub red_tiles: u32,
    pub black_tiles: u32,
    pub white_tiles: u32,

    pub black_last_was_yellow: bool,
    pub white_last_was_yellow: bool,
    pub orange_last_was_yellow: bool,

    pub black_run: u8,
    pub white_run: u8,
    pub orange_run: u8,
}

impl State {
    /// The canonical starting position: every pawn on the center node, no
    /// tiles placed, yellow to move, every neutral pawn free to play.
    pub fn initial() -> Self {
        State {
            yellow_turn: true,
            yellow_pos: 0,
            red_pos: 0,
            black_pos: 0,
            white_pos: 0,
            orange_pos: 0,
            yellow_tiles: 0,
            red_tiles: 0,
            black_tiles: 0,
            white_tiles: 0,
            black_last_was_yellow: true,
            white_last_was_yellow: true,
            orange_last_was_yellow: true,
            black_run: 0,
            white_run: 0,
            orange_run: 0,
        }
    }

    /// Node index of the pawn currently on the move.
    pub fn active_pos(&self) -> u8 {
        if self.yellow_turn {
            self.yellow_pos
        } else {
            self.red_pos
        }
    }

    pub fn neutral_pos(&self, pawn: PawnKind) -> u8 {
        match pawn {
            PawnKind::Black => self.black_pos,
            PawnKind::White => self.white_pos,
            PawnKind::Orange => self.orange_pos,
            PawnKind::Active => self.active_pos(),
        }
    }

    pub fn last_was_yellow(&self, pawn: PawnKind) -> bool {
        match pawn {
            PawnKind::Black => self.black_last_was_yellow,
            PawnKind::White => self.white_last_was_yellow,
            PawnKind::Orange => self.orange_last_was_yellow,
            PawnKind::Active => unreachable!("Active is not a neutral pawn"),
        }
    }

    pub fn run(&self, pawn: PawnKind) -> u8 {
        match pawn {
            PawnKind::Black => self.black_run,
            PawnKind::White => self.white_run,
            PawnKind::Orange => self.orange_run,
            PawnKind::Active => unreachable!("Active is not a neutral pawn"),
        }
    }

    /// True iff a colored pawn sits on the outer ring and the game is over.
    pub fn is_terminal(&self) -> bool {
        self.yellow_pos >= OUTER_RING_START || self.red_pos >= OUTER_RING_START
    }

    /// The decided winner, if any.
    pub fn winner(&self) -> Option<Winner> {
        if self.yellow_pos >= OUTER_RING_START {
            Some(Winner::Yellow)
        } else if self.red_pos >= OUTER_RING_START {
            Some(Winner::Red)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_not_terminal() {
        assert!(!State::initial().is_terminal());
        assert_eq!(State::initial().winner(), None);
    }

    #[test]
    fn terminal_detection_matches_outer_ring() {
        let mut s = State::initial();
        s.yellow_pos = 17;
        assert!(s.is_terminal());
        assert_eq!(s.winner(), Some(Winner::Yellow));

        let mut s = State::initial();
        s.red_pos = 20;
        assert!(s.is_terminal());
        assert_eq!(s.winner(), Some(Winner::Red));
    }

    #[test]
    fn pawn_tags_match_external_encoding() {
        assert_eq!(PawnKind::Active.tag(), 0);
        assert_eq!(PawnKind::Black.tag(), 1);
        assert_eq!(PawnKind::White.tag(), 2);
        assert_eq!(PawnKind::Orange.tag(), 3);
    }
}
