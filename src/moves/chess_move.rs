//! Move records.
//!
//! `ChessMove` is a fully resolved candidate produced by the generators.
//! `MoveDescriptor` is the partial, possibly ambiguous shape produced by the
//! notation parser and resolved against the legal move list.

use std::fmt;

use crate::game_state::chess_rules::{castle_spec_for_move, CastleSpec};
use crate::game_state::chess_types::PieceKind;
use crate::moves::board_location::BoardLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub piece: PieceKind,
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub promotion: Option<PieceKind>,
    pub capture: bool,
}

impl ChessMove {
    pub fn new(piece: PieceKind, from: BoardLocation, to: BoardLocation) -> Self {
        Self {
            piece,
            from,
            to,
            promotion: None,
            capture: false,
        }
    }

    /// File and rank distance travelled, positive toward `h` and `8`.
    #[inline]
    pub fn delta(&self) -> (i8, i8) {
        (
            self.to.file_index() - self.from.file_index(),
            self.to.rank_index() - self.from.rank_index(),
        )
    }

    /// Castling description when this is a king move between castling squares.
    pub fn castle_spec(&self) -> Option<&'static CastleSpec> {
        if self.piece != PieceKind::King {
            return None;
        }
        castle_spec_for_move(self.from.index(), self.to.index())
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.castle_spec().is_some()
    }

    /// Source and target squares, e.g. `e2e4`, with an uppercase promotion
    /// letter appended (`a7a8Q`).
    pub fn to_coordinate_notation(&self) -> String {
        let mut out = format!("{}{}", self.from, self.to);
        if let Some(promotion) = self.promotion {
            out.push(promotion.letter());
        }
        out
    }

    pub fn describe(&self) -> String {
        let mut out = format!("{} from {} to {}", self.piece, self.from, self.to);
        if let Some(promotion) = self.promotion {
            out.push_str(&format!(" promoting to {promotion}"));
        }
        out
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coordinate_notation())
    }
}

/// Partial move description; every field the notation omitted stays `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub piece: Option<PieceKind>,
    pub src_file: Option<char>,
    pub src_rank: Option<char>,
    pub dst_file: Option<char>,
    pub dst_rank: Option<char>,
    pub promotion: Option<PieceKind>,
}

impl MoveDescriptor {
    pub fn src_location(&self) -> Option<BoardLocation> {
        BoardLocation::new(self.src_file?, self.src_rank?)
    }

    pub fn dst_location(&self) -> Option<BoardLocation> {
        BoardLocation::new(self.dst_file?, self.dst_rank?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(text: &str) -> BoardLocation {
        BoardLocation::parse(text).expect("test square should parse")
    }

    #[test]
    fn coordinate_notation_uppercases_promotion() {
        let mut mv = ChessMove::new(PieceKind::Pawn, square("a7"), square("a8"));
        mv.promotion = Some(PieceKind::Queen);
        assert_eq!(mv.to_coordinate_notation(), "a7a8Q");
        assert_eq!(mv.delta(), (0, 1));
    }

    #[test]
    fn only_king_moves_between_castle_squares_castle() {
        let king = ChessMove::new(PieceKind::King, square("e8"), square("c8"));
        let rook = ChessMove::new(PieceKind::Rook, square("e8"), square("c8"));
        assert!(king.is_castle());
        assert!(!rook.is_castle());
        assert_eq!(king.describe(), "King from e8 to c8");
    }
}
