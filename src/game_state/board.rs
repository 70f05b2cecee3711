//! 64-square board with castling rights, en-passant target, and captures.

use crate::game_state::chess_types::*;
use crate::moves::board_location::BoardLocation;

static BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Rank-major squares, `0 == a8` and `63 == h1`.
    pub squares: [Option<Piece>; 64],
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped over on the previous ply.
    pub en_passant: Option<usize>,
    /// Captured pieces, oldest first.
    pub captured: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
            castling_rights: 0,
            en_passant: None,
            captured: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            board.squares[file] = Some(Piece::new(kind, Color::Black));
            board.squares[8 + file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[48 + file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[56 + file] = Some(Piece::new(kind, Color::White));
        }
        board.castling_rights = CASTLE_ALL;
        board
    }

    #[inline]
    pub fn piece_at(&self, index: usize) -> Option<Piece> {
        self.squares[index]
    }

    #[inline]
    pub fn piece_at_location(&self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.index()]
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// When the king is missing; every reachable position holds both kings.
    pub fn find_king(&self, color: Color) -> BoardLocation {
        let king = Piece::new(PieceKind::King, color);
        let index = self
            .squares
            .iter()
            .position(|square| *square == Some(king))
            .unwrap_or_else(|| panic!("{color} king missing from board"));
        BoardLocation::from_index(index)
    }

    /// Occupied squares in board order.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, square)| square.map(|piece| (BoardLocation::from_index(index), piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_places_both_armies() {
        let board = Board::new_game();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(board.find_king(Color::White).to_string(), "e1");
        assert_eq!(board.find_king(Color::Black).to_string(), "e8");
        assert_eq!(
            board.piece_at(3),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert!(board.has_castling_right(CASTLE_BLACK_LONG));
    }

    #[test]
    #[should_panic(expected = "king missing")]
    fn missing_king_panics() {
        Board::empty().find_king(Color::White);
    }
}
