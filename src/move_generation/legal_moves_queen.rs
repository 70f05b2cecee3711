//! Pseudo-legal queen moves: rook and bishop rays combined.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{
    push_slides, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

pub fn generate_queen_moves(board: &Board, from: BoardLocation, out: &mut Vec<ChessMove>) {
    push_slides(board, PieceKind::Queen, from, &ORTHOGONAL_DIRECTIONS, out);
    push_slides(board, PieceKind::Queen, from, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_queen_on_empty_board_reaches_27_squares() {
        let board = Board::empty();
        let d4 = BoardLocation::parse("d4").expect("d4 should parse");
        let mut out = Vec::new();
        generate_queen_moves(&board, d4, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn edge_queen_never_wraps() {
        let board = Board::empty();
        let h5 = BoardLocation::parse("h5").expect("h5 should parse");
        let mut out = Vec::new();
        generate_queen_moves(&board, h5, &mut out);

        assert_eq!(out.len(), 21);
        for mv in &out {
            let (d_file, d_rank) = mv.delta();
            assert!(d_file <= 0, "{mv} wrapped past the h-file");
            assert!(d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs());
        }
    }
}
