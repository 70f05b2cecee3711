//! Pseudo-legal pawn moves.
//!
//! Single push, double push, and both diagonals are offered from any square;
//! the start-rank, occupancy, and en-passant rules live in the validator.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

pub fn generate_pawn_moves(
    board: &Board,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    let forward = color.pawn_direction();
    for (d_file, d_rank) in [(0, forward), (0, 2 * forward), (-1, forward), (1, forward)] {
        push_step(board, PieceKind::Pawn, from, d_file, d_rank, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_pawns_move_down_the_board() {
        let board = Board::new_game();
        let e7 = BoardLocation::parse("e7").expect("e7 should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&board, e7, Color::Black, &mut out);

        let targets: Vec<String> = out.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(targets, vec!["e6", "e5", "d6", "f6"]);
        assert!(out.iter().all(|mv| !mv.capture));
    }

    #[test]
    fn edge_pawn_skips_off_board_diagonal() {
        let board = Board::empty();
        let a2 = BoardLocation::parse("a2").expect("a2 should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&board, a2, Color::White, &mut out);
        assert_eq!(out.len(), 3);
    }
}
