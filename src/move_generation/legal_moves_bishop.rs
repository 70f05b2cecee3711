//! Pseudo-legal bishop moves.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{push_slides, DIAGONAL_DIRECTIONS};
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

pub fn generate_bishop_moves(board: &Board, from: BoardLocation, out: &mut Vec<ChessMove>) {
    push_slides(board, PieceKind::Bishop, from, &DIAGONAL_DIRECTIONS, out);
}
