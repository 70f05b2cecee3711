//! Pseudo-legal rook moves.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{push_slides, ORTHOGONAL_DIRECTIONS};
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

pub fn generate_rook_moves(board: &Board, from: BoardLocation, out: &mut Vec<ChessMove>) {
    push_slides(board, PieceKind::Rook, from, &ORTHOGONAL_DIRECTIONS, out);
}
