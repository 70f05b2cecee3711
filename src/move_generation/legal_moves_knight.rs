use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(board: &Board, from: BoardLocation, out: &mut Vec<ChessMove>) {
    for (d_file, d_rank) in KNIGHT_DELTAS {
        push_step(board, PieceKind::Knight, from, d_file, d_rank, out);
    }
}
