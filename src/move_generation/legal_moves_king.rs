//! Pseudo-legal king moves.
//!
//! Both castling candidates for the king's color are always emitted; rights,
//! the rook, the path, and king safety are checked by the validator.

use crate::game_state::chess_rules::{castle_spec, CastleSide};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

const KING_DELTAS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub fn generate_king_moves(
    board: &Board,
    from: BoardLocation,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for (d_file, d_rank) in KING_DELTAS {
        push_step(board, PieceKind::King, from, d_file, d_rank, out);
    }

    for side in [CastleSide::Short, CastleSide::Long] {
        let spec = castle_spec(color, side);
        out.push(ChessMove::new(
            PieceKind::King,
            BoardLocation::from_index(spec.king_from),
            BoardLocation::from_index(spec.king_to),
        ));
    }
}
