//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::{board::Board, chess_types::*};
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

/// Pushes the candidate `from + (d_file, d_rank)` when it stays on the board.
/// Returns whether the target square was on the board.
#[inline]
pub fn push_step(
    board: &Board,
    piece: PieceKind,
    from: BoardLocation,
    d_file: i8,
    d_rank: i8,
    out: &mut Vec<ChessMove>,
) -> bool {
    let Some(to) = from.offset(d_file, d_rank) else {
        return false;
    };
    let mut mv = ChessMove::new(piece, from, to);
    mv.capture = board.piece_at_location(to).is_some();
    out.push(mv);
    true
}

/// Extends every direction by increasing multiples until the step leaves the
/// board. Occupancy is left to the validator.
pub fn push_slides(
    board: &Board,
    piece: PieceKind,
    from: BoardLocation,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_file, d_rank) in directions {
        for distance in 1..8 {
            if !push_step(board, piece, from, d_file * distance, d_rank * distance, out) {
                break;
            }
        }
    }
}

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
