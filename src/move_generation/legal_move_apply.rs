//! In-place move application.
//!
//! Mutates a board for an already-validated move: captures (including en
//! passant), the castling rook hop, promotion, castling-rights revocation,
//! and the new en-passant target.

use crate::game_state::chess_rules::CASTLE_SPECS;
use crate::game_state::{board::Board, chess_types::*};
use crate::moves::chess_move::ChessMove;

/// Applies `mv` to `board` and returns whether a piece was captured.
pub fn apply_move_to_board(board: &mut Board, mv: &ChessMove) -> bool {
    let from = mv.from.index();
    let to = mv.to.index();
    let Some(moving) = board.squares[from] else {
        return false;
    };

    let mut captured = board.squares[to].take();
    if captured.is_none()
        && moving.kind == PieceKind::Pawn
        && mv.from.file() != mv.to.file()
        && board.en_passant == Some(to)
    {
        let victim = match moving.color {
            Color::White => to + 8,
            Color::Black => to - 8,
        };
        captured = board.squares[victim].take();
    }
    if let Some(piece) = captured {
        board.captured.push(piece);
    }

    board.squares[from] = None;
    board.squares[to] = Some(moving);

    if let Some(spec) = mv.castle_spec() {
        board.squares[spec.rook_to] = board.squares[spec.rook_from].take();
    }

    if moving.kind == PieceKind::Pawn && mv.to.rank() == moving.color.promotion_rank() {
        let kind = mv.promotion.unwrap_or(PieceKind::Queen);
        board.squares[to] = Some(Piece::new(kind, moving.color));
    }

    update_castling_rights(board, moving, from, to);

    board.en_passant = if moving.kind == PieceKind::Pawn && from.abs_diff(to) == 16 {
        Some((from + to) / 2)
    } else {
        None
    };

    captured.is_some()
}

fn update_castling_rights(board: &mut Board, moving: Piece, from: usize, to: usize) {
    for spec in &CASTLE_SPECS {
        let king_moved = moving.kind == PieceKind::King && spec.color == moving.color;
        if king_moved || from == spec.rook_from || to == spec.rook_from {
            board.castling_rights &= !spec.right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::board_location::BoardLocation;

    fn mv(piece: PieceKind, from: &str, to: &str) -> ChessMove {
        ChessMove::new(
            piece,
            BoardLocation::parse(from).expect("from should parse"),
            BoardLocation::parse(to).expect("to should parse"),
        )
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let mut board = Board::new_game();
        let captured = apply_move_to_board(&mut board, &mv(PieceKind::Pawn, "e2", "e4"));
        assert!(!captured);
        assert_eq!(board.en_passant, Some(BoardLocation::parse("e3").expect("e3").index()));

        apply_move_to_board(&mut board, &mv(PieceKind::Knight, "g8", "f6"));
        assert_eq!(board.en_passant, None);
    }

    #[test]
    fn king_move_relocates_rook_and_clears_rights() {
        let mut board = Board::new_game();
        board.squares[61] = None;
        board.squares[62] = None;
        apply_move_to_board(&mut board, &mv(PieceKind::King, "e1", "g1"));

        assert_eq!(board.piece_at(61), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at(63), None);
        assert_eq!(board.castling_rights, CASTLE_BLACK_SHORT | CASTLE_BLACK_LONG);
    }

    #[test]
    fn captures_are_recorded_oldest_first() {
        let mut board = Board::new_game();
        assert!(apply_move_to_board(&mut board, &mv(PieceKind::Pawn, "e2", "e7")));
        assert!(apply_move_to_board(&mut board, &mv(PieceKind::Pawn, "d7", "d2")));
        assert_eq!(
            board.captured,
            vec![
                Piece::new(PieceKind::Pawn, Color::Black),
                Piece::new(PieceKind::Pawn, Color::White),
            ]
        );
    }
}
