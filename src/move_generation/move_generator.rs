//! Move generation entry points.
//!
//! Pseudo-legal generation dispatches to the per-piece generators and never
//! looks at check state. Legal generation filters that list through the
//! validator.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::validate_move;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<ChessMove>;
}

/// Generator backed by the rule validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, color: Color) -> Vec<ChessMove> {
        generate_legal_moves(board, color)
    }
}

pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.pieces_of(color) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, color, &mut out),
            PieceKind::Rook => generate_rook_moves(board, from, &mut out),
            PieceKind::Knight => generate_knight_moves(board, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, from, &mut out),
            PieceKind::Queen => generate_queen_moves(board, from, &mut out),
            PieceKind::King => generate_king_moves(board, from, color, &mut out),
        }
    }
    out
}

pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    generate_pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|mv| validate_move(board, mv, color).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move_to_board;
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_has_twenty_moves() {
        let board = Board::new_game();
        let moves = LegalMoveGenerator.generate_legal_moves(&board, Color::White);

        assert_eq!(moves.len(), 20);
        let pawn_moves = moves.iter().filter(|mv| mv.piece == PieceKind::Pawn).count();
        let knight_moves = moves.iter().filter(|mv| mv.piece == PieceKind::Knight).count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn generated_targets_stay_on_board_without_wrapping() {
        let board = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("kiwipete should parse")
            .board;
        for color in [Color::White, Color::Black] {
            for mv in generate_pseudo_legal_moves(&board, color) {
                let (d_file, d_rank) = mv.delta();
                let geometric = match mv.piece {
                    PieceKind::Knight => d_file.abs() * d_rank.abs() == 2,
                    PieceKind::King if mv.is_castle() => d_rank == 0,
                    PieceKind::King => d_file.abs() <= 1 && d_rank.abs() <= 1,
                    _ => d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs(),
                };
                assert!(geometric, "{} is not a {} move", mv, mv.piece);
            }
        }
    }

    #[test]
    fn lone_pieces_never_wrap_from_any_square() {
        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                for index in 0..64 {
                    let mut board = Board::empty();
                    board.squares[index] = Some(Piece::new(kind, color));

                    for mv in generate_pseudo_legal_moves(&board, color) {
                        if mv.is_castle() {
                            continue;
                        }
                        let (d_file, d_rank) = mv.delta();
                        let geometric = match kind {
                            PieceKind::Knight => d_file.abs() * d_rank.abs() == 2,
                            PieceKind::King => d_file.abs() <= 1 && d_rank.abs() <= 1,
                            PieceKind::Pawn => d_file.abs() <= 1 && d_rank.abs() <= 2 && d_rank != 0,
                            PieceKind::Rook => (d_file == 0) != (d_rank == 0),
                            PieceKind::Bishop => d_file != 0 && d_file.abs() == d_rank.abs(),
                            PieceKind::Queen => {
                                (d_file == 0) != (d_rank == 0)
                                    || (d_file != 0 && d_file.abs() == d_rank.abs())
                            }
                        };
                        assert!(geometric, "{mv} wraps for a {kind} from {}", mv.from);
                    }
                }
            }
        }
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1",
        ];
        for fen in fens {
            let record = parse_fen(fen).expect("test FEN should parse");
            let color = record.active_color;
            for mv in generate_legal_moves(&record.board, color) {
                let mut after = record.board.clone();
                apply_move_to_board(&mut after, &mv);
                assert!(!is_in_check(&after, color), "{mv} leaves the king attacked in {fen}");
            }
        }
    }
}
