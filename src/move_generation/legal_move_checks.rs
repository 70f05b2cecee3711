//! Move legality and check detection.
//!
//! `validate_move` runs the rule checks in a fixed order and reports the
//! first violation. Check detection validates the opponent's candidate moves
//! in a nested mode that stops before the king-safety simulation, so the
//! mutual recursion between the two is at most one level deep.

use thiserror::Error;

use crate::game_state::{board::Board, chess_rules::CastleSide, chess_types::*};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::{board_location::BoardLocation, chess_move::ChessMove};

/// Reason a candidate move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("there is no matching piece of the side to move on the source square")]
    NoPieceToMove,
    #[error("short castling rights have been lost")]
    ShortCastleRightsLost,
    #[error("long castling rights have been lost")]
    LongCastleRightsLost,
    #[error("the castling rook is not on its starting square")]
    CastlingRookMissing,
    #[error("pieces stand between the king and the rook")]
    CastlingPathBlocked,
    #[error("cannot castle out of check")]
    CastlingOutOfCheck,
    #[error("cannot castle through an attacked square")]
    CastlingThroughCheck,
    #[error("target square is occupied by a piece of the same color")]
    OccupiedByOwnPiece,
    #[error("path is blocked by {blocker} on {square}")]
    PathBlocked {
        blocker: Piece,
        square: BoardLocation,
    },
    #[error("pawns may only advance two squares from their starting rank")]
    PawnDoubleStepNotFromStart,
    #[error("pawn cannot advance onto an occupied square")]
    PawnPushBlocked,
    #[error("pawn can only move diagonally when capturing")]
    PawnDiagonalWithoutCapture,
    #[error("move leaves the king in check")]
    KingLeftInCheck,
    #[error("pawns can only promote to a rook, knight, bishop or queen")]
    InvalidPromotionPiece,
    #[error("only a pawn reaching the last rank can promote")]
    PromotionNotAllowed,
    #[error("no legal move matches")]
    NoMatchingMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationDepth {
    /// Every rule, including own-king safety.
    Full,
    /// Board rules only; used while asking whether a piece attacks a square.
    Nested,
}

/// Checks whether `color` may play `mv` on `board`.
pub fn validate_move(board: &Board, mv: &ChessMove, color: Color) -> Result<(), IllegalMove> {
    validate_move_internal(board, mv, color, ValidationDepth::Full)
}

fn validate_move_internal(
    board: &Board,
    mv: &ChessMove,
    color: Color,
    depth: ValidationDepth,
) -> Result<(), IllegalMove> {
    match board.piece_at_location(mv.from) {
        Some(piece) if piece.color == color && piece.kind == mv.piece => {}
        _ => return Err(IllegalMove::NoPieceToMove),
    }

    let castle = mv.castle_spec();
    if let Some(spec) = castle {
        if spec.color != color || !board.has_castling_right(spec.right) {
            return Err(match spec.side {
                CastleSide::Short => IllegalMove::ShortCastleRightsLost,
                CastleSide::Long => IllegalMove::LongCastleRightsLost,
            });
        }
        if board.piece_at(spec.rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
            return Err(IllegalMove::CastlingRookMissing);
        }
        if spec.between_squares().any(|index| board.piece_at(index).is_some()) {
            return Err(IllegalMove::CastlingPathBlocked);
        }
    }

    let target = board.piece_at_location(mv.to);
    if matches!(target, Some(piece) if piece.color == color) {
        return Err(IllegalMove::OccupiedByOwnPiece);
    }

    if mv.piece != PieceKind::Knight {
        check_path(board, mv)?;
    }

    if mv.piece == PieceKind::Pawn {
        check_pawn_rules(board, mv, color)?;
    }

    if depth == ValidationDepth::Nested {
        return Ok(());
    }

    if matches!(target, Some(piece) if piece.kind == PieceKind::King) {
        return Ok(());
    }

    if let Some(spec) = castle {
        if is_in_check(board, color) {
            return Err(IllegalMove::CastlingOutOfCheck);
        }
        let mut transit = board.clone();
        transit.squares[spec.transit_square()] = transit.squares[spec.king_from].take();
        if is_in_check(&transit, color) {
            return Err(IllegalMove::CastlingThroughCheck);
        }
    }

    let mut simulated = board.clone();
    apply_move_to_board(&mut simulated, mv);
    if is_in_check(&simulated, color) {
        return Err(IllegalMove::KingLeftInCheck);
    }

    Ok(())
}

/// Rejects the move when any square strictly between source and target is occupied.
fn check_path(board: &Board, mv: &ChessMove) -> Result<(), IllegalMove> {
    let (d_file, d_rank) = mv.delta();
    let steps = d_file.abs().max(d_rank.abs());
    let (step_file, step_rank) = (d_file.signum(), d_rank.signum());
    for distance in 1..steps {
        let Some(square) = mv.from.offset(step_file * distance, step_rank * distance) else {
            break;
        };
        if let Some(blocker) = board.piece_at_location(square) {
            return Err(IllegalMove::PathBlocked { blocker, square });
        }
    }
    Ok(())
}

fn check_pawn_rules(board: &Board, mv: &ChessMove, color: Color) -> Result<(), IllegalMove> {
    let (d_file, d_rank) = mv.delta();
    let target_occupied = board.piece_at_location(mv.to).is_some();

    if d_file == 0 {
        if d_rank.abs() == 2 && mv.from.rank() != color.pawn_start_rank() {
            return Err(IllegalMove::PawnDoubleStepNotFromStart);
        }
        if target_occupied {
            return Err(IllegalMove::PawnPushBlocked);
        }
        return Ok(());
    }

    let en_passant = board.en_passant == Some(mv.to.index())
        && mv.to.rank() == color.en_passant_capture_rank();
    if !target_occupied && !en_passant {
        return Err(IllegalMove::PawnDiagonalWithoutCapture);
    }
    Ok(())
}

/// Checks the promotion choice carried by `mv`, if any.
pub fn validate_promotion(mv: &ChessMove) -> Result<(), IllegalMove> {
    let Some(promotion) = mv.promotion else {
        return Ok(());
    };
    let reaches_last_rank = mv.to.rank() == Color::White.promotion_rank()
        || mv.to.rank() == Color::Black.promotion_rank();
    if mv.piece != PieceKind::Pawn || !reaches_last_rank {
        return Err(IllegalMove::PromotionNotAllowed);
    }
    if matches!(promotion, PieceKind::Pawn | PieceKind::King) {
        return Err(IllegalMove::InvalidPromotionPiece);
    }
    Ok(())
}

/// Whether any opposing piece could legally move onto `color`'s king.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king = board.find_king(color);
    let attacker = color.opposite();
    generate_pseudo_legal_moves(board, attacker)
        .iter()
        .filter(|mv| mv.to == king)
        .any(|mv| validate_move_internal(board, mv, attacker, ValidationDepth::Nested).is_ok())
}
