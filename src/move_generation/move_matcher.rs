//! Resolves a parsed `MoveDescriptor` against the legal move list.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::{validate_move, validate_promotion, IllegalMove};
use crate::move_generation::move_generator::{generate_legal_moves, generate_pseudo_legal_moves};
use crate::moves::chess_move::{ChessMove, MoveDescriptor};

/// Whether `mv` is one of the moves `descriptor` can stand for.
pub fn descriptor_matches(mv: &ChessMove, descriptor: &MoveDescriptor) -> bool {
    if let (Some(src), Some(dst)) = (descriptor.src_location(), descriptor.dst_location()) {
        return mv.from == src
            && mv.to == dst
            && descriptor.piece.map_or(true, |piece| piece == mv.piece);
    }

    let piece = descriptor.piece.unwrap_or(PieceKind::Pawn);
    if mv.piece != piece {
        return false;
    }

    if descriptor.dst_rank.is_none() {
        // Castling descriptors carry king files only.
        return piece == PieceKind::King
            && mv.is_castle()
            && descriptor.src_file == Some(mv.from.file())
            && descriptor.dst_file == Some(mv.to.file());
    }

    descriptor.dst_location() == Some(mv.to)
        && descriptor.src_file.map_or(true, |file| file == mv.from.file())
        && descriptor.src_rank.map_or(true, |rank| rank == mv.from.rank())
}

/// Picks the single legal move matching `descriptor`.
pub fn select_matching_move(
    legal_moves: &[ChessMove],
    descriptor: &MoveDescriptor,
) -> ChessResult<ChessMove> {
    let candidates: Vec<&ChessMove> = legal_moves
        .iter()
        .filter(|mv| descriptor_matches(mv, descriptor))
        .collect();

    match candidates.as_slice() {
        [] => Err(IllegalMove::NoMatchingMove.into()),
        [single] => apply_promotion(**single, descriptor),
        many => Err(ChessErrors::AmbiguousMove(
            many.iter()
                .map(|mv| mv.to_coordinate_notation())
                .collect::<Vec<_>>()
                .join(", "),
        )),
    }
}

fn apply_promotion(mut mv: ChessMove, descriptor: &MoveDescriptor) -> ChessResult<ChessMove> {
    if descriptor.promotion.is_some() {
        mv.promotion = descriptor.promotion;
        validate_promotion(&mv)?;
    }
    Ok(mv)
}

/// Resolves `descriptor` for `color`. When nothing legal matches, the error
/// carries the validator's reason for the first matching pseudo-legal move.
pub fn find_matching_move(
    board: &Board,
    descriptor: &MoveDescriptor,
    color: Color,
) -> ChessResult<ChessMove> {
    let legal_moves = generate_legal_moves(board, color);
    match select_matching_move(&legal_moves, descriptor) {
        Err(ChessErrors::IllegalMove(IllegalMove::NoMatchingMove)) => {
            let reason = generate_pseudo_legal_moves(board, color)
                .iter()
                .filter(|mv| descriptor_matches(mv, descriptor))
                .find_map(|mv| validate_move(board, mv, color).err())
                .unwrap_or(IllegalMove::NoMatchingMove);
            Err(reason.into())
        }
        other => other,
    }
}
