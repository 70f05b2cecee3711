//! Legal-move tree counting.
//!
//! Node counts against well-known reference positions are the main
//! correctness harness for the generator and validator. Each generated pawn
//! move to the last rank counts once; the promotion piece is chosen later,
//! when the move is matched against notation.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Leaf count of the legal move tree below `board` with `color` to move.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    perft_counts(&LegalMoveGenerator, board, color, depth).nodes
}

pub fn perft_counts<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, color) {
        perft_recurse(generator, board, &mv, color, depth, &mut total);
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    color: Color,
    depth: u8,
) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generator
        .generate_legal_moves(board, color)
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            perft_recurse(generator, board, &mv, color, depth, &mut local);
            (mv, local.nodes)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    mv: &ChessMove,
    color: Color,
    remaining_depth: u8,
    counts: &mut PerftCounts,
) {
    let mut next = board.clone();
    let captured = apply_move_to_board(&mut next, mv);

    if remaining_depth == 1 {
        counts.nodes += 1;
        if captured {
            counts.captures += 1;
        }
        if mv.piece == PieceKind::Pawn && !mv.capture && captured {
            counts.en_passant += 1;
        }
        if mv.is_castle() {
            counts.castles += 1;
        }
        if mv.piece == PieceKind::Pawn && mv.to.rank() == color.promotion_rank() {
            counts.promotions += 1;
        }
        if is_in_check(&next, color.opposite()) {
            counts.checks += 1;
        }
        return;
    }

    let mut subtotal = PerftCounts::default();
    for child in generator.generate_legal_moves(&next, color.opposite()) {
        perft_recurse(generator, &next, &child, color.opposite(), remaining_depth - 1, &mut subtotal);
    }
    counts.merge(subtotal);
}
