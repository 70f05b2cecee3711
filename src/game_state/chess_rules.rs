//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals: the standard starting
//! position, draw thresholds, and the fixed king/rook squares of the four
//! castling moves.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-move clock value that ends the game as a draw.
pub const FIFTY_MOVE_HALFMOVES: u32 = 50;

/// Occurrences of one piece arrangement that end the game as a draw.
pub const REPETITION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Short,
    Long,
}

/// Squares touched by one castling move. Indices use the board layout
/// (`0 == a8`, `63 == h1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSpec {
    pub color: Color,
    pub side: CastleSide,
    pub right: CastlingRights,
    pub king_from: usize,
    pub king_to: usize,
    pub rook_from: usize,
    pub rook_to: usize,
}

impl CastleSpec {
    /// Square the king passes over on its way to `king_to`.
    #[inline]
    pub const fn transit_square(&self) -> usize {
        (self.king_from + self.king_to) / 2
    }

    /// Squares strictly between king and rook; all must be empty to castle.
    pub fn between_squares(&self) -> std::ops::Range<usize> {
        let low = self.king_from.min(self.rook_from);
        let high = self.king_from.max(self.rook_from);
        (low + 1)..high
    }
}

pub static CASTLE_SPECS: [CastleSpec; 4] = [
    CastleSpec {
        color: Color::White,
        side: CastleSide::Short,
        right: CASTLE_WHITE_SHORT,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
    },
    CastleSpec {
        color: Color::White,
        side: CastleSide::Long,
        right: CASTLE_WHITE_LONG,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
    },
    CastleSpec {
        color: Color::Black,
        side: CastleSide::Short,
        right: CASTLE_BLACK_SHORT,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
    },
    CastleSpec {
        color: Color::Black,
        side: CastleSide::Long,
        right: CASTLE_BLACK_LONG,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
    },
];

pub fn castle_spec(color: Color, side: CastleSide) -> &'static CastleSpec {
    let side_offset = match side {
        CastleSide::Short => 0,
        CastleSide::Long => 1,
    };
    &CASTLE_SPECS[color.index() * 2 + side_offset]
}

/// Looks up the castling move whose king travels `from -> to`.
pub fn castle_spec_for_move(from: usize, to: usize) -> Option<&'static CastleSpec> {
    CASTLE_SPECS
        .iter()
        .find(|spec| spec.king_from == from && spec.king_to == to)
}
