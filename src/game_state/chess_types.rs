//! Piece, color, and castling-rights vocabulary shared by every subsystem.
//!
//! Lookup data (FEN characters, display glyphs, piece names) lives in
//! immutable static tables so every caller reads the same values without
//! any shared mutable state.

use std::fmt;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The only rank a pawn of this color may double-step from.
    #[inline]
    pub const fn pawn_start_rank(self) -> char {
        match self {
            Color::White => '2',
            Color::Black => '7',
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> char {
        match self {
            Color::White => '8',
            Color::Black => '1',
        }
    }

    /// Rank a pawn of this color lands on when capturing en passant.
    #[inline]
    pub const fn en_passant_capture_rank(self) -> char {
        match self {
            Color::White => '6',
            Color::Black => '3',
        }
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind. Color is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
];

static PIECE_NAMES: [&str; 6] = ["Pawn", "Rook", "Knight", "Bishop", "Queen", "King"];

static PIECE_LETTERS: [char; 6] = ['P', 'R', 'N', 'B', 'Q', 'K'];

/// Display glyphs indexed by `[color][kind]`.
static PIECE_GLYPHS: [[char; 6]; 2] = [
    ['♙', '♖', '♘', '♗', '♕', '♔'],
    ['♟', '♜', '♞', '♝', '♛', '♚'],
];

/// Fixed FEN character table; anything not listed here is rejected by the parser.
static FEN_PIECE_TABLE: [(char, Piece); 12] = [
    ('P', Piece::new(PieceKind::Pawn, Color::White)),
    ('R', Piece::new(PieceKind::Rook, Color::White)),
    ('N', Piece::new(PieceKind::Knight, Color::White)),
    ('B', Piece::new(PieceKind::Bishop, Color::White)),
    ('Q', Piece::new(PieceKind::Queen, Color::White)),
    ('K', Piece::new(PieceKind::King, Color::White)),
    ('p', Piece::new(PieceKind::Pawn, Color::Black)),
    ('r', Piece::new(PieceKind::Rook, Color::Black)),
    ('n', Piece::new(PieceKind::Knight, Color::Black)),
    ('b', Piece::new(PieceKind::Bishop, Color::Black)),
    ('q', Piece::new(PieceKind::Queen, Color::Black)),
    ('k', Piece::new(PieceKind::King, Color::Black)),
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub fn name(self) -> &'static str {
        PIECE_NAMES[self.index()]
    }

    /// Uppercase letter used in move notation (`P` for pawns).
    pub fn letter(self) -> char {
        PIECE_LETTERS[self.index()]
    }

    /// Parses a notation piece letter. Pawns have no letter in notation.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch {
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A colored piece. Empty squares are `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        FEN_PIECE_TABLE
            .iter()
            .find(|(fen_char, _)| *fen_char == ch)
            .map(|(_, piece)| *piece)
    }

    pub fn glyph(self) -> char {
        PIECE_GLYPHS[self.color.index()][self.kind.index()]
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_SHORT: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_LONG: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_SHORT: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_LONG: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_SHORT | CASTLE_WHITE_LONG | CASTLE_BLACK_SHORT | CASTLE_BLACK_LONG;
