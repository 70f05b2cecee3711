//! Board coordinates.
//!
//! A `BoardLocation` is a file/rank pair that can only be built for squares
//! on the board. Square indices run rank-major from `a8 == 0` to `h1 == 63`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    file: char,
    rank: char,
}

impl BoardLocation {
    /// Builds a location from coordinate characters, `None` when off the board.
    pub fn new(file: char, rank: char) -> Option<Self> {
        if ('a'..='h').contains(&file) && ('1'..='8').contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Panics when `index >= 64`.
    pub fn from_index(index: usize) -> Self {
        assert!(index < 64, "square index {index} is off the board");
        let file = char::from(b'a' + (index % 8) as u8);
        let rank = char::from(b'8' - (index / 8) as u8);
        Self { file, rank }
    }

    /// Parses a two-character square such as `e4`.
    pub fn parse(square: &str) -> Option<Self> {
        let mut chars = square.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(file, rank)
    }

    #[inline]
    pub fn index(self) -> usize {
        (self.file as usize - 'a' as usize) + ('8' as usize - self.rank as usize) * 8
    }

    #[inline]
    pub fn file(self) -> char {
        self.file
    }

    #[inline]
    pub fn rank(self) -> char {
        self.rank
    }

    /// Zero-based file index (`a == 0`).
    #[inline]
    pub fn file_index(self) -> i8 {
        (self.file as u8 - b'a') as i8
    }

    /// Zero-based rank index (`1 == 0`).
    #[inline]
    pub fn rank_index(self) -> i8 {
        (self.rank as u8 - b'1') as i8
    }

    /// Applies a file/rank delta through square arithmetic and rejects any
    /// result that left the board or wrapped around a side edge.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let source = self.index() as i32;
        let target = source + d_file as i32 - d_rank as i32 * 8;
        if !(0..64).contains(&target) {
            return None;
        }
        if target % 8 != source % 8 + d_file as i32 || target / 8 != source / 8 - d_rank as i32 {
            return None;
        }
        Some(Self::from_index(target as usize))
    }

    pub fn is_light_square(self) -> bool {
        let index = self.index();
        (index + index / 8) % 2 == 0
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}
