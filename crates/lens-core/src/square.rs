//! Board square representation and coordinate notation.

use std::fmt;

/// Placeholder rendered for a square index outside 0-63.
pub const INVALID_COORD: &str = "??";

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks, bottom (white's back rank) to top.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the printed rank digit ('1'-'8').
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares use little-endian rank-file mapping, the layout every engine
/// bitboard in this workspace follows:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from an index of any width. Returns `None` outside 0-63.
    #[inline]
    pub const fn from_index(index: u64) -> Option<Self> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Returns the coordinate notation for this square (e.g. "e4").
    pub fn to_algebraic(self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file().to_char());
        s.push(self.rank().to_char());
        s
    }

    /// Returns a bitboard mask with only this square set.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const E2: Square = Square(12);
    pub const E3: Square = Square(20);
    pub const E4: Square = Square(28);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Renders a raw square index in coordinate notation.
///
/// Indices outside 0-63 render as [`INVALID_COORD`] instead of failing, so a
/// single corrupt field never hides the rest of a decoded value.
pub fn square_to_coord(index: u64) -> String {
    match Square::from_index(index) {
        Some(sq) => sq.to_algebraic(),
        None => INVALID_COORD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 28);
        assert_eq!(e4, Square::E4);
    }

    #[test]
    fn corner_coords() {
        assert_eq!(square_to_coord(0), "a1");
        assert_eq!(square_to_coord(7), "h1");
        assert_eq!(square_to_coord(56), "a8");
        assert_eq!(square_to_coord(63), "h8");
        assert_eq!(square_to_coord(12), "e2");
    }

    #[test]
    fn out_of_range_placeholder() {
        assert_eq!(square_to_coord(64), "??");
        assert_eq!(square_to_coord(u64::MAX), "??");
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Square::E8), "e8");
        assert_eq!(format!("{:?}", Square::A1), "Square(a1)");
    }

    #[test]
    fn square_bit() {
        assert_eq!(Square::A1.bit(), 1);
        assert_eq!(Square::H1.bit(), 128);
        assert_eq!(Square::A8.bit(), 1 << 56);
    }

    proptest! {
        #[test]
        fn in_range_coord_matches_index(index in 0u64..64) {
            let coord = square_to_coord(index);
            let bytes = coord.as_bytes();
            prop_assert_eq!(bytes.len(), 2);
            prop_assert!((b'a'..=b'h').contains(&bytes[0]));
            prop_assert!((b'1'..=b'8').contains(&bytes[1]));
            let rebuilt = u64::from(bytes[1] - b'1') * 8 + u64::from(bytes[0] - b'a');
            prop_assert_eq!(rebuilt, index);
        }

        #[test]
        fn out_of_range_coord_is_placeholder(index in 64u64..) {
            prop_assert_eq!(square_to_coord(index), INVALID_COORD);
        }
    }
}
