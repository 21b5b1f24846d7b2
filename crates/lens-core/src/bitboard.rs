//! Bitboard view over raw engine words.
//!
//! A bitboard is a 64-bit integer where bit `i` marks square index `i`. The
//! engine under inspection owns the words; this type only reads them.

use crate::Square;
use std::fmt;
use std::ops::BitOr;

/// A 64-bit board set.
///
/// Bit 0 = a1, bit 1 = b1, ..., bit 63 = h8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    /// Empty bitboard (no squares set).
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Creates a bitboard with a single square set.
    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(sq.bit())
    }

    /// Creates a bitboard from a list of squares.
    pub fn from_squares(squares: &[Square]) -> Self {
        squares
            .iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb | Bitboard::from_square(*sq))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & sq.bit()) != 0
    }

    /// Returns the least significant set square, if any.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as u64)
        }
    }

    /// Returns the most significant set square, if any.
    ///
    /// For a word with exactly one bit set this is that bit. With more than
    /// one bit set it is `floor(log2(word))`.
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Square::from_index(63 - self.0.leading_zeros() as u64)
        }
    }

    /// Iterates over set squares, lowest index first.
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl From<u64> for Bitboard {
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bitboard({:#018x})", self.0)?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let mark = if (self.0 >> (rank * 8 + file)) & 1 == 1 {
                    'X'
                } else {
                    '.'
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// Iterator over set squares in a bitboard, low to high.
pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u64;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count_ones() as usize;
        (count, Some(count))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_square_contains() {
        let bb = Bitboard::from_square(Square::E4);
        assert_eq!(bb.0, 1 << 28);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::E2));
    }

    #[test]
    fn rank_masks() {
        assert_eq!(Bitboard::RANK_1.count(), 8);
        assert_eq!(Bitboard::RANK_8.count(), 8);
        assert!(Bitboard::RANK_2.contains(Square::E2));
        assert!(Bitboard::RANK_8.contains(Square::H8));
    }

    #[test]
    fn iterates_low_to_high() {
        let bb = Bitboard::new(0b1010_0001);
        let squares: Vec<u8> = bb.iter().map(|s| s.index()).collect();
        assert_eq!(squares, vec![0, 5, 7]);
        assert_eq!(bb.iter().size_hint(), (3, Some(3)));
    }

    #[test]
    fn empty_has_no_extremes() {
        assert_eq!(Bitboard::EMPTY.lsb(), None);
        assert_eq!(Bitboard::EMPTY.msb(), None);
        assert!(Bitboard::EMPTY.is_empty());
    }

    #[test]
    fn msb_picks_highest_bit() {
        let bb = Bitboard::from_squares(&[Square::E3, Square::E8]);
        assert_eq!(bb.msb(), Some(Square::E8));
        assert_eq!(bb.lsb(), Some(Square::E3));
        assert_eq!(Bitboard::new(1 << 63).msb(), Some(Square::H8));
    }

    #[test]
    fn debug_grid() {
        let text = format!("{:?}", Bitboard::from_square(Square::A1));
        assert!(text.starts_with("Bitboard(0x0000000000000001)"));
        assert!(text.contains("1 X . . . . . . . "));
        assert!(text.ends_with("  a b c d e f g h\n"));
    }

    proptest! {
        #[test]
        fn single_bit_lsb_equals_msb(index in 0u64..64) {
            let bb = Bitboard::new(1 << index);
            prop_assert_eq!(bb.lsb(), bb.msb());
            prop_assert_eq!(bb.msb().map(|s| u64::from(s.index())), Some(index));
        }

        #[test]
        fn iter_visits_every_bit(bits in any::<u64>()) {
            let rebuilt = Bitboard::new(bits)
                .iter()
                .fold(0u64, |acc, sq| acc | sq.bit());
            prop_assert_eq!(rebuilt, bits);
        }
    }
}
