//! Chess piece representation.

use crate::Color;

/// The six kinds of chess pieces, in engine bitboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// All piece kinds, pawns first, king last.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the FEN letter for this piece, upper-case for white.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Plural field-name stem used by engines that keep one bitboard per
    /// piece kind (`pawns`, `knights`, ..., `king`).
    pub const fn field_stem(self) -> &'static str {
        match self {
            Piece::Pawn => "pawns",
            Piece::Knight => "knights",
            Piece::Bishop => "bishops",
            Piece::Rook => "rooks",
            Piece::Queen => "queens",
            Piece::King => "king",
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}
