//! Position snapshot and FEN rendering.

use lens_core::{square_to_coord, Bitboard, CastlingRights, Color, Piece, Square};
use std::fmt;

/// Order in which the twelve bitboards are written onto the board.
///
/// When two bitboards claim the same square, the later entry wins.
pub const PIECE_ORDER: [(Color, Piece); 12] = [
    (Color::White, Piece::Pawn),
    (Color::White, Piece::Knight),
    (Color::White, Piece::Bishop),
    (Color::White, Piece::Rook),
    (Color::White, Piece::Queen),
    (Color::White, Piece::King),
    (Color::Black, Piece::Pawn),
    (Color::Black, Piece::Knight),
    (Color::Black, Piece::Bishop),
    (Color::Black, Piece::Rook),
    (Color::Black, Piece::Queen),
    (Color::Black, Piece::King),
];

/// Read-only copy of an engine position.
///
/// Mirrors the engine's own layout: one bitboard per (color, piece) pair,
/// a side-to-move flag, one castling enum per side, and the en passant
/// target as a bitboard (zero when there is none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSnapshot {
    /// Piece bitboards, indexed `[color][piece]`.
    pub bitboards: [[Bitboard; 6]; 2],
    pub white_to_move: bool,
    pub white_castling: CastlingRights,
    pub black_castling: CastlingRights,
    /// Capturable en passant square, or empty.
    pub en_passant: Bitboard,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl PositionSnapshot {
    /// A board with no pieces, white to move, no castling, counters 0 and 1.
    pub const fn empty() -> Self {
        PositionSnapshot {
            bitboards: [[Bitboard::EMPTY; 6]; 2],
            white_to_move: true,
            white_castling: CastlingRights::None,
            black_castling: CastlingRights::None,
            en_passant: Bitboard::EMPTY,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The standard initial position.
    pub const fn startpos() -> Self {
        PositionSnapshot {
            bitboards: [
                [
                    Bitboard::RANK_2,
                    Bitboard::new(0x0000_0000_0000_0042),
                    Bitboard::new(0x0000_0000_0000_0024),
                    Bitboard::new(0x0000_0000_0000_0081),
                    Bitboard::new(0x0000_0000_0000_0008),
                    Bitboard::new(0x0000_0000_0000_0010),
                ],
                [
                    Bitboard::RANK_7,
                    Bitboard::new(0x4200_0000_0000_0000),
                    Bitboard::new(0x2400_0000_0000_0000),
                    Bitboard::new(0x8100_0000_0000_0000),
                    Bitboard::new(0x0800_0000_0000_0000),
                    Bitboard::new(0x1000_0000_0000_0000),
                ],
            ],
            white_to_move: true,
            white_castling: CastlingRights::All,
            black_castling: CastlingRights::All,
            en_passant: Bitboard::EMPTY,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub const fn bitboard(&self, color: Color, piece: Piece) -> Bitboard {
        self.bitboards[color.index()][piece.index()]
    }

    #[inline]
    pub fn set_bitboard(&mut self, color: Color, piece: Piece, bb: Bitboard) {
        self.bitboards[color.index()][piece.index()] = bb;
    }

    /// Builder-style variant of [`Self::set_bitboard`].
    pub fn with_bitboard(mut self, color: Color, piece: Piece, bb: Bitboard) -> Self {
        self.set_bitboard(color, piece, bb);
        self
    }

    /// Returns the side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        Color::from_white_to_move(self.white_to_move)
    }

    #[inline]
    pub const fn castling(&self, color: Color) -> CastlingRights {
        match color {
            Color::White => self.white_castling,
            Color::Black => self.black_castling,
        }
    }

    /// Union of all twelve bitboards.
    pub fn occupied(&self) -> Bitboard {
        PIECE_ORDER
            .iter()
            .fold(Bitboard::EMPTY, |acc, &(c, p)| acc | self.bitboard(c, p))
    }

    /// Returns the piece shown on `sq`, resolving overlaps like the FEN
    /// encoder does (last entry of [`PIECE_ORDER`] wins).
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        PIECE_ORDER
            .iter()
            .rev()
            .find(|&&(c, p)| self.bitboard(c, p).contains(sq))
            .map(|&(c, p)| (p, c))
    }

    /// Per-square FEN letters, indexed by square.
    fn mailbox(&self) -> [Option<char>; 64] {
        let mut board = [None; 64];
        for &(color, piece) in PIECE_ORDER.iter() {
            let letter = piece.to_fen_char(color);
            for sq in self.bitboard(color, piece) {
                board[sq.index() as usize] = Some(letter);
            }
        }
        board
    }

    /// Converts the snapshot to a FEN string.
    pub fn to_fen(&self) -> String {
        let board = self.mailbox();
        let mut fen = String::with_capacity(90);

        // Piece placement, rank 8 first
        for rank in (0..8).rev() {
            let mut empty_count = 0u8;
            for file in 0..8 {
                match board[rank * 8 + file] {
                    Some(letter) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(letter);
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move().fen_char());

        fen.push(' ');
        let castling = [Color::White, Color::Black]
            .iter()
            .map(|&c| self.castling(c).to_fen_str(c))
            .collect::<String>();
        if castling.is_empty() {
            fen.push('-');
        } else {
            fen.push_str(&castling);
        }

        fen.push(' ');
        match self.en_passant.msb() {
            Some(sq) => fen.push_str(&square_to_coord(u64::from(sq.index()))),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }
}

impl Default for PositionSnapshot {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for PositionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

/// Renders a position snapshot as FEN.
pub fn decode_position(position: &PositionSnapshot) -> String {
    position.to_fen()
}
