//! Board vocabulary for engine state inspection.
//!
//! This crate provides the types shared by the codecs and hosts:
//! - [`Piece`] and [`Color`] for piece identity
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Bitboard`] for one-bit-per-square piece sets
//! - [`CastlingRights`] for the per-side castling enum
//!
//! Nothing here validates chess legality. Values are read as-is and
//! rendered on a best-effort basis.

mod bitboard;
mod castling;
mod color;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use color::Color;
pub use piece::Piece;
pub use square::{square_to_coord, File, Rank, Square, INVALID_COORD};
