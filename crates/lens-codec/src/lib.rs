//! Human-readable rendering of compact engine state.
//!
//! This crate provides three pure decoders:
//! - [`decode_move`] - packed move integer to coordinate notation (`"e2e4"`)
//! - [`decode_position`] - [`PositionSnapshot`] to a six-field FEN string
//! - [`summarize`] - length-only summary of a [`MoveList`]
//!
//! None of them validate chess legality. Out-of-range squares render as
//! `"??"`, overlapping bitboards resolve last-write-wins, and a multi-bit
//! en passant word resolves to its highest bit.
//!
//! # Example
//!
//! ```
//! use lens_codec::{decode_move, decode_position, PositionSnapshot};
//!
//! assert_eq!(decode_move(12 | (28 << 6)), "e2e4");
//! assert_eq!(
//!     decode_position(&PositionSnapshot::startpos()),
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
//! );
//! ```

mod mov;
mod movelist;
mod position;

pub use mov::{decode_move, PackedMove};
pub use movelist::{summarize, summarize_len, MoveList};
pub use position::{decode_position, PositionSnapshot, PIECE_ORDER};
