//! Field names the host reads snapshots through.

use lens_core::{Color, Piece};
use serde::{Deserialize, Serialize};

/// Names of the fields an engine snapshot exposes.
///
/// Defaults match an engine that stores its move as `{ mask }`, its move
/// list as `{ moves: { len, xs } }`, and its board as twelve
/// `white_pawns` .. `black_king` words plus the state fields below. Every
/// name can be overridden from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapshotLayout {
    /// Packed move word inside a move value.
    pub move_mask: String,
    /// Inner container of a move list.
    pub move_list_moves: String,
    /// Length counter inside the container.
    pub move_list_len: String,
    /// Backing array inside the container.
    pub move_list_items: String,
    /// Prefix of white bitboard fields.
    pub white_prefix: String,
    /// Prefix of black bitboard fields.
    pub black_prefix: String,
    pub white_to_move: String,
    pub white_castling: String,
    pub black_castling: String,
    pub en_passant: String,
    pub halfmove_clock: String,
    pub fullmove_number: String,
}

impl Default for SnapshotLayout {
    fn default() -> Self {
        SnapshotLayout {
            move_mask: "mask".to_string(),
            move_list_moves: "moves".to_string(),
            move_list_len: "len".to_string(),
            move_list_items: "xs".to_string(),
            white_prefix: "white_".to_string(),
            black_prefix: "black_".to_string(),
            white_to_move: "white_to_move".to_string(),
            white_castling: "white_castling_rights".to_string(),
            black_castling: "black_castling_rights".to_string(),
            en_passant: "en_passant_target".to_string(),
            halfmove_clock: "halfmove_clock".to_string(),
            fullmove_number: "fullmove_number".to_string(),
        }
    }
}

impl SnapshotLayout {
    /// Name of the bitboard field for one (color, piece) pair, e.g. `white_pawns`.
    pub fn bitboard_field(&self, color: Color, piece: Piece) -> String {
        let prefix = match color {
            Color::White => &self.white_prefix,
            Color::Black => &self.black_prefix,
        };
        format!("{}{}", prefix, piece.field_stem())
    }

    pub fn castling_field(&self, color: Color) -> &str {
        match color {
            Color::White => &self.white_castling,
            Color::Black => &self.black_castling,
        }
    }
}
