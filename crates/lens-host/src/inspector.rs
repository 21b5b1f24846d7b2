//! Reading and rendering snapshots from host value trees.

use lens_codec::{
    decode_move, decode_position, summarize_len, MoveList, PackedMove, PositionSnapshot,
    PIECE_ORDER,
};
use lens_core::{Bitboard, CastlingRights, Color};
use tracing::{debug, warn};

use crate::{FieldSource, HostError, SnapshotLayout};

/// Reads engine snapshots out of host values using a [`SnapshotLayout`].
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    layout: SnapshotLayout,
}

impl Inspector {
    pub fn new(layout: SnapshotLayout) -> Self {
        Inspector { layout }
    }

    pub fn layout(&self) -> &SnapshotLayout {
        &self.layout
    }

    /// Reads the packed move mask from a move value.
    ///
    /// A bare integer node is taken as the mask itself.
    pub fn read_move_mask<V: FieldSource>(&self, value: &V) -> Result<u64, HostError> {
        if let Some(mask) = value.as_unsigned() {
            return Ok(mask);
        }
        read_unsigned(value, &self.layout.move_mask)
    }

    /// Reads a move value. Mask bits above 32 are dropped.
    pub fn read_move<V: FieldSource>(&self, value: &V) -> Result<PackedMove, HostError> {
        self.read_move_mask(value)
            .map(|mask| PackedMove::from_raw(mask as u32))
    }

    /// Reads a full position snapshot.
    pub fn read_position<V: FieldSource>(&self, value: &V) -> Result<PositionSnapshot, HostError> {
        let mut position = PositionSnapshot::empty();

        for &(color, piece) in PIECE_ORDER.iter() {
            let name = self.layout.bitboard_field(color, piece);
            let bits = read_unsigned(value, &name)?;
            position.set_bitboard(color, piece, Bitboard::new(bits));
        }

        let name = &self.layout.white_to_move;
        position.white_to_move = field(value, name)?
            .as_flag()
            .ok_or_else(|| HostError::invalid(name, "a boolean"))?;

        position.white_castling = self.read_castling(value, Color::White)?;
        position.black_castling = self.read_castling(value, Color::Black)?;
        position.en_passant = self.read_en_passant(value)?;
        position.halfmove_clock = read_u32(value, &self.layout.halfmove_clock)?;
        position.fullmove_number = read_u32(value, &self.layout.fullmove_number)?;

        Ok(position)
    }

    /// Reads the length counter of a move list.
    pub fn read_move_list_len<V: FieldSource>(&self, value: &V) -> Result<u64, HostError> {
        let moves = self.move_list_container(value)?;
        let len_name = &self.layout.move_list_len;
        moves
            .child(len_name)
            .ok_or_else(|| HostError::MissingNestedField {
                field: len_name.clone(),
                parent: self.layout.move_list_moves.clone(),
            })?
            .as_unsigned()
            .ok_or_else(|| HostError::invalid(len_name, "an unsigned integer"))
    }

    /// Reads a move list, element by element up to its length counter.
    ///
    /// Elements past [`MoveList::MAX_MOVES`] are dropped.
    pub fn read_move_list<V: FieldSource>(&self, value: &V) -> Result<MoveList, HostError> {
        let len = self.read_move_list_len(value)?;
        let mut list = MoveList::new();
        for index in 0..len.min(MoveList::MAX_MOVES as u64) as usize {
            let element = self.move_list_element(value, index)?;
            list.push(self.read_move(element)?);
        }
        Ok(list)
    }

    /// Renders a move value as coordinate notation, or an error string.
    pub fn format_move<V: FieldSource>(&self, value: &V) -> String {
        match self.read_move_mask(value) {
            Ok(mask) => {
                let coord = decode_move(mask);
                debug!(mask, %coord, "decoded move");
                coord
            }
            Err(err) => degrade("move", &err),
        }
    }

    /// Renders a position value as FEN, or an error string.
    pub fn format_position<V: FieldSource>(&self, value: &V) -> String {
        match self.read_position(value) {
            Ok(position) => {
                let fen = decode_position(&position);
                debug!(%fen, "decoded position");
                fen
            }
            Err(err) => degrade("position", &err),
        }
    }

    /// Renders the one-line summary of a move list value, or an error string.
    ///
    /// Only the length counter is read; elements are left to
    /// [`Self::expand_move_list`].
    pub fn format_move_list<V: FieldSource>(&self, value: &V) -> String {
        match self.read_move_list_len(value) {
            Ok(len) => {
                debug!(len, "summarized move list");
                summarize_len(len)
            }
            Err(err) => degrade("MoveList", &err),
        }
    }

    /// Renders each element of a move list up to its length counter.
    ///
    /// A missing container or counter yields a single error entry; a missing
    /// element yields an error entry in that element's slot. A counter larger
    /// than [`MoveList::MAX_MOVES`] is clamped to it.
    pub fn expand_move_list<V: FieldSource>(&self, value: &V) -> Vec<String> {
        let len = match self.read_move_list_len(value) {
            Ok(len) => len.min(MoveList::MAX_MOVES as u64) as usize,
            Err(err) => return vec![degrade("MoveList", &err)],
        };
        (0..len)
            .map(|index| match self.move_list_element(value, index) {
                Ok(element) => self.format_move(element),
                Err(err) => degrade("move", &err),
            })
            .collect()
    }

    fn move_list_container<'v, V: FieldSource>(&self, value: &'v V) -> Result<&'v V, HostError> {
        field(value, &self.layout.move_list_moves)
    }

    fn move_list_element<'v, V: FieldSource>(
        &self,
        value: &'v V,
        index: usize,
    ) -> Result<&'v V, HostError> {
        let moves = self.move_list_container(value)?;
        let items_name = &self.layout.move_list_items;
        moves
            .child(items_name)
            .ok_or_else(|| HostError::MissingNestedField {
                field: items_name.clone(),
                parent: self.layout.move_list_moves.clone(),
            })?
            .element(index)
            .ok_or_else(|| HostError::MissingElement {
                field: items_name.clone(),
                index,
            })
    }

    /// Castling rights arrive as a variant name or a declaration-order
    /// discriminant.
    fn read_castling<V: FieldSource>(
        &self,
        value: &V,
        color: Color,
    ) -> Result<CastlingRights, HostError> {
        let name = self.layout.castling_field(color);
        let node = field(value, name)?;
        let rights = match node.as_text() {
            Some(text) => CastlingRights::from_name(text),
            None => node.as_unsigned().and_then(CastlingRights::from_discriminant),
        };
        rights.ok_or_else(|| HostError::UnknownCastlingRights(name.to_string()))
    }

    /// En passant arrives as a raw bitboard, `null`, or an option encoding
    /// (`{"Some": bits}` / `{"None": ..}` / `"None"`).
    fn read_en_passant<V: FieldSource>(&self, value: &V) -> Result<Bitboard, HostError> {
        let name = &self.layout.en_passant;
        let node = field(value, name)?;
        if node.is_null() || node.as_text() == Some("None") || node.child("None").is_some() {
            return Ok(Bitboard::EMPTY);
        }
        let inner = node.child("Some").unwrap_or(node);
        inner
            .as_unsigned()
            .map(Bitboard::new)
            .ok_or_else(|| HostError::invalid(name, "a bitboard"))
    }
}

fn field<'v, V: FieldSource>(value: &'v V, name: &str) -> Result<&'v V, HostError> {
    value
        .child(name)
        .ok_or_else(|| HostError::MissingField(name.to_string()))
}

fn read_unsigned<V: FieldSource>(value: &V, name: &str) -> Result<u64, HostError> {
    field(value, name)?
        .as_unsigned()
        .ok_or_else(|| HostError::invalid(name, "an unsigned integer"))
}

fn read_u32<V: FieldSource>(value: &V, name: &str) -> Result<u32, HostError> {
    let raw = read_unsigned(value, name)?;
    u32::try_from(raw).map_err(|_| HostError::invalid(name, "a 32-bit unsigned integer"))
}

/// Turns a structural error into the string a host displays in place of the
/// value. Missing fields read `Error: <msg>`; malformed ones name the kind.
fn degrade(kind: &str, err: &HostError) -> String {
    warn!(kind, error = %err, "display fell back to error string");
    if err.is_missing() {
        format!("Error: {}", err)
    } else {
        format!("Error formatting {}: {}", kind, err)
    }
}
