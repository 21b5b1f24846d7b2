//! Packed move decoding.

use lens_core::square_to_coord;
use std::fmt;

/// A move as the engine stores it.
///
/// Layout: bits 0-5 hold the from square, bits 6-11 the to square. Higher
/// bits carry promotion and capture flags; they are kept but never rendered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedMove(u32);

impl PackedMove {
    /// Mask for the from-square bits.
    pub const FROM_MASK: u32 = 0x3F;
    /// Shift of the to-square bits.
    pub const TO_SHIFT: u32 = 6;
    /// Shift of the flag bits.
    pub const FLAG_SHIFT: u32 = 12;

    /// A zero move (a1a1), used to fill unused list slots.
    pub const NULL: PackedMove = PackedMove(0);

    /// Packs a from/to pair with no flags. Indices are truncated to 6 bits.
    #[inline]
    pub const fn new(from: u8, to: u8) -> Self {
        Self::with_flags(from, to, 0)
    }

    /// Packs a from/to pair plus raw flag bits above bit 11.
    #[inline]
    pub const fn with_flags(from: u8, to: u8, flags: u32) -> Self {
        PackedMove(
            (from as u32 & Self::FROM_MASK)
                | ((to as u32 & Self::FROM_MASK) << Self::TO_SHIFT)
                | (flags << Self::FLAG_SHIFT),
        )
    }

    /// Wraps a raw mask as read from the engine.
    #[inline]
    pub const fn from_raw(mask: u32) -> Self {
        PackedMove(mask)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index of the from square (0-63).
    #[inline]
    pub const fn from_index(self) -> u8 {
        (self.0 & Self::FROM_MASK) as u8
    }

    /// Index of the to square (0-63).
    #[inline]
    pub const fn to_index(self) -> u8 {
        ((self.0 >> Self::TO_SHIFT) & Self::FROM_MASK) as u8
    }

    /// Coordinate notation, from square then to square (e.g. "e2e4").
    pub fn to_coord(self) -> String {
        decode_move(u64::from(self.0))
    }
}

impl From<u32> for PackedMove {
    fn from(mask: u32) -> Self {
        PackedMove(mask)
    }
}

impl fmt::Debug for PackedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Move")
            .field("coord", &self.to_coord())
            .field("from", &self.from_index())
            .field("to", &self.to_index())
            .field("mask", &format_args!("{:#06x}", self.0))
            .finish()
    }
}

impl fmt::Display for PackedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coord())
    }
}

/// Decodes a packed move mask into coordinate notation.
///
/// Only bits 0-11 are read; promotion and flag bits are not rendered, so a
/// promotion shows as its plain from/to pair.
pub fn decode_move(mask: u64) -> String {
    let from = mask & u64::from(PackedMove::FROM_MASK);
    let to = (mask >> PackedMove::TO_SHIFT) & u64::from(PackedMove::FROM_MASK);
    let mut coord = square_to_coord(from);
    coord.push_str(&square_to_coord(to));
    coord
}
