//! Per-side castling rights.

use crate::Color;

/// Castling rights held by one side.
///
/// Engines keep two of these, one per color. Variant order matches the
/// discriminants engines commonly store (`All` = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CastlingRights {
    All,
    OnlyKingSide,
    OnlyQueenSide,
    #[default]
    None,
}

impl CastlingRights {
    /// Variants in declaration order.
    pub const ALL_VARIANTS: [CastlingRights; 4] = [
        CastlingRights::All,
        CastlingRights::OnlyKingSide,
        CastlingRights::OnlyQueenSide,
        CastlingRights::None,
    ];

    /// Looks up a variant by its declaration-order discriminant.
    pub const fn from_discriminant(value: u64) -> Option<Self> {
        if value < 4 {
            Some(Self::ALL_VARIANTS[value as usize])
        } else {
            None
        }
    }

    /// Looks up a variant by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "All" => Some(CastlingRights::All),
            "OnlyKingSide" => Some(CastlingRights::OnlyKingSide),
            "OnlyQueenSide" => Some(CastlingRights::OnlyQueenSide),
            "None" => Some(CastlingRights::None),
            _ => None,
        }
    }

    #[inline]
    pub const fn can_castle_kingside(self) -> bool {
        matches!(self, CastlingRights::All | CastlingRights::OnlyKingSide)
    }

    #[inline]
    pub const fn can_castle_queenside(self) -> bool {
        matches!(self, CastlingRights::All | CastlingRights::OnlyQueenSide)
    }

    /// Returns this side's share of the FEN castling field, without the `-`
    /// fallback: `"KQ"`, `"K"`, `"Q"` or `""` (lower-case for black).
    pub const fn to_fen_str(self, color: Color) -> &'static str {
        match (color, self) {
            (Color::White, CastlingRights::All) => "KQ",
            (Color::White, CastlingRights::OnlyKingSide) => "K",
            (Color::White, CastlingRights::OnlyQueenSide) => "Q",
            (Color::Black, CastlingRights::All) => "kq",
            (Color::Black, CastlingRights::OnlyKingSide) => "k",
            (Color::Black, CastlingRights::OnlyQueenSide) => "q",
            (_, CastlingRights::None) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_fragments() {
        assert_eq!(CastlingRights::All.to_fen_str(Color::White), "KQ");
        assert_eq!(CastlingRights::OnlyKingSide.to_fen_str(Color::White), "K");
        assert_eq!(CastlingRights::OnlyQueenSide.to_fen_str(Color::Black), "q");
        assert_eq!(CastlingRights::All.to_fen_str(Color::Black), "kq");
        assert_eq!(CastlingRights::None.to_fen_str(Color::White), "");
        assert_eq!(CastlingRights::None.to_fen_str(Color::Black), "");
    }

    #[test]
    fn side_queries() {
        assert!(CastlingRights::All.can_castle_kingside());
        assert!(CastlingRights::All.can_castle_queenside());
        assert!(CastlingRights::OnlyKingSide.can_castle_kingside());
        assert!(!CastlingRights::OnlyKingSide.can_castle_queenside());
        assert!(!CastlingRights::OnlyQueenSide.can_castle_kingside());
        assert!(!CastlingRights::None.can_castle_queenside());
    }

    #[test]
    fn lookup_by_name_and_discriminant() {
        for (i, rights) in CastlingRights::ALL_VARIANTS.iter().enumerate() {
            assert_eq!(CastlingRights::from_discriminant(i as u64), Some(*rights));
            assert_eq!(CastlingRights::from_name(&format!("{:?}", rights)), Some(*rights));
        }
        assert_eq!(CastlingRights::from_discriminant(4), None);
        assert_eq!(CastlingRights::from_name("Both"), None);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(CastlingRights::default(), CastlingRights::None);
    }
}
