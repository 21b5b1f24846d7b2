//! Bounded move collection and its summary line.

use crate::PackedMove;

/// Fixed-capacity move list, laid out like the engine's own: a backing
/// array plus a length counter. Slots past `len` are not part of the list.
#[derive(Clone)]
pub struct MoveList {
    moves: [PackedMove; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Capacity of every move list.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [PackedMove::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Appends a move. Returns `false` and drops the move when the list is full.
    #[inline]
    pub fn push(&mut self, m: PackedMove) -> bool {
        if self.len == Self::MAX_MOVES {
            return false;
        }
        self.moves[self.len] = m;
        self.len += 1;
        true
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        Self::MAX_MOVES
    }

    #[inline]
    pub fn as_slice(&self) -> &[PackedMove] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PackedMove> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<PackedMove> for MoveList {
    fn from_iter<I: IntoIterator<Item = PackedMove>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for m in iter {
            if !list.push(m) {
                break;
            }
        }
        list
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a PackedMove;
    type IntoIter = std::slice::Iter<'a, PackedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|m| m.to_coord()))
            .finish()
    }
}

/// Summary line for a move list. Elements are not rendered here; callers
/// that want them decode each one with [`crate::decode_move`].
pub fn summarize(list: &MoveList) -> String {
    summarize_len(list.len() as u64)
}

/// Summary line for a move list whose length counter was read directly.
pub fn summarize_len(len: u64) -> String {
    format!("MoveList (len = {})", len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary() {
        assert_eq!(summarize(&MoveList::new()), "MoveList (len = 0)");
        assert!(MoveList::default().is_empty());
    }

    #[test]
    fn summary_counts_only_populated() {
        let list: MoveList = [
            PackedMove::new(12, 28),
            PackedMove::new(6, 21),
            PackedMove::new(52, 36),
        ]
        .into_iter()
        .collect();
        assert_eq!(summarize(&list), "MoveList (len = 3)");
        assert_eq!(list.capacity(), MoveList::MAX_MOVES);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut list = MoveList::new();
        for _ in 0..MoveList::MAX_MOVES {
            assert!(list.push(PackedMove::NULL));
        }
        assert!(!list.push(PackedMove::new(12, 28)));
        assert_eq!(list.len(), MoveList::MAX_MOVES);
    }

    #[test]
    fn collect_truncates_overflow() {
        let list: MoveList = (0..300u32).map(PackedMove::from_raw).collect();
        assert_eq!(list.len(), MoveList::MAX_MOVES);
    }

    #[test]
    fn debug_lists_coords() {
        let list: MoveList = [PackedMove::new(12, 28), PackedMove::new(1, 18)]
            .into_iter()
            .collect();
        assert_eq!(format!("{:?}", list), "[\"e2e4\", \"b1c3\"]");
        let coords: Vec<String> = (&list).into_iter().map(|m| m.to_coord()).collect();
        assert_eq!(coords, vec!["e2e4", "b1c3"]);
    }

    #[test]
    fn summarize_is_repeatable() {
        let list: MoveList = [PackedMove::new(12, 28), PackedMove::new(6, 21)]
            .into_iter()
            .collect();
        let first = summarize(&list);
        assert_eq!(summarize(&list), first);
        assert_eq!(first, "MoveList (len = 2)");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn summarize_len_direct() {
        assert_eq!(summarize_len(42), "MoveList (len = 42)");
    }
}
