//! `Move` — an opaque Hex cell identifier.

use std::fmt;

/// A cell on the Hex board, identified by its zero-based index.
///
/// `Move::NONE` is the sentinel "no move" value and is never returned by
/// a board's move generation; it is only ever synthesized by the solver
/// (e.g. a terminal position's `best_move`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Sentinel denoting "no move."
    pub const NONE: Move = Move(u16::MAX);

    /// Build a move from a raw cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` equals the sentinel's raw encoding; no board is
    /// expected to have `u16::MAX` cells.
    #[inline]
    pub const fn new(index: u16) -> Move {
        assert!(index != u16::MAX, "cell index collides with Move::NONE sentinel");
        Move(index)
    }

    /// Is this the sentinel "no move" value?
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Move::NONE.0
    }

    /// The raw cell index, if this is not `Move::NONE`.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_none() { None } else { Some(self.0 as usize) }
    }

    /// The raw cell index without checking for the sentinel.
    ///
    /// Callers that have already excluded `Move::NONE` (e.g. iterating a
    /// `MoveSet`) can use this to avoid the `Option` wrapping.
    #[inline]
    pub const fn raw_index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "Move::NONE")
        } else {
            write!(f, "Move({})", self.0)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
