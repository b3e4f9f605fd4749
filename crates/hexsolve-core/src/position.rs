//! The `Position` collaborator contract (spec.md §4.3).
//!
//! `hexsolve-engine`'s MID search is generic over this trait — it never
//! touches board geometry, move legality, or connection analysis
//! directly. Those are `hexsolve-core`'s job (and, per spec.md §1, an
//! explicitly out-of-scope "collaborator" from the DFPN core's point of
//! view: the core only depends on these four methods).

use crate::color::Color;
use crate::error::PositionError;
use crate::mv::Move;

/// A mutable, undoable Hex board with a side-to-move-sensitive hash.
///
/// `play` and `undo` form a stack: every `play` must be matched by an
/// `undo` of the same move before an earlier `play` can be undone.
/// Implementations must restore their hash bit-for-bit on `undo` — the
/// solver relies on this to re-enter positions via the transposition
/// table after backing out of a line.
pub trait Position {
    /// A fingerprint of this position, including side to move. Equal
    /// hashes are treated as equal search states (collisions are
    /// accepted — see spec.md §9 on the transposition table).
    fn hash(&self) -> u64;

    /// The side to move in the current position.
    fn side_to_move(&self) -> Color;

    /// Play `mv` for `color`. `mv` must name an empty cell.
    fn play(&mut self, color: Color, mv: Move) -> Result<(), PositionError>;

    /// Reverse the most recent `play`. `mv` must match it exactly.
    fn undo(&mut self, mv: Move) -> Result<(), PositionError>;
}
