//! Errors from the `Position` collaborator contract (spec.md §4.3).

use thiserror::Error;

use crate::mv::Move;

/// Errors a [`Position`](crate::position::Position) implementation may
/// raise when `play`/`undo` are misused.
///
/// Per spec.md §7 these are `InvariantViolation`s: programmer error, not
/// recoverable conditions. The solver never catches them — they unwind
/// out of MID, and `hexsolve-engine::SolverError` wraps them for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    /// `play` was called with a cell that is already occupied.
    #[error("cannot play on occupied cell {cell}")]
    CellOccupied {
        /// The cell that was already occupied.
        cell: Move,
    },
    /// `undo` was called with a move that does not match the most recent
    /// `play` — the play/undo stack is out of sync.
    #[error("undo({attempted}) does not match last play({expected})")]
    UndoMismatch {
        /// The move `undo` was actually called with.
        attempted: Move,
        /// The move that was actually on top of the play stack.
        expected: Move,
    },
    /// `undo` was called with no prior unmatched `play`.
    #[error("undo({attempted}) called with an empty play stack")]
    UndoWithEmptyStack {
        /// The move `undo` was called with.
        attempted: Move,
    },
}
