//! Error taxonomy for the DFPN core (spec.md §7).
//!
//! `InvariantViolation` is fatal and aborts the search — it signals
//! programmer error, not a recoverable runtime condition. `SolverError`
//! wraps it alongside the `Position`/`Evaluator` collaborator errors that
//! unwind, uncaught, out of `MID`.

use thiserror::Error;

use hexsolve_core::PositionError;

use crate::bounds::Bounds;

/// A broken DFPN invariant (spec.md §3, §4.5, §7). Aborts the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// `phi` or `delta` exceeded [`crate::bounds::INF`].
    #[error("bounds {bounds:?} exceed INF")]
    OutOfRange { bounds: Bounds },

    /// `phi == 0` but `delta != INF` (a proved win must carry infinite delta).
    #[error("proved-win bounds {bounds:?} do not have delta == INF")]
    ProvedWinNotInfiniteDelta { bounds: Bounds },

    /// `delta == 0` but `phi != INF` (a proved loss must carry infinite phi).
    #[error("proved-loss bounds {bounds:?} do not have phi == INF")]
    ProvedLossNotInfinitePhi { bounds: Bounds },

    /// A recursive `MID` call's threshold did not strictly exceed the
    /// child's latest known bounds in at least one component (spec.md
    /// §4.5 preconditions, §8 property 5).
    #[error(
        "threshold {threshold:?} does not strictly exceed stored bounds {stored:?} \
         in either component"
    )]
    NonTighteningThreshold { threshold: Bounds, stored: Bounds },

    /// An entry with both `phi == INF` and `delta == INF` was about to be
    /// stored in the transposition table. Only the root seed threshold
    /// may hold both-INF, and it is never stored (spec.md §3 rule 6).
    #[error("refusing to store both-INF bounds {bounds:?}")]
    BothInfStored { bounds: Bounds },

    /// `play`/`undo` on the `Position` collaborator got out of sync.
    #[error("position play/undo desynchronized: {0}")]
    PositionDesync(#[from] PositionError),
}

/// Errors that can unwind out of [`crate::mid::mid`] or
/// [`crate::driver::start_search`].
#[derive(Debug, Error)]
pub enum SolverError<E: std::error::Error + 'static> {
    /// A DFPN invariant was broken. Fatal.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),

    /// The `Position` collaborator raised an error outside of the
    /// invariant checks already covered by [`InvariantViolation`].
    #[error(transparent)]
    Position(#[from] PositionError),

    /// The `Evaluator` collaborator raised an error. The core does not
    /// catch these (spec.md §7) beyond guaranteeing that any `play`s
    /// performed in the unwinding `MID` invocation are undone first.
    #[error("evaluator error: {0}")]
    Evaluator(#[source] E),
}
