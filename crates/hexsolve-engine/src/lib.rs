//! The DFPN proof-number search core (spec.md §1, §4).
//!
//! Depends on `hexsolve-core` only through the `Position`/`Evaluator`
//! collaborator traits — no board geometry or connection analysis lives
//! here.

mod bounds;
mod driver;
mod error;
mod mid;
mod tt;

pub use bounds::{Bounds, INF};
pub use driver::{format_gogui_gfx, pv, start_search, GuiHook, SearchOutcome, SolverConfig, TtConfig};
pub use error::{InvariantViolation, SolverError};
pub use mid::{mid as mid_search, RootHook, SearchStats};
pub use tt::{Entry, TranspositionTable, TtStats};
