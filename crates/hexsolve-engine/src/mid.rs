//! The recursive proof-number search (spec.md §4.5).
//!
//! `mid` is invoked with the collaborator `Position` already positioned
//! at the node to expand; on every return path (including error unwind)
//! the position's hash is restored to what it was on entry. This mirrors
//! `SolverDFPN::MID` in the source material: a single mutable board
//! threaded through the recursion instead of cloned per node.

use hexsolve_core::{Classification, Evaluator, Move, MoveSet, Position};

use crate::bounds::{Bounds, INF};
use crate::error::{InvariantViolation, SolverError};
use crate::tt::{Entry, TranspositionTable};

/// Running counters a [`crate::driver`] reports after a search (spec.md
/// §4.6, §8 property 4: reproducible across identical runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub mid_calls: u64,
    pub terminal_nodes: u64,
}

/// Root-only progress callback (spec.md §6.1: "a GUI-hook callback
/// invoked only at `depth == 0` after each root child bound update").
/// Receives the root's candidate moves and their current bounds,
/// parallel arrays in the same order the Evaluator returned them.
pub type RootHook<'a> = dyn FnMut(&[Move], &[Bounds]) + 'a;

/// Depth-first proof-number search of the node the `position` is
/// currently at. `threshold` bounds the search effort; the call returns
/// once the node's aggregate bounds meet or exceed it.
///
/// Generic over the `Position`/`Evaluator` collaborators (spec.md §4.3,
/// §4.4) so this crate never touches board geometry or connection
/// analysis directly.
#[allow(clippy::too_many_arguments)]
pub fn mid<'h, P, Ev>(
    position: &mut P,
    evaluator: &mut Ev,
    tt: &mut TranspositionTable,
    stats: &mut SearchStats,
    threshold: Bounds,
    depth: u32,
    progress_depth: u32,
    mut root_hook: Option<&mut RootHook<'h>>,
) -> Result<(), SolverError<Ev::Error>>
where
    P: Position,
    Ev: Evaluator<P>,
{
    debug_assert!(threshold.phi >= 2 && threshold.delta >= 2);
    threshold.check_invariants()?;

    let side = position.side_to_move();
    let hash = position.hash();

    if depth <= progress_depth {
        let indent = "  ".repeat(depth as usize);
        tracing::trace!("{indent}MID depth={depth} hash={hash:#x} threshold={threshold:?}");
    }

    let existing = tt.get(hash);
    if let Some(entry) = &existing {
        if !(threshold.phi > entry.bounds.phi || threshold.delta > entry.bounds.delta) {
            return Err(InvariantViolation::NonTighteningThreshold {
                threshold,
                stored: entry.bounds,
            }
            .into());
        }
    }

    let existing_best_move = existing.as_ref().map(|e| e.best_move).unwrap_or(Move::NONE);

    let children: MoveSet = match existing {
        Some(entry) => entry.children,
        None => match evaluator.classify(position, side) {
            Ok(Classification::Terminal(winner)) => {
                let bounds = if winner == side { Bounds::winning() } else { Bounds::losing() };
                tt.put(
                    hash,
                    Entry { bounds, children: MoveSet::empty(), best_move: Move::NONE },
                );
                stats.terminal_nodes += 1;
                return Ok(());
            }
            Ok(Classification::NonTerminal(moves)) => moves,
            Err(e) => return Err(SolverError::Evaluator(e)),
        },
    };

    // Step 2: child bound table, built without invoking the Evaluator.
    let mut child_bounds = Vec::with_capacity(children.len());
    for m in children.iter() {
        position.play(side, m)?;
        let child_hash = position.hash();
        let bound = tt.get(child_hash).map(|e| e.bounds).unwrap_or_else(Bounds::leaf);
        position.undo(m)?;
        child_bounds.push(bound);
    }

    let mut agg;
    // Seed from the previously-stored pointer, not `Move::NONE`: if the
    // loop below breaks on its very first pass (threshold already met —
    // spec.md §8 property 7's no-op re-entry), `best_move` must not
    // clobber an already-correct PV pointer for a transposed-in entry.
    let mut best_move = existing_best_move;

    loop {
        agg = aggregate(&child_bounds);
        agg.check_invariants()?;

        if agg.phi >= threshold.phi || agg.delta >= threshold.delta {
            break;
        }

        let (best_idx, _delta1, delta2) = select_most_proving(&child_bounds);
        best_move = children.get(best_idx).expect("best_idx in range");
        let child = child_bounds[best_idx];

        debug_assert!(agg.delta >= child.phi, "aggregation invariant: agg.delta >= child.phi");
        let child_phi_threshold = threshold.delta - (agg.delta - child.phi);
        let child_delta_threshold = threshold.phi.min(Bounds::clamped_add(delta2, 1));
        let child_threshold = Bounds { phi: child_phi_threshold, delta: child_delta_threshold };

        if !(child_threshold.phi > child.phi || child_threshold.delta > child.delta) {
            return Err(InvariantViolation::NonTighteningThreshold {
                threshold: child_threshold,
                stored: child,
            }
            .into());
        }

        position.play(side, best_move)?;
        let child_hash = position.hash();
        let descend = mid(position, evaluator, tt, stats, child_threshold, depth + 1, progress_depth, root_hook.as_deref_mut());
        if let Err(e) = descend {
            position.undo(best_move)?;
            return Err(e);
        }
        let refreshed = tt
            .get(child_hash)
            .unwrap_or_else(|| panic!("child at hash {child_hash:#x} must have an Entry after MID returns"));
        position.undo(best_move)?;
        child_bounds[best_idx] = refreshed.bounds;

        if depth == 0 {
            if let Some(hook) = root_hook.as_deref_mut() {
                let moves: Vec<Move> = children.iter().collect();
                hook(&moves, &child_bounds);
            }
        }
    }

    if agg.phi == INF && agg.delta == INF {
        return Err(InvariantViolation::BothInfStored { bounds: agg }.into());
    }
    tt.put(hash, Entry { bounds: agg, children, best_move });
    stats.mid_calls += 1;

    debug_assert_eq!(position.hash(), hash, "MID must leave the position where it found it");
    Ok(())
}

/// The AND/OR update over child bounds (spec.md §4.5 "Aggregate update").
fn aggregate(child_bounds: &[Bounds]) -> Bounds {
    if child_bounds.iter().any(|b| b.delta == 0) {
        return Bounds::winning();
    }
    let phi = child_bounds.iter().map(|b| b.delta).min().unwrap_or(INF);
    let delta = child_bounds
        .iter()
        .fold(0u32, |acc, b| Bounds::clamped_add(acc, b.phi));
    Bounds { phi, delta }
}

/// Index of the most-proving child (smallest `delta`), plus the smallest
/// and second-smallest `delta` values seen (`INF` if absent).
fn select_most_proving(child_bounds: &[Bounds]) -> (usize, u32, u32) {
    let mut best_idx = 0;
    let mut delta1 = INF;
    let mut delta2 = INF;
    for (i, b) in child_bounds.iter().enumerate() {
        if b.delta < delta1 {
            delta2 = delta1;
            delta1 = b.delta;
            best_idx = i;
        } else if b.delta < delta2 {
            delta2 = b.delta;
        }
    }
    (best_idx, delta1, delta2)
}
