//! Search entry point (spec.md §4.6): builds the TT, seeds the root
//! threshold, runs `mid`, and reports what happened.

use std::time::{Duration, Instant};

use hexsolve_core::{Color, Evaluator, Move, Position};

use crate::bounds::Bounds;
use crate::error::SolverError;
use crate::mid::{mid, RootHook, SearchStats};
use crate::tt::{TranspositionTable, TtStats};

/// Transposition table sizing knob (spec.md §6.1 "TT size exponent").
/// Default of `2^20` entries matches `SolverDFPN`'s `m_ttsize` default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtConfig {
    pub size_exp: u32,
}

impl Default for TtConfig {
    fn default() -> TtConfig {
        TtConfig { size_exp: 20 }
    }
}

/// The knobs `StartSearch` accepts (spec.md §6.1). The GUI-fx callback is
/// passed separately to `start_search` since it borrows caller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub tt: TtConfig,
    /// MID depths at or below this value emit a progress trace. `0`
    /// (the default) only traces the root.
    pub progress_depth: u32,
}

/// Root-only progress/GUI hook (spec.md §6, "Progress/GUI hook").
pub type GuiHook<'a> = RootHook<'a>;

/// What a completed search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub winner: Color,
    pub root_bounds: Bounds,
    pub pv: Vec<Move>,
    pub stats: SearchStats,
    pub tt_stats: TtStats,
    pub elapsed: Duration,
}

/// Run a complete DFPN proof from the current position (spec.md §4.6
/// `StartSearch`). `color` is the side whose win is being proved; the
/// returned [`SearchOutcome::winner`] names whoever the proof favors.
pub fn start_search<P, Ev>(
    color: Color,
    position: &mut P,
    evaluator: &mut Ev,
    config: &SolverConfig,
    gui_hook: Option<&mut GuiHook<'_>>,
) -> Result<SearchOutcome, SolverError<Ev::Error>>
where
    P: Position,
    Ev: Evaluator<P>,
{
    let mut tt = TranspositionTable::new(config.tt.size_exp);
    let mut stats = SearchStats::default();
    let root_hash = position.hash();

    let started = Instant::now();
    mid(
        position,
        evaluator,
        &mut tt,
        &mut stats,
        Bounds::root_seed(),
        0,
        config.progress_depth,
        gui_hook,
    )?;
    let elapsed = started.elapsed();

    let root_entry = tt
        .get(root_hash)
        .expect("the root MID call always stores an Entry for the position it was given");
    let winner = if root_entry.bounds.is_winning() { color } else { color.opponent() };
    let variation = pv(&mut tt, position);
    let tt_stats = tt.stats();

    report(&stats, &tt_stats, elapsed, &variation);

    Ok(SearchOutcome {
        winner,
        root_bounds: root_entry.bounds,
        pv: variation,
        stats,
        tt_stats,
        elapsed,
    })
}

/// Walk `bestMove` pointers from the current position through the TT,
/// stopping at `Move::NONE` or a TT miss (spec.md §4.6 step 5). Leaves
/// `position` exactly as it found it.
pub fn pv<P: Position>(tt: &mut TranspositionTable, position: &mut P) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut hash = position.hash();
    loop {
        let entry = match tt.get(hash) {
            Some(entry) => entry,
            None => break,
        };
        if entry.best_move.is_none() {
            break;
        }
        let side = position.side_to_move();
        if position.play(side, entry.best_move).is_err() {
            break;
        }
        moves.push(entry.best_move);
        hash = position.hash();
    }
    for &mv in moves.iter().rev() {
        let _ = position.undo(mv);
    }
    moves
}

/// Render the GUI-fx progress text for the root's current child bounds
/// (spec.md §6, "Progress/GUI hook"). One `LABEL` token per child: `L`
/// if proved winning, `W` if proved losing, else `phi:delta`.
pub fn format_gogui_gfx(children: &[Move], bounds: &[Bounds]) -> String {
    let mut out = String::from("gogui-gfx:\ndfpn\n");
    // VAR carries no variation text; the line is intentionally empty.
    out.push_str("VAR\n");
    out.push_str("LABEL");
    for (mv, b) in children.iter().zip(bounds.iter()) {
        let token = if b.phi == 0 {
            "L".to_string()
        } else if b.delta == 0 {
            "W".to_string()
        } else {
            format!("{}:{}", b.phi, b.delta)
        };
        out.push_str(&format!(" {mv} {token}"));
    }
    out.push_str("\nTEXT\n");
    out
}

fn report(stats: &SearchStats, tt_stats: &TtStats, elapsed: Duration, variation: &[Move]) {
    let secs = elapsed.as_secs_f64();
    let mids_per_sec = if secs > 0.0 { stats.mid_calls as f64 / secs } else { 0.0 };
    let pv_text = variation
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!(
        mid_calls = stats.mid_calls,
        terminal_nodes = stats.terminal_nodes,
        elapsed_secs = secs,
        mids_per_sec,
        %tt_stats,
        pv = %pv_text,
        "DFPN search complete",
    );
}
