//! Transposition table: a fixed-capacity, hash-indexed cache of search
//! state (spec.md §3 "TT", §4.2).
//!
//! Unlike `cesso_engine::search::tt`'s lockless atomic table (built for
//! Lazy SMP), this one is a plain direct-mapped array with a per-slot
//! hash tag: spec.md §5 makes the DFPN core single-threaded and
//! synchronous by design (no parallel search is a stated non-goal), so
//! there is nothing to protect against concurrent torn writes. The
//! `{ get, put, stats }` capability shape and the "collisions are
//! silently lossy, never wrong" contract are carried over unchanged
//! (spec.md §9).

use hexsolve_core::{Move, MoveSet};

use crate::bounds::Bounds;

/// A stored search record for one position (spec.md §3 "Entry").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The position's proof/disproof numbers as of the last `MID` call
    /// that visited it.
    pub bounds: Bounds,
    /// The candidate move set used to expand this position. Empty for
    /// terminal positions.
    pub children: MoveSet,
    /// The most-proving child at last visit. `Move::NONE` for terminals.
    pub best_move: Move,
}

struct Slot {
    tag: u64,
    entry: Entry,
}

/// Occupancy and hit/miss counters for reporting (spec.md §4.2, §4.6.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TtStats {
    pub capacity: u64,
    pub occupied: u64,
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
}

impl std::fmt::Display for TtStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pct = if self.capacity == 0 {
            0.0
        } else {
            100.0 * self.occupied as f64 / self.capacity as f64
        };
        write!(
            f,
            "TT: {}/{} slots occupied ({pct:.1}%), {} hits, {} misses, {} stores",
            self.occupied, self.capacity, self.hits, self.misses, self.stores
        )
    }
}

/// Fixed-capacity direct-mapped transposition table.
///
/// `get` never returns an entry tagged with a different hash; `put`
/// always succeeds, silently replacing whatever previously lived at that
/// slot. No ordering is promised between distinct hashes.
pub struct TranspositionTable {
    slots: Vec<Option<Slot>>,
    mask: u64,
    occupied: u64,
    hits: u64,
    misses: u64,
    stores: u64,
}

impl TranspositionTable {
    /// Create a table with `2^size_exp` slots.
    pub fn new(size_exp: u32) -> TranspositionTable {
        let capacity = 1usize << size_exp;
        TranspositionTable {
            slots: (0..capacity).map(|_| None).collect(),
            mask: (capacity - 1) as u64,
            occupied: 0,
            hits: 0,
            misses: 0,
            stores: 0,
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Look up `hash`. Returns `None` on a miss or a tag mismatch
    /// (behaving as "unvisited" either way).
    pub fn get(&mut self, hash: u64) -> Option<Entry> {
        let idx = (hash & self.mask) as usize;
        match &self.slots[idx] {
            Some(slot) if slot.tag == hash => {
                self.hits += 1;
                Some(slot.entry.clone())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert or overwrite the entry for `hash`. May silently evict
    /// whatever else was stored at the same slot.
    pub fn put(&mut self, hash: u64, entry: Entry) {
        let idx = (hash & self.mask) as usize;
        if self.slots[idx].is_none() {
            self.occupied += 1;
        }
        self.slots[idx] = Some(Slot { tag: hash, entry });
        self.stores += 1;
    }

    /// Drop all entries and reset occupancy, keeping hit/miss counters.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.occupied = 0;
    }

    /// Snapshot of occupancy and hit/miss counters.
    pub fn stats(&self) -> TtStats {
        TtStats {
            capacity: self.slots.len() as u64,
            occupied: self.occupied,
            hits: self.hits,
            misses: self.misses,
            stores: self.stores,
        }
    }
}
