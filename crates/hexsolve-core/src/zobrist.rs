//! Zobrist hashing keys for Hex board deduplication.

/// Largest board this table supports (19x19, the largest Hex size played
/// in practice). `HexBoard` enforces this at construction.
pub const MAX_CELLS: usize = 19 * 19;

const SEED: u64 = 0x4845_585F_5a4f_4252; // "HEX_ZOBR"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Zobrist key for each (color, cell) pair. Indexed by `[color.index()][cell]`.
pub(crate) static COLOR_CELL: [[u64; MAX_CELLS]; 2] = {
    let mut table = [[0u64; MAX_CELLS]; 2];
    let mut state = SEED;
    let mut color = 0;
    while color < 2 {
        let mut cell = 0;
        while cell < MAX_CELLS {
            let (val, next) = xorshift64(state);
            table[color][cell] = val;
            state = next;
            cell += 1;
        }
        color += 1;
    }
    table
};

/// Zobrist key XORed when White is the side to move.
pub(crate) static SIDE_TO_MOVE: u64 = {
    let mut state = SEED;
    let mut i = 0;
    while i < 2 * MAX_CELLS {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};
