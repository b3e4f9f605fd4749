//! A minimal Hex board: play/undo, Zobrist hashing, and win detection.
//!
//! This is the `Position` collaborator's concrete implementation — kept
//! intentionally small per spec.md §1 ("the Hex board representation,
//! move mechanics, and hashing" are out of scope for the DFPN core
//! itself). It exists so the solver in `hexsolve-engine` has something
//! real to search, not as a showcase of Hex engine performance tricks
//! (no bitboards, no incremental connectivity — just enough to be
//! correct).

use std::fmt;

use crate::color::Color;
use crate::error::PositionError;
use crate::mv::Move;
use crate::position::Position;
use crate::zobrist::{COLOR_CELL, MAX_CELLS, SIDE_TO_MOVE};

/// A square Hex board of side length `size` (`size * size` cells).
#[derive(Clone)]
pub struct HexBoard {
    size: usize,
    cells: Vec<Option<Color>>,
    side_to_move: Color,
    hash: u64,
    play_stack: Vec<Move>,
}

impl HexBoard {
    /// Create an empty board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` exceeds [`MAX_CELLS`] (19x19).
    pub fn empty(size: usize, first_to_move: Color) -> HexBoard {
        assert!(
            size * size <= MAX_CELLS,
            "board of size {size} exceeds the maximum supported cell count"
        );
        let mut hash = 0u64;
        if first_to_move == Color::White {
            hash ^= SIDE_TO_MOVE;
        }
        HexBoard {
            size,
            cells: vec![None; size * size],
            side_to_move: first_to_move,
            hash,
            play_stack: Vec::new(),
        }
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Color occupying a cell, if any.
    #[inline]
    pub fn color_at(&self, mv: Move) -> Option<Color> {
        mv.index().and_then(|i| self.cells[i])
    }

    /// All empty cells, in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Move::new(i as u16))
    }

    fn row_col(&self, idx: usize) -> (usize, usize) {
        (idx / self.size, idx % self.size)
    }

    fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let (r, c) = self.row_col(idx);
        let n = self.size as isize;
        let r = r as isize;
        let c = c as isize;
        const DELTAS: [(isize, isize); 6] =
            [(-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0)];
        DELTAS.iter().filter_map(move |&(dr, dc)| {
            let (nr, nc) = (r + dr, c + dc);
            if (0..n).contains(&nr) && (0..n).contains(&nc) {
                Some((nr as usize) * self.size + nc as usize)
            } else {
                None
            }
        })
    }

    /// The winner, if the board shows a completed connection.
    ///
    /// Black wins by connecting the top row to the bottom row; White
    /// wins by connecting the left column to the right column. At most
    /// one side can have a connection on a legally-reached Hex board.
    pub fn winner(&self) -> Option<Color> {
        if self.connects(Color::Black) {
            Some(Color::Black)
        } else if self.connects(Color::White) {
            Some(Color::White)
        } else {
            None
        }
    }

    fn connects(&self, color: Color) -> bool {
        let n = self.size;
        let mut visited = vec![false; self.cells.len()];
        let mut stack: Vec<usize> = Vec::new();

        for start in 0..n {
            let idx = match color {
                Color::Black => start, // top row
                Color::White => start * n, // left column
            };
            if self.cells[idx] == Some(color) && !visited[idx] {
                visited[idx] = true;
                stack.push(idx);
            }
        }

        while let Some(idx) = stack.pop() {
            let (r, c) = self.row_col(idx);
            let reached_far_edge = match color {
                Color::Black => r == n - 1,
                Color::White => c == n - 1,
            };
            if reached_far_edge {
                return true;
            }
            for nb in self.neighbors(idx) {
                if !visited[nb] && self.cells[nb] == Some(color) {
                    visited[nb] = true;
                    stack.push(nb);
                }
            }
        }
        false
    }
}

impl Position for HexBoard {
    fn hash(&self) -> u64 {
        self.hash
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn play(&mut self, color: Color, mv: Move) -> Result<(), PositionError> {
        let idx = mv.index().expect("play called with Move::NONE");
        if self.cells[idx].is_some() {
            return Err(PositionError::CellOccupied { cell: mv });
        }
        self.cells[idx] = Some(color);
        self.hash ^= COLOR_CELL[color.index()][idx];
        self.hash ^= SIDE_TO_MOVE;
        self.side_to_move = color.opponent();
        self.play_stack.push(mv);
        Ok(())
    }

    fn undo(&mut self, mv: Move) -> Result<(), PositionError> {
        match self.play_stack.last().copied() {
            None => Err(PositionError::UndoWithEmptyStack { attempted: mv }),
            Some(last) if last != mv => {
                Err(PositionError::UndoMismatch { attempted: mv, expected: last })
            }
            Some(_) => {
                self.play_stack.pop();
                let idx = mv.index().expect("play stack never holds Move::NONE");
                let color = self.cells[idx].expect("undo target must be occupied");
                self.cells[idx] = None;
                self.hash ^= COLOR_CELL[color.index()][idx];
                self.hash ^= SIDE_TO_MOVE;
                self.side_to_move = color;
                Ok(())
            }
        }
    }
}

impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            write!(f, "{:>width$}", "", width = r)?;
            for c in 0..self.size {
                let ch = match self.cells[r * self.size + c] {
                    None => '.',
                    Some(Color::Black) => 'b',
                    Some(Color::White) => 'w',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
