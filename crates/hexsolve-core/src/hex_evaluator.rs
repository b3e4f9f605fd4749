//! `HexEvaluator` — the default, unpruned `Evaluator` for [`HexBoard`].
//!
//! Real Benzene-style solvers prune the candidate set with VC/mustplay
//! analysis (`VCCommands.cpp`, `EndgameUtil`) before handing it to DFPN;
//! that machinery is explicitly out of scope here (spec.md §1). This
//! evaluator does the minimum that satisfies the `Evaluator` contract:
//! every empty cell is a candidate move, and a position is terminal
//! exactly when one side has already connected its two edges.

use std::convert::Infallible;

use crate::board::HexBoard;
use crate::color::Color;
use crate::evaluator::{Classification, Evaluator};
use crate::moveset::MoveSet;

/// Unpruned terminal check + candidate set for [`HexBoard`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HexEvaluator;

impl Evaluator<HexBoard> for HexEvaluator {
    type Error = Infallible;

    fn classify(
        &mut self,
        position: &HexBoard,
        _color: Color,
    ) -> Result<Classification, Infallible> {
        if let Some(winner) = position.winner() {
            return Ok(Classification::Terminal(winner));
        }
        Ok(Classification::NonTerminal(
            position.empty_cells().collect::<MoveSet>(),
        ))
    }
}
