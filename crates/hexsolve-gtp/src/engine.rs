//! A small, synchronous GTP-style command loop driving the DFPN solver.
//!
//! Unlike `cesso_uci::UciEngine` (which dispatches searches to a worker
//! thread so UCI commands can interrupt a running search), this loop is
//! single-threaded end to end: spec.md §5 makes the DFPN core itself
//! synchronous with no cancellation support, so there is nothing for a
//! second thread to buy here. Each command runs to completion before the
//! next line is read.

use std::io::{self, BufRead, Write};

use hexsolve_core::{Color, HexBoard, HexEvaluator, Position};
use hexsolve_engine::{format_gogui_gfx, start_search, SolverConfig};
use tracing::{debug, warn};

use crate::command::{parse_cell, parse_command, Command};
use crate::error::GtpError;

/// Default board size when the loop starts, before any `boardsize`
/// command — 11x11 is the standard tournament size for Hex.
const DEFAULT_SIZE: usize = 11;

/// The GTP-style engine: owns the board, the evaluator, and the solver
/// configuration, and dispatches parsed commands against them.
pub struct GtpEngine {
    board: HexBoard,
    evaluator: HexEvaluator,
    config: SolverConfig,
    /// When true, `dfpn-solve` emits a `gogui-gfx` line after every root
    /// child bound update (spec.md §6, surface 2), not just a final
    /// report.
    gfx: bool,
}

impl GtpEngine {
    /// Create an engine with the default board size and solver config.
    pub fn new() -> GtpEngine {
        GtpEngine {
            board: HexBoard::empty(DEFAULT_SIZE, Color::Black),
            evaluator: HexEvaluator,
            config: SolverConfig::default(),
            gfx: false,
        }
    }

    /// Toggle whether `dfpn-solve` prints live `gogui-gfx` progress.
    pub fn set_gfx(&mut self, gfx: bool) {
        self.gfx = gfx;
    }

    /// Read commands from `reader` until `quit` or end of input,
    /// printing GTP-style `= ...` / `? ...` responses to `writer`.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<(), GtpError> {
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => {
                    writeln!(writer, "= \n")?;
                    break;
                }
                Ok(cmd) => match self.dispatch(cmd) {
                    Ok(reply) => writeln!(writer, "= {reply}\n")?,
                    Err(e) => writeln!(writer, "? {e}\n")?,
                },
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(writer, "? {e}\n")?;
                }
            }
            writer.flush()?;
        }
        Ok(())
    }

    /// Execute one parsed command, returning the text that follows `= `.
    fn dispatch(&mut self, cmd: Command) -> Result<String, GtpError> {
        match cmd {
            Command::BoardSize(size) => {
                self.board = HexBoard::empty(size, Color::Black);
                Ok(String::new())
            }
            Command::ClearBoard => {
                self.board = HexBoard::empty(self.board.size(), Color::Black);
                Ok(String::new())
            }
            Command::ShowBoard => Ok(format!("\n{}", self.board)),
            Command::Play { color, cell } => {
                let mv = parse_cell(&cell, self.board.size())?;
                self.board.play(color, mv)?;
                Ok(String::new())
            }
            Command::DfpnSolve { color } => self.solve(color),
            Command::Quit => unreachable!("Quit is handled by run() before dispatch"),
            Command::Unknown(name) => {
                warn!(command = %name, "unknown command, ignoring");
                Ok(String::new())
            }
        }
    }

    fn solve(&mut self, color: Color) -> Result<String, GtpError> {
        let to_move = self.board.side_to_move();
        if color != to_move {
            return Err(GtpError::WrongSideToMove { requested: color, to_move });
        }
        let gfx = self.gfx;
        let mut hook = move |moves: &[hexsolve_core::Move], bounds: &[hexsolve_engine::Bounds]| {
            if gfx {
                print!("{}", format_gogui_gfx(moves, bounds));
                let _ = io::stdout().flush();
            }
        };
        let outcome = start_search(
            color,
            &mut self.board,
            &mut self.evaluator,
            &self.config,
            Some(&mut hook),
        )?;

        let pv_text = outcome
            .pv
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(format!(
            "winner {} phi {} delta {} pv {}",
            outcome.winner, outcome.root_bounds.phi, outcome.root_bounds.delta, pv_text
        ))
    }
}

impl Default for GtpEngine {
    fn default() -> GtpEngine {
        GtpEngine::new()
    }
}
