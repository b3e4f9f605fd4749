//! GTP protocol errors.

use thiserror::Error;

use hexsolve_core::Color;

/// Errors that can occur while parsing or dispatching a GTP-style command
/// line (spec.md §6 "Progress/GUI hook" surface and §1's "command
/// dispatcher", here reduced to the handful of commands needed to drive
/// `start_search`).
#[derive(Debug, Error)]
pub enum GtpError {
    /// A command is missing a required argument.
    #[error("missing argument for command: {command}")]
    MissingArgument {
        /// The command that was short an argument.
        command: String,
    },

    /// A `boardsize` argument did not parse as a positive integer.
    #[error("invalid board size: {value}")]
    InvalidBoardSize {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A color argument was neither `b`/`black` nor `w`/`white`.
    #[error("invalid color: {value}")]
    InvalidColor {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A cell argument did not parse as `<letter><number>` within the
    /// current board's bounds.
    #[error("invalid cell: {value}")]
    InvalidCell {
        /// The raw value that failed to parse.
        value: String,
    },

    /// `play`/`dfpn-solve` was issued against an occupied cell or before
    /// `boardsize`/`clear_board` established a board.
    #[error("board error: {0}")]
    Board(#[from] hexsolve_core::PositionError),

    /// `dfpn-solve <color>` named a side that is not actually to move on
    /// the current board. `start_search`'s `winner` field is derived from
    /// the requested `color`, not the board's own `side_to_move()`, so
    /// trusting a mismatched request would silently report the reversed
    /// winner.
    #[error("dfpn-solve requested side {requested} but {to_move} is to move")]
    WrongSideToMove {
        /// The side the command asked to solve for.
        requested: Color,
        /// The side actually to move on the current board.
        to_move: Color,
    },

    /// `dfpn-solve` hit a DFPN invariant violation or a position/evaluator
    /// error while searching. `HexEvaluator`'s error type is `Infallible`,
    /// so in practice only the invariant and position variants occur.
    #[error("solver error: {0}")]
    Solver(#[from] hexsolve_engine::SolverError<std::convert::Infallible>),

    /// An I/O error occurred while reading from stdin or writing to
    /// stdout.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
