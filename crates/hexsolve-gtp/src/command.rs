//! GTP-style command parsing.

use hexsolve_core::{Color, Move};

use crate::error::GtpError;

/// A parsed command line. `play`'s cell text is resolved to a [`Move`]
/// later, by [`crate::engine::GtpEngine`], since doing so requires
/// knowing the current board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `boardsize N` -- start a fresh empty NxN board.
    BoardSize(usize),
    /// `clear_board` -- reset the current board to empty, same size.
    ClearBoard,
    /// `play <color> <cell>` -- place a stone.
    Play { color: Color, cell: String },
    /// `showboard` -- print the current board.
    ShowBoard,
    /// `dfpn-solve <color>` -- run `start_search` and report the result.
    DfpnSolve { color: Color },
    /// `quit` -- exit the command loop.
    Quit,
    /// An unrecognized command (ignored, per GTP convention).
    Unknown(String),
}

/// Parse one line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, GtpError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "boardsize" => {
            let value = tokens.get(1).ok_or_else(|| GtpError::MissingArgument {
                command: "boardsize".to_string(),
            })?;
            let size: usize = value
                .parse()
                .map_err(|_| GtpError::InvalidBoardSize { value: value.to_string() })?;
            if size == 0 {
                return Err(GtpError::InvalidBoardSize { value: value.to_string() });
            }
            Ok(Command::BoardSize(size))
        }
        "clear_board" => Ok(Command::ClearBoard),
        "showboard" => Ok(Command::ShowBoard),
        "quit" => Ok(Command::Quit),
        "play" => {
            let color_tok = tokens.get(1).ok_or_else(|| GtpError::MissingArgument {
                command: "play".to_string(),
            })?;
            let cell_tok = tokens.get(2).ok_or_else(|| GtpError::MissingArgument {
                command: "play".to_string(),
            })?;
            let color = parse_color(color_tok)?;
            Ok(Command::Play { color, cell: cell_tok.to_string() })
        }
        "dfpn-solve" => {
            let color_tok = tokens.get(1).ok_or_else(|| GtpError::MissingArgument {
                command: "dfpn-solve".to_string(),
            })?;
            let color = parse_color(color_tok)?;
            Ok(Command::DfpnSolve { color })
        }
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// Parse a color token: `b`/`black` or `w`/`white`.
pub fn parse_color(token: &str) -> Result<Color, GtpError> {
    match token {
        "b" | "black" => Ok(Color::Black),
        "w" | "white" => Ok(Color::White),
        other => Err(GtpError::InvalidColor { value: other.to_string() }),
    }
}

/// Parse a cell reference in `<letter><number>` form (e.g. `a1`, `c10`)
/// against a board of the given `size`. Both the column letter and the
/// row number are 1-indexed in the textual form (`a1` is the top-left
/// cell) but 0-indexed in the returned [`Move`].
pub fn parse_cell(token: &str, size: usize) -> Result<Move, GtpError> {
    let invalid = || GtpError::InvalidCell { value: token.to_string() };
    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(invalid)?;
    if !letter.is_ascii_alphabetic() {
        return Err(invalid());
    }
    let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
    let rest: String = chars.collect();
    let row: usize = rest.parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }
    let row = row - 1;
    if col >= size || row >= size {
        return Err(invalid());
    }
    Ok(Move::new((row * size + col) as u16))
}
