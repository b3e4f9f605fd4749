//! A small GTP-style command dispatcher driving the DFPN solver.
//!
//! Stands in for Benzene's GTP engine and `VCCommands`/playout-policy
//! registration (spec.md §1, out of scope beyond the commands needed to
//! drive `start_search`), the way `cesso-uci` stands in for a full UCI
//! stack around `cesso-engine`.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{parse_cell, parse_color, parse_command, Command};
pub use engine::GtpEngine;
pub use error::GtpError;
