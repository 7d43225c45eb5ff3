//! Terminal front end for `negamax_tictactoe`.
//!
//! - **Play**: a turn-by-turn loop between human and computer players
//! - **Analyze**: replay a move list and report the search result
//! - **Config**: side assignment from a TOML file and command-line flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod game_loop;
pub mod players;

pub use analysis::{AnalysisReport, build_report, write_report};
pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig, PlayerKind};
pub use game_loop::GameLoop;
pub use players::{ComputerPlayer, HumanPlayer, LineInput, Player};
