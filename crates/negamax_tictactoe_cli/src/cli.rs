//! Command-line interface for negamax-tictactoe.

use crate::config::PlayerKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Play tic-tac-toe against a perfect negamax opponent
#[derive(Parser, Debug)]
#[command(name = "negamax-tictactoe")]
#[command(about = "Tic-tac-toe with a full-depth negamax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the terminal
    Play {
        /// Who plays Cross (moves first)
        #[arg(long, value_enum)]
        cross: Option<PlayerKind>,

        /// Who plays Circle
        #[arg(long, value_enum)]
        circle: Option<PlayerKind>,

        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the free cells before each prompt
        #[arg(long)]
        show_free_cells: bool,
    },

    /// Replay cells from the opening position and show the best move
    Analyze {
        /// Cells (0-8) played so far, Cross first
        cells: Vec<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
