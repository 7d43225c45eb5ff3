//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, LineInput};

use crate::config::PlayerKind;
use anyhow::Result;
use negamax_tictactoe::BoardState;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the cell (0-8) to take, or `None` when the input could
    /// not be understood as a cell.
    fn choose_move(&mut self, state: &BoardState) -> Result<Option<usize>>;

    /// Returns which kind of controller this is.
    fn kind(&self) -> PlayerKind;
}
