//! Computer player backed by the negamax search.

use super::Player;
use crate::config::PlayerKind;
use anyhow::Result;
use negamax_tictactoe::{BoardState, best_move};
use tracing::debug;

/// Plays the move chosen by [`best_move`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputerPlayer;

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new() -> Self {
        Self
    }
}

impl Player for ComputerPlayer {
    fn choose_move(&mut self, state: &BoardState) -> Result<Option<usize>> {
        let cell = best_move(state)?;
        debug!(cell, player = %state.current_player(), "Computer chose cell");
        Ok(Some(cell))
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
