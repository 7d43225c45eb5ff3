//! Human player reading moves from a line-based input.

use super::Player;
use crate::config::PlayerKind;
use anyhow::{Context, Result, bail};
use negamax_tictactoe::{BoardState, Position};
use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;
use tracing::debug;

/// Line source that several human players can read in turn.
pub type LineInput = Rc<RefCell<dyn BufRead>>;

/// Human player typing a cell number (0-8) or a cell label per line.
pub struct HumanPlayer {
    input: LineInput,
}

impl HumanPlayer {
    /// Creates a new human player reading from `input`.
    pub fn new(input: impl BufRead + 'static) -> Self {
        Self::sharing(Rc::new(RefCell::new(input)))
    }

    /// Creates a human player reading from an input shared with others.
    pub fn sharing(input: LineInput) -> Self {
        Self { input }
    }
}

impl Player for HumanPlayer {
    fn choose_move(&mut self, _state: &BoardState) -> Result<Option<usize>> {
        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .context("Failed to read move")?;
        if read == 0 {
            bail!("Input ended while waiting for a move");
        }

        let cell = Position::from_label_or_number(&line).map(Position::to_index);
        debug!(input = %line.trim(), ?cell, "Human entered move");
        Ok(cell)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
