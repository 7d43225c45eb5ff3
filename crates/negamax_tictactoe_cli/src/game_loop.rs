//! Turn-by-turn game loop on a text terminal.

use crate::config::{PlayConfig, PlayerKind};
use crate::players::{ComputerPlayer, HumanPlayer, LineInput, Player};
use anyhow::{Result, bail};
use negamax_tictactoe::{BoardState, Player as Side};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{info, instrument, warn};

/// Drives one game between two players, writing prompts and boards to a
/// text output.
pub struct GameLoop {
    cross: Box<dyn Player>,
    circle: Box<dyn Player>,
    show_free_cells: bool,
}

impl GameLoop {
    /// Creates a loop from two players.
    pub fn new(cross: Box<dyn Player>, circle: Box<dyn Player>) -> Self {
        Self {
            cross,
            circle,
            show_free_cells: false,
        }
    }

    /// Builds the players named by `config`; humans share `input`.
    ///
    /// When both sides are human they read alternate lines of the same input.
    pub fn from_config(config: &PlayConfig, input: impl BufRead + 'static) -> Self {
        let input: LineInput = Rc::new(RefCell::new(input));
        let build = |kind: PlayerKind| -> Box<dyn Player> {
            match kind {
                PlayerKind::Computer => Box::new(ComputerPlayer::new()),
                PlayerKind::Human => Box::new(HumanPlayer::sharing(input.clone())),
            }
        };

        Self::new(build(*config.cross()), build(*config.circle()))
            .show_free_cells(*config.show_free_cells())
    }

    /// Enables printing the free cells before each prompt.
    pub fn show_free_cells(mut self, enabled: bool) -> Self {
        self.show_free_cells = enabled;
        self
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::Cross => self.cross.as_mut(),
            Side::Circle => self.circle.as_mut(),
        }
    }

    /// Plays a game from the opening position until it is won or tied.
    ///
    /// Returns the final board.
    ///
    /// # Errors
    ///
    /// Fails if writing fails, a human's input ends, or the computer
    /// produces a move the board rejects.
    #[instrument(skip_all)]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<BoardState> {
        let mut state = BoardState::new();
        info!("Game started");

        while state.is_running() {
            let side = state.current_player();
            if self.show_free_cells {
                let free: Vec<String> = state.free_cells().iter().map(|c| c.to_string()).collect();
                writeln!(out, "Free cells: {}", free.join(" "))?;
            }
            write!(out, "Turn for '{}' [0-8]: ", side)?;
            out.flush()?;

            let player = self.player_mut(side);
            loop {
                let choice = player.choose_move(&state)?;
                if player.kind() == PlayerKind::Computer
                    && let Some(cell) = choice
                {
                    writeln!(out, "{}", cell)?;
                }

                if let Some(cell) = choice
                    && state.try_move(cell)
                {
                    info!(%side, cell, "Move played");
                    break;
                }

                if player.kind() == PlayerKind::Computer {
                    bail!("Computer produced an illegal move {:?} for '{}'", choice, side);
                }
                warn!(%side, ?choice, "Invalid move");
                write!(out, "Invalid move! Try again [0-8]: ")?;
                out.flush()?;
            }

            writeln!(out, "{}", state)?;
        }

        writeln!(out, "Game over!")?;
        if state.is_won() {
            // The winning move leaves the turn with the winner.
            writeln!(out, "Player '{}' won", state.current_player())?;
            writeln!(out)?;
        } else {
            writeln!(out, "The game is tied")?;
        }
        info!(outcome = ?state.outcome(), "Game finished");

        Ok(state)
    }
}
