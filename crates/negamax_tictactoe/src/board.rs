//! Board state: the 9 cells and whose turn it is.

use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::rules::{check_winner, is_full};
use crate::{Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Complete tic-tac-toe state.
///
/// A small `Copy` value: every copy is independent, so the search can
/// branch by value without any explicit cloning. Win and draw are
/// derived from the cells on every query and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Cells in row-major order (0-8).
    squares: [Square; CELLS],
    /// Player whose mark the next move places.
    to_move: Player,
}

impl BoardState {
    /// Creates the opening position: empty board, Cross to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
            to_move: Player::Cross,
        }
    }

    /// Creates a state from explicit cells and turn.
    ///
    /// No consistency check is made between the mark counts and the turn.
    pub fn from_squares(squares: [Square; CELLS], to_move: Player) -> Self {
        Self { squares, to_move }
    }

    /// Returns all cells.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Returns the cell at `cell`, or `None` when off the board.
    pub fn square(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Returns true if `cell` is on the board and unoccupied.
    pub fn is_free(&self, cell: usize) -> bool {
        matches!(self.square(cell), Some(Square::Empty))
    }

    /// Every unoccupied cell index, ascending. Empty when the board is full.
    pub fn free_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&cell| self.is_free(cell)).collect()
    }

    /// Unoccupied cells as named positions.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_free(pos.to_index()))
            .collect()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns true when it is Cross's turn.
    pub fn current_player_is_cross(&self) -> bool {
        self.to_move == Player::Cross
    }

    /// Returns true if any line is held by one player.
    pub fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the owner of a completed line.
    pub fn winner(&self) -> Option<Player> {
        check_winner(&self.squares)
    }

    /// Returns true while nobody has won and a free cell remains.
    pub fn is_running(&self) -> bool {
        !self.is_won() && !is_full(&self.squares)
    }

    /// Returns the result of a finished game, `None` while running.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(player) = self.winner() {
            Some(Outcome::Winner(player))
        } else if is_full(&self.squares) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns the successor state after the current player takes `cell`.
    ///
    /// `self` is never modified. The turn passes to the opponent only if
    /// the game is still running after the move, so the move that wins
    /// leaves the winner as the current player.
    ///
    /// Terminal boards are not rejected here; callers check
    /// [`is_running`](Self::is_running) before moving.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for `cell >= 9` and
    /// [`MoveError::Occupied`] when the cell is taken.
    pub fn apply_move(&self, cell: usize) -> Result<BoardState, MoveError> {
        MoveContract::pre(self, &cell)?;

        let mut next = *self;
        next.squares[cell] = Square::Occupied(self.to_move);
        if next.is_running() {
            next.to_move = self.to_move.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Takes `cell` for the current player in place.
    ///
    /// Returns `false` and leaves the state unchanged if the cell is
    /// occupied or out of range.
    pub fn try_move(&mut self, cell: usize) -> bool {
        match self.apply_move(cell) {
            Ok(next) => {
                *self = next;
                true
            }
            Err(error) => {
                debug!(cell, %error, "Move rejected");
                false
            }
        }
    }

    /// Renders the board as three lines of `x`, `o` and `.`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, square) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let state = BoardState::new();
        assert!(state.current_player_is_cross());
        assert!(state.is_running());
        assert!(!state.is_won());
        assert_eq!(state.free_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut state = BoardState::new();
        assert!(state.try_move(4));
        assert_eq!(state.square(4), Some(Square::Occupied(Player::Cross)));
        assert_eq!(state.current_player(), Player::Circle);
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let state = BoardState::new();
        let next = state.apply_move(0).unwrap();
        assert_eq!(state, BoardState::new());
        assert_eq!(next.square(0), Some(Square::Occupied(Player::Cross)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut state = BoardState::new();
        assert!(!state.try_move(9));
        assert!(!state.try_move(usize::MAX));
        assert_eq!(state.apply_move(42), Err(MoveError::OutOfRange(42)));
        assert_eq!(state, BoardState::new());
    }

    #[test]
    fn test_occupied_rejected() {
        let state = BoardState::new().apply_move(3).unwrap();
        assert_eq!(state.apply_move(3), Err(MoveError::Occupied(3)));
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let mut state = BoardState::new();
        for cell in [0, 3, 1, 4] {
            assert!(state.try_move(cell));
        }
        assert!(state.try_move(2));
        assert!(state.is_won());
        assert!(!state.is_running());
        assert_eq!(state.current_player(), Player::Cross);
        assert_eq!(state.outcome(), Some(Outcome::Winner(Player::Cross)));
    }

    #[test]
    fn test_render_mixed_board() {
        let mut state = BoardState::new();
        for cell in [0, 4, 8] {
            assert!(state.try_move(cell));
        }
        assert_eq!(state.render(), "x . .\n. o .\n. . x");
    }
}
