//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Cross (moves first).
    Cross,
    /// Circle.
    Circle,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    /// Mark used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'x',
            Player::Circle => 'o',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if no player occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Rendering symbol: `x`, `o` or `.`.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled up without a completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player '{}' won", player),
            Outcome::Draw => write!(f, "The game is tied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Player::Cross.opponent(), Player::Circle);
        assert_eq!(Player::Circle.opponent().opponent(), Player::Circle);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Square::Empty.symbol(), '.');
        assert_eq!(Square::Occupied(Player::Cross).symbol(), 'x');
        assert_eq!(Square::Occupied(Player::Circle).symbol(), 'o');
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::Circle).to_string(), "Player 'Circle' won");
        assert_eq!(Outcome::Draw.to_string(), "The game is tied");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::Cross).winner(), Some(Player::Cross));
    }
}
