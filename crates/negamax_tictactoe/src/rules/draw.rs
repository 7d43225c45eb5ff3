//! Draw detection logic for tic-tac-toe.

use crate::Square;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(squares: &[Square; 9]) -> bool {
    squares.iter().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::Player;

    const X: Square = Square::Occupied(Player::Cross);
    const O: Square = Square::Occupied(Player::Circle);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&[E; 9]));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&[X, O, X, O, X, O, X, O, E]));
    }

    #[test]
    fn test_draw_detection() {
        // x o x / x o o / o x x
        let squares = [X, O, X, X, O, O, O, X, X];
        assert!(is_full(&squares));
        assert_eq!(check_winner(&squares), None);
    }

    #[test]
    fn test_full_board_with_winner() {
        // x x x / o o x / x o o
        let squares = [X, X, X, O, O, X, X, O, O];
        assert!(is_full(&squares));
        assert_eq!(check_winner(&squares), Some(Player::Cross));
    }
}
