//! Win detection logic for tic-tac-toe.

use crate::{Player, Position, Square};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns a full line, `None` otherwise.
/// Lines are scanned in table order; a board won by both players cannot
/// arise from legal play and is not treated specially.
pub fn check_winner(squares: &[Square; 9]) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = squares[a.to_index()];
        match sq {
            Square::Occupied(player)
                if sq == squares[b.to_index()] && sq == squares[c.to_index()] =>
            {
                Some(player)
            }
            _ => None,
        }
    })
}
