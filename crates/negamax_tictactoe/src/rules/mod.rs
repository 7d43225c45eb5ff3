//! Game rules for tic-tac-toe.
//!
//! Pure functions over the cell array. Rules are separated from board
//! storage so the board and the transition contracts share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
