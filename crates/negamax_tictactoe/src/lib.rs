//! Tic-tac-toe game state and optimal play.
//!
//! # Architecture
//!
//! - **Board**: [`BoardState`], a `Copy` value holding the 9 cells and the
//!   player to move. Legality, move application, win/draw detection and
//!   rendering live here.
//! - **Search**: [`best_move`], a full-depth negamax that prefers nearer
//!   wins and later losses, breaking ties toward the lowest cell index.
//! - **Contracts**: every move is checked against its precondition, and in
//!   debug builds against the transition invariants as well.
//!
//! # Example
//!
//! ```
//! use negamax_tictactoe::{BoardState, best_move};
//!
//! let mut state = BoardState::new();
//! while state.is_running() {
//!     let cell = best_move(&state)?;
//!     assert!(state.try_move(cell));
//! }
//! // Perfect play from both sides is a draw.
//! assert!(!state.is_won());
//! # Ok::<(), negamax_tictactoe::SearchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod contracts;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

pub use board::{BoardState, CELLS};
pub use error::{MoveError, SearchError};
pub use position::Position;
pub use search::{Analysis, Evaluation, WIN_SCORE, analyze, best_move};
pub use types::{Outcome, Player, Square};
