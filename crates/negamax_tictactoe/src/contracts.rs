//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} move {Q}. The precondition decides whether a move is legal; the
//! postcondition checks the transition invariants.

use crate::BoardState;
use crate::board::CELLS;
use crate::error::MoveError;
use crate::invariants::{InvariantSet, MoveInvariants, MoveTransition};
use tracing::warn;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The cell index is on the board.
pub struct CellInRange;

impl CellInRange {
    /// Rejects indices outside 0-8.
    pub fn check(cell: usize) -> Result<(), MoveError> {
        if cell < CELLS {
            Ok(())
        } else {
            Err(MoveError::OutOfRange(cell))
        }
    }
}

/// Precondition: The cell is unoccupied.
pub struct CellIsFree;

impl CellIsFree {
    /// Rejects occupied cells.
    pub fn check(state: &BoardState, cell: usize) -> Result<(), MoveError> {
        if state.is_free(cell) {
            Ok(())
        } else {
            Err(MoveError::Occupied(cell))
        }
    }
}

/// Contract for taking a cell.
///
/// Preconditions:
/// - Cell is in range
/// - Cell is free
///
/// Postconditions:
/// - Board remains monotonic
/// - Turn alternates while running
/// - Exactly one free cell consumed
pub struct MoveContract;

impl Contract<BoardState, usize> for MoveContract {
    fn pre(state: &BoardState, cell: &usize) -> Result<(), MoveError> {
        CellInRange::check(*cell)?;
        CellIsFree::check(state, *cell)
    }

    fn post(before: &BoardState, after: &BoardState) -> Result<(), MoveError> {
        MoveInvariants::check_all(&MoveTransition::new(*before, *after)).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
