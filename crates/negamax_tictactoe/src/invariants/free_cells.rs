//! Free cell invariant: each move consumes exactly one cell.

use super::{Invariant, MoveTransition};

/// Invariant: The number of free cells drops by exactly one per move.
pub struct FreeCellsInvariant;

impl Invariant<MoveTransition> for FreeCellsInvariant {
    fn holds(transition: &MoveTransition) -> bool {
        let free = |state: &crate::BoardState| state.squares().iter().filter(|s| s.is_empty()).count();
        free(transition.after()) + 1 == free(transition.before())
    }

    fn description() -> &'static str {
        "Each move takes exactly one free cell"
    }
}
