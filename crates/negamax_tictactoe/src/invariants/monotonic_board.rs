//! Monotonic board invariant: marks are never removed or changed.

use super::{Invariant, MoveTransition};
use crate::Square;

/// Invariant: Every occupied cell keeps its mark, and the move adds
/// exactly one mark belonging to the player who was to move.
pub struct MonotonicBoardInvariant;

impl Invariant<MoveTransition> for MonotonicBoardInvariant {
    fn holds(transition: &MoveTransition) -> bool {
        let mover = Square::Occupied(transition.before().current_player());
        let mut added = 0;

        for (before, after) in transition
            .before()
            .squares()
            .iter()
            .zip(transition.after().squares())
        {
            match (before, after) {
                (Square::Empty, Square::Empty) => {}
                (Square::Empty, placed) if *placed == mover => added += 1,
                (kept, now) if !kept.is_empty() && kept == now => {}
                _ => return false,
            }
        }

        added == 1
    }

    fn description() -> &'static str {
        "Board is monotonic (one new mark per move, none removed)"
    }
}
