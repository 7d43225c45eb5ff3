//! Alternating turn invariant: Cross, Circle, Cross, ...

use super::{Invariant, MoveTransition};

/// Invariant: The turn passes to the opponent after every move that
/// leaves the game running.
///
/// The move that ends the game keeps the turn with the player who made
/// it, so a finished board still names the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveTransition> for AlternatingTurnInvariant {
    fn holds(transition: &MoveTransition) -> bool {
        let mover = transition.before().current_player();
        let expected = if transition.after().is_running() {
            mover.opponent()
        } else {
            mover
        };
        transition.after().current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns while the game is running"
    }
}
