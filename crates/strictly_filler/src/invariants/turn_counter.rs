//! Turn counter invariant: one turn per accepted move.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: The turn counter equals the history length.
///
/// Rejected moves and skipped turns consume no turn.
pub struct TurnCounterInvariant;

impl Invariant<GameInProgress> for TurnCounterInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.turn() == game.history().len()
    }

    fn description() -> &'static str {
        "Turn counter equals number of accepted moves"
    }
}
