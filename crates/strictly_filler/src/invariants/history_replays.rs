//! History replay invariant: the grid is exactly the history's result.

use super::Invariant;
use crate::rules::apply_color;
use crate::typestate::GameInProgress;

/// Invariant: Repainting the initial grid with every move in history
/// reproduces the current grid.
///
/// Grids only change through accepted moves.
pub struct HistoryReplaysInvariant;

impl Invariant<GameInProgress> for HistoryReplaysInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let homes = game.config().homes();
        let replayed = game
            .history()
            .iter()
            .fold(game.initial_grid().clone(), |grid, mov| {
                apply_color(mov.player, mov.color, &grid, homes)
            });
        replayed == *game.grid()
    }

    fn description() -> &'static str {
        "History replays to the current grid"
    }
}
