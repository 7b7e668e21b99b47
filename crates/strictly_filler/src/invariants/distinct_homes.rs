//! Distinct homes invariant: the two home cells never share a color.

use super::Invariant;
use crate::typestate::GameInProgress;
use crate::types::Player;

/// Invariant: The players' home cells have different colors.
///
/// The generator guarantees it initially and no legal move picks the
/// opponent's color.
pub struct DistinctHomesInvariant;

impl Invariant<GameInProgress> for DistinctHomesInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let grid = game.grid();
        let homes = game.config().homes();
        let a = grid.get(homes.cell(Player::A, grid.rows(), grid.cols()));
        let b = grid.get(homes.cell(Player::B, grid.rows(), grid.cols()));
        a.is_some() && a != b
    }

    fn description() -> &'static str {
        "Home cells have different colors"
    }
}
