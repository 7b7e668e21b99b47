//! Legal color computation.

use crate::corner::HomeCorners;
use crate::grid::Grid;
use crate::region::find_region;
use crate::types::{Color, Player};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the colors `player` may choose.
///
/// These are the colors of cells bordering the player's territory, minus
/// the player's own current color and the opponent's current color.
#[instrument(skip(grid))]
pub fn legal_colors(player: Player, grid: &Grid, homes: &HomeCorners) -> BTreeSet<Color> {
    let rows = grid.rows();
    let cols = grid.cols();
    let region = find_region(grid, homes.cell(player, rows, cols));
    let own = region.color();
    let opponent = grid.get(homes.cell(player.opponent(), rows, cols));

    region
        .cells()
        .iter()
        .flat_map(|cell| cell.neighbors(rows, cols))
        .filter(|n| !region.contains(*n))
        .map(|n| grid.at(n))
        .filter(|c| *c != own && Some(*c) != opponent)
        .collect()
}

/// Returns true if `color` is a legal choice for `player`.
#[instrument(skip(grid))]
pub fn is_valid_move(player: Player, color: Color, grid: &Grid, homes: &HomeCorners) -> bool {
    legal_colors(player, grid, homes).contains(&color)
}
