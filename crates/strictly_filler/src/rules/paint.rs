//! Territory repainting.

use crate::corner::HomeCorners;
use crate::grid::Grid;
use crate::region::find_region;
use crate::types::{Color, Player};
use tracing::{debug, instrument};

/// Repaints `player`'s territory to `color`, returning a new grid.
///
/// Every cell connected to the home cell through the territory's current
/// color becomes `color`. Cells that already had `color` and touch the
/// territory are merged into it by the next region lookup. Choosing the
/// current color returns an equal copy. The input grid is never modified.
///
/// Legality is not checked here; `GameInProgress::make_move` validates the
/// move before calling.
#[instrument(skip(grid))]
pub fn apply_color(player: Player, color: Color, grid: &Grid, homes: &HomeCorners) -> Grid {
    let home = homes.cell(player, grid.rows(), grid.cols());
    let mut next = grid.clone();

    let region = find_region(grid, home);
    if region.color() == color {
        debug!("Color unchanged, returning copy");
        return next;
    }

    for cell in region.cells() {
        next.set(*cell, color);
    }
    debug!(repainted = region.len(), "Territory repainted");
    next
}
