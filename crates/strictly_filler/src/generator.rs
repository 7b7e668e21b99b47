//! Random initial grids under adjacency and home-corner constraints.

use crate::config::MatchConfig;
use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Color, Coord, Player};
use rand::Rng;
use tracing::{debug, instrument, warn};

/// Number of full fills attempted before generation gives up.
pub const MAX_ATTEMPTS: usize = 64;

/// Generates a random grid for the configuration.
///
/// Cells are filled row-major. Each cell avoids the colors of its left and
/// top neighbours, so no two 4-adjacent cells match. The two home cells
/// must also differ, so the later of the two also avoids the earlier one's
/// color. When a cell is left with no candidate the whole fill starts over,
/// up to [`MAX_ATTEMPTS`] times.
///
/// # Errors
///
/// Fails with the configuration's validation error, or with
/// `UnsatisfiableGridConstraints` naming the last blocked cell when every
/// attempt is exhausted.
#[instrument(skip(rng))]
pub fn generate<R: Rng + ?Sized>(config: &MatchConfig, rng: &mut R) -> Result<Grid, GridError> {
    config.validate()?;

    let mut blocked = Coord::new(0, 0);
    for attempt in 1..=MAX_ATTEMPTS {
        match fill(config, rng) {
            Ok(grid) => {
                debug!(attempt, "Grid generated");
                return Ok(grid);
            }
            Err(coord) => {
                debug!(attempt, %coord, "Fill blocked, restarting");
                blocked = coord;
            }
        }
    }

    warn!(%blocked, attempts = MAX_ATTEMPTS, "Grid constraints not met");
    Err(GridError::UnsatisfiableGridConstraints {
        row: blocked.row,
        col: blocked.col,
    })
}

/// One row-major fill; returns the cell that had no candidate on failure.
fn fill<R: Rng + ?Sized>(config: &MatchConfig, rng: &mut R) -> Result<Grid, Coord> {
    let rows = *config.rows();
    let cols = *config.cols();
    let palette = config.palette();
    let home_a = config.homes().cell(Player::A, rows, cols);
    let home_b = config.homes().cell(Player::B, rows, cols);
    let home_a_idx = home_a.row * cols + home_a.col;
    let home_b_idx = home_b.row * cols + home_b.col;

    let mut cells: Vec<Color> = Vec::with_capacity(rows * cols);
    let mut candidates: Vec<Color> = Vec::with_capacity(palette.len());

    for row in 0..rows {
        for col in 0..cols {
            let idx = row * cols + col;
            let left = (col > 0).then(|| cells[idx - 1]);
            let top = (row > 0).then(|| cells[idx - cols]);

            // The other home cell, if it has already been placed.
            let rival = if idx == home_a_idx && home_b_idx < idx {
                Some(cells[home_b_idx])
            } else if idx == home_b_idx && home_a_idx < idx {
                Some(cells[home_a_idx])
            } else {
                None
            };

            candidates.clear();
            candidates.extend(
                palette
                    .iter()
                    .copied()
                    .filter(|c| Some(*c) != left && Some(*c) != top && Some(*c) != rival),
            );
            if candidates.is_empty() {
                return Err(Coord::new(row, col));
            }
            cells.push(candidates[rng.random_range(0..candidates.len())]);
        }
    }

    Ok(Grid::from_cells(rows, cols, cells))
}

/// Checks the generator's output guarantees on any grid.
///
/// True when no two 4-adjacent cells share a color, every cell lies in the
/// configured palette, and the two home cells differ.
pub fn satisfies_constraints(grid: &Grid, config: &MatchConfig) -> bool {
    let palette = config.palette();
    let rows = grid.rows();
    let cols = grid.cols();

    let adjacency_ok = grid.coords().all(|coord| {
        let color = grid.at(coord);
        palette.contains(&color)
            && coord
                .neighbors(rows, cols)
                .all(|n: Coord| grid.at(n) != color)
    });

    let homes = config.homes();
    let home_a = homes.cell(Player::A, rows, cols);
    let home_b = homes.cell(Player::B, rows, cols);

    adjacency_ok && grid.get(home_a) != grid.get(home_b)
}
