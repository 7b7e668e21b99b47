//! Scoring and end-of-game detection.

use crate::corner::HomeCorners;
use crate::grid::Grid;
use crate::phases::Outcome;
use crate::region::find_region;
use crate::types::{Color, Coord, Player};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Per-cell territory marker for one player.
///
/// A controlled cell holds the player's color; every other cell holds
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlMatrix {
    player: Player,
    rows: usize,
    cols: usize,
    cells: Vec<Option<Color>>,
}

impl ControlMatrix {
    /// Player whose territory this matrix marks.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Marker at a coordinate (`None` when uncontrolled or out of bounds).
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if coord.row < self.rows && coord.col < self.cols {
            self.cells[coord.row * self.cols + coord.col]
        } else {
            None
        }
    }

    /// Returns true if the player controls the cell.
    pub fn is_controlled(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of controlled cells.
    pub fn controlled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Controlled-cell counts for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Cells controlled by player A.
    pub a: usize,
    /// Cells controlled by player B.
    pub b: usize,
}

impl Score {
    /// Count for one player.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    /// Higher count wins; equal counts tie.
    pub fn outcome(&self) -> Outcome {
        match self.a.cmp(&self.b) {
            Ordering::Greater => Outcome::Winner(Player::A),
            Ordering::Less => Outcome::Winner(Player::B),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A {} - {} B", self.a, self.b)
    }
}

fn control_matrix(player: Player, grid: &Grid, homes: &HomeCorners) -> ControlMatrix {
    let region = find_region(grid, homes.cell(player, grid.rows(), grid.cols()));
    let mut cells = vec![None; grid.len()];
    for coord in region.cells() {
        cells[coord.row * grid.cols() + coord.col] = Some(region.color());
    }
    ControlMatrix {
        player,
        rows: grid.rows(),
        cols: grid.cols(),
        cells,
    }
}

/// Computes each player's territory independently from their home cell.
#[instrument(skip(grid))]
pub fn control_matrices(grid: &Grid, homes: &HomeCorners) -> (ControlMatrix, ControlMatrix) {
    (
        control_matrix(Player::A, grid, homes),
        control_matrix(Player::B, grid, homes),
    )
}

/// Counts controlled cells per player.
#[instrument(skip(grid))]
pub fn score(grid: &Grid, homes: &HomeCorners) -> Score {
    let (a, b) = control_matrices(grid, homes);
    Score {
        a: a.controlled_count(),
        b: b.controlled_count(),
    }
}

/// True when at most two distinct colors remain on the grid.
///
/// With two colors left the territories partition the board and no move
/// can change control.
#[instrument(skip(grid))]
pub fn is_game_over(grid: &Grid) -> bool {
    grid.distinct_colors().len() <= 2
}

/// Outcome by score; equal counts are a tie.
#[instrument(skip(grid))]
pub fn winner(grid: &Grid, homes: &HomeCorners) -> Outcome {
    score(grid, homes).outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_colors_is_over() {
        let grid = Grid::from_indices(&[&[0, 1], &[1, 0]]).unwrap();
        assert!(is_game_over(&grid));
    }

    #[test]
    fn test_three_colors_is_not_over() {
        let grid = Grid::from_indices(&[&[0, 1], &[2, 0]]).unwrap();
        assert!(!is_game_over(&grid));
    }

    #[test]
    fn test_control_matrices_mark_territory() {
        let grid = Grid::from_indices(&[
            &[1, 2, 2],
            &[0, 3, 2],
            &[0, 0, 4],
        ])
        .unwrap();
        let (a, b) = control_matrices(&grid, &HomeCorners::default());
        assert_eq!(a.player(), Player::A);
        assert_eq!(a.controlled_count(), 3);
        assert_eq!(a.get(Coord::new(1, 0)), Some(Color::Red));
        assert!(!a.is_controlled(Coord::new(0, 0)));
        assert_eq!(b.controlled_count(), 3);
        assert!(b.is_controlled(Coord::new(1, 2)));
        assert_eq!(b.get(Coord::new(9, 9)), None);
    }

    #[test]
    fn test_equal_halves_tie() {
        let grid = Grid::from_indices(&[
            &[1, 1, 1, 1],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ])
        .unwrap();
        let homes = HomeCorners::default();
        assert_eq!(score(&grid, &homes), Score { a: 8, b: 8 });
        assert_eq!(winner(&grid, &homes), Outcome::Tie);
    }

    #[test]
    fn test_larger_territory_wins() {
        let grid = Grid::from_indices(&[&[0, 1, 1], &[0, 0, 1], &[0, 0, 0]]).unwrap();
        let homes = HomeCorners::default();
        assert_eq!(score(&grid, &homes), Score { a: 6, b: 3 });
        assert_eq!(winner(&grid, &homes), Outcome::Winner(Player::A));
    }
}
