//! Home corners binding each player to a starting cell.

use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A corner of the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Corner {
    /// Cell `(0, 0)`.
    TopLeft,
    /// Cell `(0, C-1)`.
    TopRight,
    /// Cell `(R-1, 0)`.
    BottomLeft,
    /// Cell `(R-1, C-1)`.
    BottomRight,
}

impl Corner {
    /// Resolves the corner to a cell of a `rows × cols` grid.
    ///
    /// Dimensions must be non-zero.
    #[instrument]
    pub fn coord(self, rows: usize, cols: usize) -> Coord {
        let last_row = rows.saturating_sub(1);
        let last_col = cols.saturating_sub(1);
        match self {
            Corner::TopLeft => Coord::new(0, 0),
            Corner::TopRight => Coord::new(0, last_col),
            Corner::BottomLeft => Coord::new(last_row, 0),
            Corner::BottomRight => Coord::new(last_row, last_col),
        }
    }
}

/// Which corner each player starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HomeCorners {
    /// Home corner of player A.
    pub a: Corner,
    /// Home corner of player B.
    pub b: Corner,
}

impl HomeCorners {
    /// Creates a new corner assignment.
    pub fn new(a: Corner, b: Corner) -> Self {
        Self { a, b }
    }

    /// Returns the home corner of a player.
    pub fn corner(&self, player: Player) -> Corner {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    /// Returns the home cell of a player on a `rows × cols` grid.
    pub fn cell(&self, player: Player, rows: usize, cols: usize) -> Coord {
        self.corner(player).coord(rows, cols)
    }

    /// Returns true if both homes resolve to distinct cells.
    pub fn are_distinct(&self, rows: usize, cols: usize) -> bool {
        self.cell(Player::A, rows, cols) != self.cell(Player::B, rows, cols)
    }
}

impl Default for HomeCorners {
    fn default() -> Self {
        Self {
            a: Corner::BottomLeft,
            b: Corner::TopRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_homes() {
        let homes = HomeCorners::default();
        assert_eq!(homes.cell(Player::A, 7, 8), Coord::new(6, 0));
        assert_eq!(homes.cell(Player::B, 7, 8), Coord::new(0, 7));
    }

    #[test]
    fn test_single_cell_grid_overlaps() {
        assert!(!HomeCorners::default().are_distinct(1, 1));
        assert!(HomeCorners::default().are_distinct(1, 2));
    }

    #[test]
    fn test_single_row_opposite_corners_overlap() {
        // Bottom-left and top-left are the same cell on one row.
        let homes = HomeCorners::new(Corner::BottomLeft, Corner::TopLeft);
        assert!(!homes.are_distinct(1, 5));
    }
}
