//! Connected same-color regions.

use crate::grid::Grid;
use crate::types::{Color, Coord};
use std::collections::VecDeque;
use tracing::instrument;

/// A maximal 4-connected set of same-colored cells.
///
/// Regions are derived from a grid on demand and never cached across moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    color: Color,
    rows: usize,
    cols: usize,
    cells: Vec<Coord>,
    members: Vec<bool>,
}

impl Region {
    /// Color shared by every cell of the region.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Cells in discovery (BFS) order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells in the region.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the region has no cells (only for out-of-bounds starts).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the coordinate belongs to the region.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows
            && coord.col < self.cols
            && self.members[coord.row * self.cols + coord.col]
    }
}

/// Finds the region containing `start`.
///
/// Breadth-first over 4-connected neighbours matching the start cell's
/// color, with a visited bitmap so each cell is enqueued at most once.
/// An out-of-bounds start yields an empty region colored like the grid's
/// first cell.
#[instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn find_region(grid: &Grid, start: Coord) -> Region {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut members = vec![false; rows * cols];
    let mut cells = Vec::new();

    let Some(color) = grid.get(start) else {
        return Region {
            color: grid.cells()[0],
            rows,
            cols,
            cells,
            members,
        };
    };

    let mut queue = VecDeque::from([start]);
    members[start.row * cols + start.col] = true;

    while let Some(coord) = queue.pop_front() {
        cells.push(coord);
        for next in coord.neighbors(rows, cols) {
            let idx = next.row * cols + next.col;
            if !members[idx] && grid.at(next) == color {
                members[idx] = true;
                queue.push_back(next);
            }
        }
    }

    Region {
        color,
        rows,
        cols,
        cells,
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_region() {
        let grid = Grid::from_indices(&[&[0, 1], &[1, 0]]).unwrap();
        let region = find_region(&grid, Coord::new(0, 0));
        assert_eq!(region.color(), Color::Red);
        assert_eq!(region.len(), 1);
        assert!(region.contains(Coord::new(0, 0)));
        assert!(!region.contains(Coord::new(1, 1)));
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let grid = Grid::from_indices(&[&[0, 1], &[1, 0]]).unwrap();
        let region = find_region(&grid, Coord::new(0, 1));
        assert_eq!(region.len(), 1);
    }

    #[test]
    fn test_snake_region() {
        let grid = Grid::from_indices(&[
            &[2, 2, 2],
            &[1, 1, 2],
            &[2, 2, 2],
        ])
        .unwrap();
        let region = find_region(&grid, Coord::new(0, 0));
        assert_eq!(region.color(), Color::Yellow);
        assert_eq!(region.len(), 7);
        assert!(region.contains(Coord::new(2, 0)));
        assert!(!region.contains(Coord::new(1, 0)));
        assert_eq!(region.cells()[0], Coord::new(0, 0));
    }

    #[test]
    fn test_whole_grid_region() {
        let grid = Grid::from_indices(&[&[3, 3], &[3, 3]]).unwrap();
        assert_eq!(find_region(&grid, Coord::new(1, 1)).len(), 4);
    }

    #[test]
    fn test_out_of_bounds_start() {
        let grid = Grid::from_indices(&[&[0, 1]]).unwrap();
        let region = find_region(&grid, Coord::new(5, 5));
        assert!(region.is_empty());
        assert!(!region.contains(Coord::new(5, 5)));
    }

    #[test]
    fn test_far_out_of_bounds_not_contained() {
        let grid = Grid::from_indices(&[&[0, 0], &[0, 0]]).unwrap();
        let region = find_region(&grid, Coord::new(0, 0));
        assert_eq!(region.len(), 4);
        assert!(!region.contains(Coord::new(usize::MAX, 0)));
        assert!(!region.contains(Coord::new(2, 0)));
        assert!(!region.contains(Coord::new(0, usize::MAX)));
    }
}
