//! Immutable colored grid.

use crate::error::GridError;
use crate::types::{Color, Coord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// A fixed-size grid of colors, stored row-major.
///
/// The public API never mutates a grid in place: operations that "change"
/// a grid return a new one, so earlier snapshots stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Builds a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` for an empty grid and
    /// `GridError::RaggedRows` when rows differ in length.
    #[instrument(skip(rows))]
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions {
                rows: height,
                cols: width,
                num_colors: 0,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Builds a grid from palette indices (fixture helper).
    ///
    /// # Errors
    ///
    /// Fails like [`Grid::from_rows`], or with `UnknownColorIndex` when an
    /// index is outside the full palette.
    #[instrument(skip(rows))]
    pub fn from_indices(rows: &[&[usize]]) -> Result<Self, GridError> {
        let colors = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &index)| {
                        Color::from_index(index).ok_or(GridError::UnknownColorIndex {
                            row: r,
                            col: c,
                            index,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(colors)
    }

    /// Assembles a grid from already-validated parts.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Color>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the coordinate lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Gets the color at a coordinate, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if self.contains(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Color at an in-bounds coordinate.
    pub(crate) fn at(&self, coord: Coord) -> Color {
        self.cells[self.index(coord)]
    }

    /// Sets a cell on an owned copy.
    pub(crate) fn set(&mut self, coord: Coord, color: Color) {
        let idx = self.index(coord);
        self.cells[idx] = color;
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Iterates over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Returns the set of colors present anywhere on the grid.
    pub fn distinct_colors(&self) -> BTreeSet<Color> {
        self.cells.iter().copied().collect()
    }

    /// Formats the grid as one line per row of color initials.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.rows * (self.cols * 2));
        for row in 0..self.rows {
            if row > 0 {
                result.push('\n');
            }
            for col in 0..self.cols {
                if col > 0 {
                    result.push(' ');
                }
                result.push(self.at(Coord::new(row, col)).initial());
            }
        }
        result
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }
}

/// Unchecked serialized form, validated on the way in.
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.rows == 0 || raw.cols == 0 || raw.cells.len() != raw.rows * raw.cols {
            return Err(GridError::InvalidDimensions {
                rows: raw.rows,
                cols: raw.cols,
                num_colors: 0,
            });
        }
        Ok(Self::from_cells(raw.rows, raw.cols, raw.cells))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
