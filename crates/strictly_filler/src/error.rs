//! Error types for the Filler engine.

use crate::types::{Color, Player};
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Error raised when a grid cannot be built or generated.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Rows or columns are zero, or the palette size is outside 3..=6.
    #[display(
        "Invalid dimensions: {}x{} grid with {} colors (need at least 1x1 and 3-6 colors)",
        rows,
        cols,
        num_colors
    )]
    InvalidDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// Requested palette size.
        num_colors: usize,
    },

    /// Explicit grid rows do not all have the same length.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    RaggedRows {
        /// Offending row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A palette index in fixture data does not name a color.
    #[display("Unknown color index {} at ({}, {})", index, row, col)]
    UnknownColorIndex {
        /// Cell row.
        row: usize,
        /// Cell column.
        col: usize,
        /// Offending index.
        index: usize,
    },

    /// Both players' home corners resolve to the same cell.
    #[display("Home corners overlap on a {}x{} grid", rows, cols)]
    HomeCornersOverlap {
        /// Grid rows.
        rows: usize,
        /// Grid columns.
        cols: usize,
    },

    /// Both home cells of a supplied grid have the same color.
    #[display("Both home cells are {}", color)]
    HomeColorsMatch {
        /// Shared color.
        color: Color,
    },

    /// A supplied grid uses a color outside the configured palette.
    #[display("Color {} at ({}, {}) is outside the palette", color, row, col)]
    ColorOutOfPalette {
        /// Cell row.
        row: usize,
        /// Cell column.
        col: usize,
        /// Offending color.
        color: Color,
    },

    /// Adjacency and home-corner constraints could not be met for a cell.
    #[display("Unsatisfiable grid constraints at ({}, {})", row, col)]
    UnsatisfiableGridConstraints {
        /// Cell row.
        row: usize,
        /// Cell column.
        col: usize,
    },
}

/// Error that can occur when validating or applying a move.
///
/// Every variant leaves the game state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The color is not in the player's legal set.
    #[display("Color {} is not a legal move for player {}", color, player)]
    IllegalColor {
        /// Player attempting the move.
        player: Player,
        /// Rejected color.
        color: Color,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not player {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any error produced by the engine.
#[derive(Debug, Clone, Display, Error, From)]
pub enum FillerError {
    /// Grid construction or generation failed.
    #[display("{}", _0)]
    Grid(GridError),
    /// A move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// Configuration could not be loaded.
    #[display("{}", _0)]
    Config(ConfigError),
}
