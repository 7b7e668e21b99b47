//! Match configuration.

use crate::corner::HomeCorners;
use crate::error::{ConfigError, GridError};
use crate::types::{Color, Player};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest palette that still leaves a legal move.
///
/// Both players' current colors are always excluded, so two colors
/// would never offer a choice.
pub const MIN_COLORS: usize = 3;

/// Configuration for one match.
///
/// Every field has a default, so a TOML file only needs to name the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchConfig {
    /// Grid rows.
    rows: usize,

    /// Grid columns.
    cols: usize,

    /// Palette size (the first `num_colors` colors are used).
    num_colors: usize,

    /// Player who makes the first move.
    first_player: Player,

    /// Home corner of each player.
    homes: HomeCorners,
}

impl MatchConfig {
    /// Default grid rows.
    pub const DEFAULT_ROWS: usize = 7;
    /// Default grid columns.
    pub const DEFAULT_COLS: usize = 8;

    /// Creates a configuration with the given size and default conventions.
    #[instrument]
    pub fn new(rows: usize, cols: usize, num_colors: usize) -> Self {
        Self {
            rows,
            cols,
            num_colors,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            rows = config.rows,
            cols = config.cols,
            num_colors = config.num_colors,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Checks dimensions, palette size and home corners.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` for an empty grid or a palette outside 3..=6,
    /// `HomeCornersOverlap` when both homes land on the same cell.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), GridError> {
        if self.rows == 0
            || self.cols == 0
            || self.num_colors < MIN_COLORS
            || self.num_colors > Color::COUNT
        {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                num_colors: self.num_colors,
            });
        }
        if !self.homes.are_distinct(self.rows, self.cols) {
            return Err(GridError::HomeCornersOverlap {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Colors available in this match.
    pub fn palette(&self) -> &'static [Color] {
        Color::palette(self.num_colors)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            num_colors: Color::COUNT,
            first_player: Player::A,
            homes: HomeCorners::default(),
        }
    }
}
