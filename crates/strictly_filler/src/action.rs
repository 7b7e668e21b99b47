//! First-class move type.
//!
//! Moves are domain events, not side effects: a player's chosen color,
//! validated independently of execution and kept in the match history.

use crate::types::{Color, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in Filler: a player choosing a color for their territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The color chosen.
    pub color: Color,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, color: Color) -> Self {
        Self { player, color }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the chosen color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.color)
    }
}
