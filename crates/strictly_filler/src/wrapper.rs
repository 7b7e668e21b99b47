//! Serializable match wrapper over the typestate phases.

use crate::action::Move;
use crate::config::MatchConfig;
use crate::error::{GridError, MoveError};
use crate::grid::Grid;
use crate::phases::Outcome;
use crate::rules::Score;
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use crate::types::{Color, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// A match in any phase.
///
/// Typestate phases can't be handled uniformly by a host holding one
/// value per match, so this enum wraps them. Every method takes `&self`:
/// a move returns the next match and leaves the current one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum AnyGame {
    /// Match in progress.
    InProgress(GameInProgress),
    /// Match finished.
    Finished(GameFinished),
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress(game)
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished(game)
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Creates and starts a match on a generated grid.
    ///
    /// # Errors
    ///
    /// Configuration or generation errors.
    #[instrument(skip(rng))]
    pub fn create<R: Rng + ?Sized>(config: MatchConfig, rng: &mut R) -> Result<Self, GridError> {
        Ok(GameSetup::new(config, rng)?.start().into())
    }

    /// Creates and starts a match on a caller-supplied grid.
    ///
    /// # Errors
    ///
    /// See [`GameSetup::from_grid`].
    #[instrument(skip(grid))]
    pub fn from_grid(config: MatchConfig, grid: Grid) -> Result<Self, GridError> {
        Ok(GameSetup::from_grid(config, grid)?.start().into())
    }

    /// Returns the current grid.
    pub fn grid(&self) -> &Grid {
        match self {
            AnyGame::InProgress(g) => g.grid(),
            AnyGame::Finished(g) => g.grid(),
        }
    }

    /// Returns the grid the match started from.
    pub fn initial_grid(&self) -> &Grid {
        match self {
            AnyGame::InProgress(g) => g.initial_grid(),
            AnyGame::Finished(g) => g.initial_grid(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        match self {
            AnyGame::InProgress(g) => g.config(),
            AnyGame::Finished(g) => g.config(),
        }
    }

    /// Number of accepted moves.
    pub fn turn(&self) -> usize {
        match self {
            AnyGame::InProgress(g) => g.turn(),
            AnyGame::Finished(g) => g.turn(),
        }
    }

    /// Returns the move history in order.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::InProgress(g) => g.history(),
            AnyGame::Finished(g) => g.history(),
        }
    }

    /// Returns the current player to move, if the match is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress(g) => Some(g.to_move()),
            AnyGame::Finished(_) => None,
        }
    }

    /// Legal colors for the player to move (empty once finished).
    pub fn legal_colors(&self) -> BTreeSet<Color> {
        match self {
            AnyGame::InProgress(g) => g.legal_colors(),
            AnyGame::Finished(_) => BTreeSet::new(),
        }
    }

    /// Returns true if the match is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished(_))
    }

    /// Returns the outcome, if the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyGame::InProgress(_) => None,
            AnyGame::Finished(g) => Some(*g.outcome()),
        }
    }

    /// Current controlled-cell counts.
    pub fn score(&self) -> Score {
        match self {
            AnyGame::InProgress(g) => g.score(),
            AnyGame::Finished(g) => g.score(),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::InProgress(g) => {
                format!("In progress. Player {} to move.", g.to_move())
            }
            AnyGame::Finished(g) => format!("Game over. {}!", g.outcome()),
        }
    }

    /// Submits `color` for the player to move and returns the next match.
    ///
    /// # Errors
    ///
    /// `GameOver` once finished, `IllegalColor` for a color outside the
    /// legal set. `self` is unchanged either way.
    #[instrument(skip(self), fields(turn = self.turn()))]
    pub fn submit_move(&self, color: Color) -> Result<Self, MoveError> {
        match self {
            AnyGame::InProgress(game) => {
                let next = game.clone().play(color)?;
                debug!("Move accepted");
                Ok(next.into())
            }
            AnyGame::Finished(_) => {
                warn!("Move submitted after match end");
                Err(MoveError::GameOver)
            }
        }
    }

    /// Returns the match as it was before the last move.
    ///
    /// `None` when no move has been made.
    #[instrument(skip(self))]
    pub fn undo(&self) -> Option<Self> {
        let previous = match self {
            AnyGame::InProgress(g) => g.undo(),
            AnyGame::Finished(g) => g.undo(),
        };
        previous.map(Into::into)
    }
}
