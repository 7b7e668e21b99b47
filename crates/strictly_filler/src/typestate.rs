//! Phase-specific typestate structs for Filler.
//!
//! Each phase is its own type with phase-specific fields. A `GameFinished`
//! always carries an outcome and has no move method, so finished matches
//! cannot accept moves.

use crate::action::Move;
use crate::config::MatchConfig;
use crate::contracts::{Contract, MoveContract};
use crate::error::{GridError, MoveError};
use crate::generator::generate;
use crate::grid::Grid;
use crate::phases::Outcome;
use crate::rules::{Score, apply_color, is_game_over, legal_colors, score};
use crate::types::{Color, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Match in setup phase: configuration and initial grid, no moves yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    config: MatchConfig,
    grid: Grid,
}

impl GameSetup {
    /// Creates a match with a freshly generated grid.
    ///
    /// # Errors
    ///
    /// Propagates configuration and generation errors from the generator.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(config: MatchConfig, rng: &mut R) -> Result<Self, GridError> {
        let grid = generate(&config, rng)?;
        Ok(Self { config, grid })
    }

    /// Creates a match from a caller-supplied grid.
    ///
    /// The grid must match the configured dimensions, use only palette
    /// colors, and give the two home cells different colors. Adjacent
    /// cells may share a color.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions`, `HomeCornersOverlap`, `ColorOutOfPalette` or
    /// `HomeColorsMatch`.
    #[instrument(skip(grid))]
    pub fn from_grid(config: MatchConfig, grid: Grid) -> Result<Self, GridError> {
        config.validate()?;
        if grid.rows() != *config.rows() || grid.cols() != *config.cols() {
            return Err(GridError::InvalidDimensions {
                rows: grid.rows(),
                cols: grid.cols(),
                num_colors: *config.num_colors(),
            });
        }

        let palette = config.palette();
        if let Some(coord) = grid.coords().find(|c| !palette.contains(&grid.at(*c))) {
            return Err(GridError::ColorOutOfPalette {
                row: coord.row,
                col: coord.col,
                color: grid.at(coord),
            });
        }

        let homes = config.homes();
        let home_a = homes.cell(Player::A, grid.rows(), grid.cols());
        let home_b = homes.cell(Player::B, grid.rows(), grid.cols());
        if grid.at(home_a) == grid.at(home_b) {
            return Err(GridError::HomeColorsMatch {
                color: grid.at(home_a),
            });
        }

        Ok(Self { config, grid })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Returns the initial grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Starts the match with the configured first player.
    ///
    /// A grid that already holds two or fewer colors starts finished.
    #[instrument(skip(self))]
    pub fn start(self) -> GameResult {
        let to_move = *self.config.first_player();
        info!(%to_move, "Match started");
        GameInProgress {
            initial: self.grid.clone(),
            grid: self.grid,
            config: self.config,
            to_move,
            turn: 0,
            history: Vec::new(),
        }
        .settle()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Match in progress: can accept moves.
///
/// Invariants:
/// - `turn` equals the history length
/// - replaying the history over the initial grid yields the current grid
/// - the two home cells never share a color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInProgress {
    pub(crate) config: MatchConfig,
    pub(crate) initial: Grid,
    pub(crate) grid: Grid,
    pub(crate) to_move: Player,
    pub(crate) turn: usize,
    pub(crate) history: Vec<Move>,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (player's turn, legal color)
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// `WrongPlayer` or `IllegalColor` when a precondition fails;
    /// `InvariantViolation` when a postcondition fails in a debug build.
    #[instrument(skip(self), fields(turn = self.turn, to_move = %self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        if let Err(e) = MoveContract::pre(&self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.grid = apply_color(action.player, action.color, &game.grid, game.config.homes());
        game.history.push(action);
        game.turn += 1;
        game.to_move = action.player.opponent();
        debug!(%action, turn = game.turn, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(game.settle())
    }

    /// Plays `color` for the player to move.
    ///
    /// # Errors
    ///
    /// See [`GameInProgress::make_move`].
    pub fn play(self, color: Color) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move, color);
        self.make_move(action)
    }

    /// Finishes the match if it is over, and skips a player left without
    /// a legal color.
    fn settle(mut self) -> GameResult {
        if is_game_over(&self.grid) {
            return GameResult::Finished(self.finish());
        }

        let homes = self.config.homes();
        if legal_colors(self.to_move, &self.grid, homes).is_empty() {
            let other = self.to_move.opponent();
            if legal_colors(other, &self.grid, homes).is_empty() {
                debug!("Neither player has a legal color");
                return GameResult::Finished(self.finish());
            }
            debug!(stalled = %self.to_move, "No legal color, turn passes");
            self.to_move = other;
        }

        GameResult::InProgress(self)
    }

    fn finish(self) -> GameFinished {
        let score = score(&self.grid, self.config.homes());
        let outcome = score.outcome();
        info!(%outcome, %score, turn = self.turn, "Match finished");
        GameFinished {
            config: self.config,
            initial: self.initial,
            grid: self.grid,
            turn: self.turn,
            history: self.history,
            score,
            outcome,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the grid the match started from.
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Number of accepted moves.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal colors for the player to move.
    #[instrument(skip(self))]
    pub fn legal_colors(&self) -> BTreeSet<Color> {
        legal_colors(self.to_move, &self.grid, self.config.homes())
    }

    /// Current controlled-cell counts.
    pub fn score(&self) -> Score {
        score(&self.grid, self.config.homes())
    }

    /// Returns the match as it was before the last move.
    ///
    /// `None` when no move has been made.
    #[instrument(skip(self))]
    pub fn undo(&self) -> Option<GameInProgress> {
        rewind(&self.config, &self.initial, &self.history)
    }

    /// Replays moves from a setup.
    ///
    /// # Errors
    ///
    /// The first move's error, or `GameOver` when moves remain after the
    /// match has finished.
    #[instrument(skip(setup, moves), fields(moves = moves.len()))]
    pub fn replay(setup: GameSetup, moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut result = setup.start();

        for action in moves {
            result = match result {
                GameResult::InProgress(game) => game.make_move(*action)?,
                GameResult::Finished(_) => return Err(MoveError::GameOver),
            };
        }

        Ok(result)
    }
}

/// Rebuilds the in-progress state preceding the last move of `history`.
fn rewind(config: &MatchConfig, initial: &Grid, history: &[Move]) -> Option<GameInProgress> {
    let (_, earlier) = history.split_last()?;
    let setup = GameSetup {
        config: config.clone(),
        grid: initial.clone(),
    };
    match GameInProgress::replay(setup, earlier) {
        Ok(GameResult::InProgress(game)) => Some(game),
        Ok(GameResult::Finished(_)) | Err(_) => {
            warn!("History prefix did not replay to an in-progress match");
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Match finished: outcome determined.
///
/// The outcome is always present, not `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    config: MatchConfig,
    initial: Grid,
    grid: Grid,
    turn: usize,
    history: Vec<Move>,
    score: Score,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the final score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the final grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the grid the match started from.
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Number of accepted moves.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the match as it was before the final move.
    #[instrument(skip(self))]
    pub fn undo(&self) -> Option<GameInProgress> {
        rewind(&self.config, &self.initial, &self.history)
    }

    /// Restarts with a new grid and the same configuration.
    ///
    /// # Errors
    ///
    /// Propagates generation errors.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Result<GameSetup, GridError> {
        GameSetup::new(self.config, rng)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of starting a match or making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Match continues.
    InProgress(GameInProgress),
    /// Match finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the in-progress match, if any.
    pub fn in_progress(self) -> Option<GameInProgress> {
        match self {
            GameResult::InProgress(game) => Some(game),
            GameResult::Finished(_) => None,
        }
    }

    /// Returns the finished match, if any.
    pub fn finished(self) -> Option<GameFinished> {
        match self {
            GameResult::InProgress(_) => None,
            GameResult::Finished(game) => Some(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(rows: &[&[usize]]) -> GameSetup {
        let grid = Grid::from_indices(rows).unwrap();
        let config = MatchConfig::new(grid.rows(), grid.cols(), 6);
        GameSetup::from_grid(config, grid).unwrap()
    }

    #[test]
    fn test_start_with_first_player() {
        let config = MatchConfig::default().with_first_player(Player::B);
        let game = GameSetup::new(config, &mut StdRng::seed_from_u64(5))
            .unwrap()
            .start()
            .in_progress()
            .unwrap();
        assert_eq!(game.to_move(), Player::B);
        assert_eq!(game.turn(), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_two_color_grid_starts_finished() {
        let finished = setup(&[&[0, 1], &[0, 1]]).start().finished().unwrap();
        assert_eq!(finished.turn(), 0);
        assert_eq!(finished.score(), Score { a: 2, b: 2 });
        assert!(finished.outcome().is_tie());
    }

    #[test]
    fn test_move_advances_turn() {
        let game = setup(&[&[0, 1, 5], &[3, 4, 0], &[2, 0, 1]])
            .start()
            .in_progress()
            .unwrap();
        let legal = game.legal_colors();
        assert!(legal.contains(&Color::Blue));

        let next = game.play(Color::Blue).unwrap().in_progress().unwrap();
        assert_eq!(next.turn(), 1);
        assert_eq!(next.to_move(), Player::B);
        assert_eq!(next.history(), &[Move::new(Player::A, Color::Blue)]);
        assert_eq!(next.grid().get(Coord::new(2, 0)), Some(Color::Blue));
        assert_eq!(next.score().a, 2);
    }

    #[test]
    fn test_illegal_color_rejected() {
        let game = setup(&[&[0, 1, 5], &[3, 4, 0], &[2, 0, 1]])
            .start()
            .in_progress()
            .unwrap();
        // Orange is B's color.
        let err = game.play(Color::Orange).unwrap_err();
        assert_eq!(
            err,
            MoveError::IllegalColor {
                player: Player::A,
                color: Color::Orange
            }
        );
    }

    #[test]
    fn test_wrong_player_rejected() {
        let game = setup(&[&[0, 1, 5], &[3, 4, 0], &[2, 0, 1]])
            .start()
            .in_progress()
            .unwrap();
        let err = game.make_move(Move::new(Player::B, Color::Red)).unwrap_err();
        assert_eq!(err, MoveError::WrongPlayer(Player::B));
    }

    #[test]
    fn test_undo_restores_previous_state() {
        let game = setup(&[&[0, 1, 5], &[3, 4, 0], &[2, 0, 1]])
            .start()
            .in_progress()
            .unwrap();
        assert!(game.undo().is_none());

        let next = game.clone().play(Color::Blue).unwrap().in_progress().unwrap();
        assert_eq!(next.undo(), Some(game));
    }

    #[test]
    fn test_stalled_player_is_skipped() {
        // Once A turns blue, B's only neighbours are blue, so B has no
        // legal color and A moves again.
        let game = setup(&[
            &[0, 3, 1],
            &[2, 4, 3],
            &[5, 3, 0],
        ])
        .start()
        .in_progress()
        .unwrap();
        assert_eq!(game.to_move(), Player::A);

        let next = game.play(Color::Blue).unwrap().in_progress().unwrap();
        assert_eq!(next.turn(), 1);
        assert_eq!(next.to_move(), Player::A);
        assert!(legal_colors(Player::B, next.grid(), next.config().homes()).is_empty());
        assert!(!next.legal_colors().is_empty());
    }

    #[test]
    fn test_replay_rejects_moves_after_finish() {
        let moves = [
            Move::new(Player::A, Color::Green),
            Move::new(Player::B, Color::Yellow),
        ];
        let result = GameInProgress::replay(setup(&[&[1, 0], &[2, 1]]), &moves);
        assert_eq!(result.unwrap_err(), MoveError::GameOver);
    }

    #[test]
    fn test_restart_keeps_config() {
        let finished = setup(&[&[0, 1], &[0, 1]]).start().finished().unwrap();
        let config = finished.config().clone();
        let setup = finished.restart(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(setup.config(), &config);
    }
}
