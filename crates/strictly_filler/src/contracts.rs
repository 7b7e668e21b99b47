//! Contract-based validation for Filler moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use crate::action::Move;
use crate::error::MoveError;
use crate::invariants::{FillerInvariants, InvariantSet};
use crate::rules::{is_valid_move, score};
use crate::typestate::GameInProgress;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongPlayer` when the mover is not the player to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The color must be in the player's legal set.
pub struct ColorIsLegal;

impl ColorIsLegal {
    /// Fails with `IllegalColor` when the color is not legal.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if is_valid_move(mov.player, mov.color, game.grid(), game.config().homes()) {
            Ok(())
        } else {
            Err(MoveError::IllegalColor {
                player: mov.player,
                color: mov.color,
            })
        }
    }
}

/// Composite precondition: right player, legal color.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PlayersTurn::check(mov, game)?;
        ColorIsLegal::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: The mover's territory never shrinks.
pub struct TerritoryGrows;

impl TerritoryGrows {
    /// Compares the mover's controlled cells before and after the last move.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameInProgress, after: &GameInProgress) -> bool {
        let Some(last) = after.history().last() else {
            return true;
        };
        let homes = before.config().homes();
        let was = score(before.grid(), homes).of(last.player);
        let now = score(after.grid(), homes).of(last.player);
        if now < was {
            warn!(player = %last.player, was, now, "Territory shrank");
            return false;
        }
        true
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Must be player's turn
/// - Color must be legal
///
/// Postconditions:
/// - Mover's territory does not shrink
/// - Turn counter matches history
/// - History replays to the current grid
/// - Home colors stay distinct
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if !TerritoryGrows::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: mover's territory shrank".to_string(),
            ));
        }

        FillerInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
