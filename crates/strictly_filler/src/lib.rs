//! Strictly Filler - type-safe rules engine for the Filler territory game
//!
//! Two players start from opposite corners of a colored grid. On each turn
//! a player recolors their territory; neighbouring cells of the new color
//! join it. The match ends when two or fewer colors remain and the larger
//! territory wins.
//!
//! # Architecture
//!
//! - **Grid**: immutable colored grid, generator and region lookup
//! - **Rules**: legal colors, repainting, scoring and end detection
//! - **Typestate**: `GameSetup` → `GameInProgress` → `GameFinished`
//! - **Contracts**: move preconditions, debug-build postconditions and
//!   invariants
//! - **AnyGame**: non-consuming wrapper for hosts that hold one value per match
//!
//! # Example
//!
//! ```no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_filler::{AnyGame, MatchConfig};
//!
//! # fn example() -> Result<(), strictly_filler::FillerError> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut game = AnyGame::create(MatchConfig::default(), &mut rng)?;
//! while let Some(color) = game.legal_colors().into_iter().next() {
//!     game = game.submit_move(color)?;
//! }
//! println!("{}", game.status_string());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod corner;
mod error;
mod generator;
mod grid;
mod invariants;
mod phases;
mod region;
mod rules;
mod types;
mod typestate;
mod wrapper;

// Crate-level exports - Core types
pub use action::Move;
pub use corner::{Corner, HomeCorners};
pub use grid::Grid;
pub use phases::Outcome;
pub use types::{Color, Coord, Player};

// Crate-level exports - Configuration
pub use config::{MIN_COLORS, MatchConfig};

// Crate-level exports - Errors
pub use error::{ConfigError, FillerError, GridError, MoveError};

// Crate-level exports - Grid generation and regions
pub use generator::{MAX_ATTEMPTS, generate, satisfies_constraints};
pub use region::{Region, find_region};

// Crate-level exports - Rules
pub use rules::{
    ControlMatrix, Score, apply_color, control_matrices, is_game_over, is_valid_move,
    legal_colors, score, winner,
};

// Crate-level exports - Typestate phases
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - Contracts and invariants
pub use contracts::{ColorIsLegal, Contract, LegalMove, MoveContract, PlayersTurn, TerritoryGrows};
pub use invariants::{
    DistinctHomesInvariant, FillerInvariants, HistoryReplaysInvariant, Invariant, InvariantSet,
    InvariantViolation, TurnCounterInvariant,
};

// Crate-level exports - Wrapper
pub use wrapper::AnyGame;
