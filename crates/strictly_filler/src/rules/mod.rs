//! Game rules for Filler.
//!
//! Pure functions over a grid and the players' home corners. Rules are
//! separated from match state so contracts and invariants can reuse them.

pub mod legal;
pub mod paint;
pub mod score;

pub use legal::{is_valid_move, legal_colors};
pub use paint::apply_color;
pub use score::{ControlMatrix, Score, control_matrices, is_game_over, score, winner};
