//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Flipping (lines of opponent pieces closed by the mover)
//! - Legal move generation in row-major order
//! - Piece tally, passes and end-of-game detection

pub mod flip;
pub mod legal;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{apply_move, execute_flips, flip_mask, get_flipped_positions};
pub use legal::{has_legal_move, is_legal, legal_move_mask, legal_moves};
pub use outcome::{count_pieces, is_terminal, must_pass, outcome, Outcome};
