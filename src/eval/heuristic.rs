//! Piece-count heuristic used at search leaves

use crate::board::{Board, Player};

/// Leaf scores, Light-positive
pub struct Score;

impl Score {
    pub const LIGHT_AHEAD: i32 = 1;
    pub const EVEN: i32 = 0;
    pub const DARK_AHEAD: i32 = -1;
}

/// Evaluate the board for the search.
///
/// Returns `+1` if Light has strictly more pieces, `-1` if Dark has
/// strictly more, `0` on a tie. No positional weighting: only the sign of
/// the material difference counts.
///
/// # Example
///
/// ```
/// use othello::{eval::evaluate, Board};
///
/// assert_eq!(evaluate(&Board::new()), 0);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let dark = board.count(Player::Dark);
    let light = board.count(Player::Light);

    match light.cmp(&dark) {
        std::cmp::Ordering::Greater => Score::LIGHT_AHEAD,
        std::cmp::Ordering::Less => Score::DARK_AHEAD,
        std::cmp::Ordering::Equal => Score::EVEN,
    }
}
