//! Piece tally and end-of-game detection
//!
//! The game is over only when neither side can move. A side with no move
//! while the opponent still has one simply passes.

use crate::board::{Board, Player};

use super::legal::has_legal_move;

/// Final (or current) result of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub dark: u32,
    pub light: u32,
    /// Side with strictly more pieces; `None` on a tie
    pub winner: Option<Player>,
}

/// Count pieces as `(dark, light)`.
#[inline]
pub fn count_pieces(board: &Board) -> (u32, u32) {
    (board.count(Player::Dark), board.count(Player::Light))
}

/// True when neither player has a legal move.
///
/// A full board is terminal, but so is any position where both sides are
/// blocked.
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Player::Dark) && !has_legal_move(board, Player::Light)
}

/// True when `player` must pass: no move for them, but the opponent can play.
pub fn must_pass(board: &Board, player: Player) -> bool {
    !has_legal_move(board, player) && has_legal_move(board, player.opponent())
}

/// Tally the board and name the side ahead.
pub fn outcome(board: &Board) -> Outcome {
    let (dark, light) = count_pieces(board);
    let winner = match dark.cmp(&light) {
        std::cmp::Ordering::Greater => Some(Player::Dark),
        std::cmp::Ordering::Less => Some(Player::Light),
        std::cmp::Ordering::Equal => None,
    };
    Outcome {
        dark,
        light,
        winner,
    }
}
