//! Flip rules for Othello
//!
//! Placing a piece flips every run of opponent pieces that is closed off by
//! one of the mover's own pieces, in each of the eight directions.

use tracing::trace;

use crate::board::{Bitboard, Board, Player, Pos, DIRECTIONS};
use crate::error::OthelloError;

/// Opponent pieces on the ray from `pos` in direction `(dr, dc)` that a
/// placement by `player` would flip. Empty if the ray is not closed.
fn ray_flips(board: &Board, pos: Pos, player: Player, dr: i32, dc: i32) -> Bitboard {
    let own = board.pieces(player);
    let opp = board.pieces(player.opponent());
    let mut line = Bitboard::new();
    let mut cur = pos.offset(dr, dc);

    while let Some(p) = cur {
        if opp.get(p) {
            line.set(p);
        } else if own.get(p) {
            // Closed by our own piece; nothing to flip if the run is empty
            return line;
        } else {
            break;
        }
        cur = p.offset(dr, dc);
    }

    Bitboard::new()
}

/// All opponent pieces a placement at `pos` by `player` would flip.
///
/// Returns an empty mask when the cell is occupied or the move closes no
/// line, so an empty mask means the move is illegal.
pub fn flip_mask(board: &Board, pos: Pos, player: Player) -> Bitboard {
    if !board.is_empty(pos) {
        return Bitboard::new();
    }

    let mut flips = Bitboard::new();
    for &(dr, dc) in &DIRECTIONS {
        flips |= ray_flips(board, pos, player, dr, dc);
    }
    flips
}

/// Positions that would be flipped, in row-major order.
pub fn get_flipped_positions(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    flip_mask(board, pos, player).iter_ones().collect()
}

/// Place and flip without error reporting.
///
/// Returns the flipped mask. If it is empty the move was illegal and the
/// board is left untouched.
#[inline]
pub fn execute_flips(board: &mut Board, pos: Pos, player: Player) -> Bitboard {
    let flips = flip_mask(board, pos, player);
    if flips.is_empty() {
        return flips;
    }

    board.pieces_mut(player).set(pos);
    *board.pieces_mut(player) |= flips;
    let opp = board.pieces_mut(player.opponent());
    *opp = *opp & !flips;

    flips
}

/// Play `player` at `pos`, flipping every closed line.
///
/// This is the only way a game board changes after the opening. Occupied
/// cells and placements that flip nothing are rejected and the board is
/// left as it was.
///
/// # Returns
/// The flipped positions in row-major order.
///
/// # Example
///
/// ```
/// use othello::{rules::apply_move, Board, Player, Pos};
///
/// let mut board = Board::new();
/// let flipped = apply_move(&mut board, Pos::new(2, 3), Player::Dark).unwrap();
/// assert_eq!(flipped, vec![Pos::new(3, 3)]);
/// ```
pub fn apply_move(board: &mut Board, pos: Pos, player: Player) -> Result<Vec<Pos>, OthelloError> {
    if !board.is_empty(pos) {
        trace!(%pos, %player, "rejected: occupied");
        return Err(OthelloError::Occupied(pos));
    }

    let flips = execute_flips(board, pos, player);
    if flips.is_empty() {
        trace!(%pos, %player, "rejected: no line closed");
        return Err(OthelloError::IllegalMove { pos, player });
    }

    Ok(flips.iter_ones().collect())
}
