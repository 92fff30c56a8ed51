//! Legal move generation
//!
//! A move is legal when the target cell is empty and at least one of the
//! eight rays from it runs over opponent pieces into one of the mover's own.

use crate::board::{Bitboard, Board, Player, Pos};

use super::flip::flip_mask;

/// Check whether `player` may play at `pos`.
///
/// Occupied cells are never legal. Coordinates are in range by
/// construction of [`Pos`]; raw input goes through [`Pos::try_new`] first.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, player: Player) -> bool {
    !flip_mask(board, pos, player).is_empty()
}

/// Mask of every legal cell for `player`
pub fn legal_move_mask(board: &Board, player: Player) -> Bitboard {
    let mut mask = Bitboard::new();
    for pos in board.empty_cells().iter_ones() {
        if is_legal(board, pos, player) {
            mask.set(pos);
        }
    }
    mask
}

/// Every legal move for `player` in row-major order.
///
/// The order matters: the search keeps the first of several equally good
/// moves, so ties resolve towards the top-left.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    board
        .empty_cells()
        .iter_ones()
        .filter(|&pos| is_legal(board, pos, player))
        .collect()
}

/// Check if `player` has any legal move (stops at the first one)
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .empty_cells()
        .iter_ones()
        .any(|pos| is_legal(board, pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves_dark() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Dark);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 3),
                Pos::new(3, 2),
                Pos::new(4, 5),
                Pos::new(5, 4)
            ]
        );
    }

    #[test]
    fn test_opening_moves_light() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::Light);
        assert_eq!(
            moves,
            vec![
                Pos::new(2, 4),
                Pos::new(3, 5),
                Pos::new(4, 2),
                Pos::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_occupied_is_never_legal() {
        let board = Board::new();
        for pos in [Pos::new(3, 3), Pos::new(3, 4), Pos::new(4, 3), Pos::new(4, 4)] {
            assert!(!is_legal(&board, pos, Player::Dark));
            assert!(!is_legal(&board, pos, Player::Light));
        }
    }

    #[test]
    fn test_mask_matches_list() {
        let board = Board::new();
        let mask = legal_move_mask(&board, Player::Dark);
        let from_mask: Vec<Pos> = mask.iter_ones().collect();
        assert_eq!(from_mask, legal_moves(&board, Player::Dark));
    }

    #[test]
    fn test_no_moves_on_empty_board() {
        let board = Board::empty();
        assert!(legal_moves(&board, Player::Dark).is_empty());
        assert!(!has_legal_move(&board, Player::Light));
    }

    #[test]
    fn test_single_color_board_has_no_moves() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Player::Light);
        board.place(Pos::new(4, 4), Player::Light);
        assert!(!has_legal_move(&board, Player::Dark));
        assert!(!has_legal_move(&board, Player::Light));
    }
}
