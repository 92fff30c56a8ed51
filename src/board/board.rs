//! Board structure

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::OthelloError;

/// Game board, one bitboard per side.
///
/// `Board` is `Copy`: the search takes a fresh value per node and never
/// touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Dark pieces
    pub dark: Bitboard,
    /// Light pieces
    pub light: Bitboard,
}

impl Board {
    /// Standard opening: d4/e5 Light, e4/d5 Dark.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Pos::new(3, 3), Player::Light);
        board.place(Pos::new(3, 4), Player::Dark);
        board.place(Pos::new(4, 3), Player::Dark);
        board.place(Pos::new(4, 4), Player::Light);
        board
    }

    /// Board with no pieces at all
    pub const fn empty() -> Self {
        Self {
            dark: Bitboard::new(),
            light: Bitboard::new(),
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.dark.get(pos) {
            Cell::Dark
        } else if self.light.get(pos) {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.dark.get(pos) && !self.light.get(pos)
    }

    /// Put a piece down without flipping anything.
    /// Game moves go through `rules::apply_move`.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        self.remove(pos);
        self.pieces_mut(player).set(pos);
    }

    /// Remove a piece
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.dark.clear(pos);
        self.light.clear(pos);
    }

    /// Bitboard for a side
    #[inline]
    pub fn pieces(&self, player: Player) -> Bitboard {
        match player {
            Player::Dark => self.dark,
            Player::Light => self.light,
        }
    }

    #[inline]
    pub fn pieces_mut(&mut self, player: Player) -> &mut Bitboard {
        match player {
            Player::Dark => &mut self.dark,
            Player::Light => &mut self.light,
        }
    }

    /// Number of pieces owned by `player`
    #[inline]
    pub fn count(&self, player: Player) -> u32 {
        self.pieces(player).count()
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.dark.count() + self.light.count()
    }

    /// Cells holding no piece
    #[inline]
    pub fn empty_cells(&self) -> Bitboard {
        !(self.dark | self.light)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.piece_count() as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight rows of `.`, `X` (Dark) and `O` (Light).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                write!(f, "{}", self.get(Pos::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Inverse of `Display`; whitespace is ignored.
impl FromStr for Board {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut idx = 0usize;

        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if idx >= TOTAL_CELLS {
                return Err(OthelloError::ParseBoard(format!(
                    "more than {TOTAL_CELLS} cells"
                )));
            }
            match ch {
                '.' => {}
                'X' | 'x' => board.place(Pos::from_index(idx), Player::Dark),
                'O' | 'o' => board.place(Pos::from_index(idx), Player::Light),
                other => {
                    return Err(OthelloError::ParseBoard(format!(
                        "unexpected character {other:?} at cell {idx}"
                    )))
                }
            }
            idx += 1;
        }

        if idx != TOTAL_CELLS {
            return Err(OthelloError::ParseBoard(format!(
                "expected {TOTAL_CELLS} cells, found {idx}"
            )));
        }
        Ok(board)
    }
}
