//! Board representation for Othello

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

use crate::error::OthelloError;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The eight compass directions used to scan rays from a placed piece.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Cell {
    #[display(".")]
    Empty,
    #[display("X")]
    Dark,
    #[display("O")]
    Light,
}

/// A side in the game. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Cell {
        match player {
            Player::Dark => Cell::Dark,
            Player::Light => Cell::Light,
        }
    }
}

impl Cell {
    /// The player owning this cell, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Dark => Some(Player::Dark),
            Cell::Light => Some(Player::Light),
            Cell::Empty => None,
        }
    }
}

/// Position on the board.
///
/// Fields are private: every `Pos` in existence is on the board, so the
/// row-major index never aliases another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Position from coordinates known to be on the board.
    ///
    /// Use [`Pos::try_new`] for coordinates coming from outside the engine.
    ///
    /// # Panics
    /// If `row` or `col` is 8 or more.
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "position ({row}, {col}) is off the board"
        );
        Self::raw(row, col)
    }

    /// Checked constructor for caller-supplied coordinates.
    pub fn try_new(row: i32, col: i32) -> Result<Self, OthelloError> {
        if Self::is_valid(row, col) {
            Ok(Self::raw(row as u8, col as u8))
        } else {
            Err(OthelloError::OutOfBounds { row, col })
        }
    }

    /// Callers have already range-checked.
    #[inline]
    const fn raw(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// # Panics
    /// If `idx` is not below [`TOTAL_CELLS`].
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < TOTAL_CELLS, "cell index {idx} is off the board");
        Self::raw((idx / BOARD_SIZE) as u8, (idx % BOARD_SIZE) as u8)
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step one cell in direction `(dr, dc)`; `None` when leaving the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        Self::is_valid(r, c).then(|| Self::raw(r as u8, c as u8))
    }

    /// All 64 positions in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

/// Standard notation: column letter a-h, row number 1-8 from the top.
impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
