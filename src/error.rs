//! Error types shared by the rules engine and the game session.

use crate::board::{Player, Pos};

/// Reasons a move or an input can be rejected.
///
/// A rejected operation never changes the board or the turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum OthelloError {
    /// Coordinates outside the 8x8 grid.
    #[display("Coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// The target cell already holds a piece.
    #[display("Cell {_0} is already occupied")]
    Occupied(Pos),

    /// The placement closes no line of opponent pieces.
    #[display("{player} cannot play at {pos}")]
    IllegalMove { pos: Pos, player: Player },

    /// The game has already ended.
    #[display("Game is over")]
    GameOver,

    /// The side to move is not controlled by the caller.
    #[display("Not your turn")]
    NotYourTurn,

    /// The computer is still searching.
    #[display("AI is thinking")]
    AiThinking,

    /// Board text could not be parsed.
    #[display("Invalid board text: {_0}")]
    ParseBoard(String),
}

impl std::error::Error for OthelloError {}
