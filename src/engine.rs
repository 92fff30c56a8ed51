//! Computer opponent built on the alpha-beta search
//!
//! The engine picks a search depth from a difficulty level, runs the search
//! for the side to move and reports the chosen move with timing and node
//! counts.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, Difficulty, Player};
//!
//! let mut engine = AIEngine::from_difficulty(Difficulty::Easy);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::Dark);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{info, instrument};

use crate::board::{Board, Player, Pos};
use crate::rules::has_legal_move;
use crate::search::{Searcher, SearchStats};

/// Strength of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies
    pub fn depth(self) -> i8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 3,
            Difficulty::Hard => 5,
        }
    }

    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` only when the side to move has no move
    pub best_move: Option<Pos>,
    /// Evaluation after best play to `depth` (Light-positive)
    pub score: i32,
    /// Depth searched
    pub depth: i8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
}

impl MoveResult {
    /// Result for a side that has to pass
    #[inline]
    fn pass(score: i32) -> Self {
        Self {
            best_move: None,
            score,
            depth: 0,
            time_ms: 0,
            nodes: 0,
            cutoffs: 0,
        }
    }
}

/// Computer opponent.
///
/// Holds only configuration: every call searches from scratch.
pub struct AIEngine {
    searcher: Searcher,
    max_depth: i8,
}

impl AIEngine {
    /// Engine at [`Difficulty::Medium`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_difficulty(Difficulty::default())
    }

    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_depth(difficulty.depth())
    }

    /// Engine with an explicit search depth (clamped to at least 1).
    #[must_use]
    pub fn with_depth(max_depth: i8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Get the best move for `player`, or `None` if they must pass.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// The search is only started when `player` has a legal move, so a
    /// returned `best_move` of `None` always means a pass.
    #[must_use]
    #[instrument(skip(self, board), fields(depth = self.max_depth))]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        if !has_legal_move(board, player) {
            info!(%player, "no legal move, passing");
            return MoveResult::pass(crate::eval::evaluate(board));
        }

        let start = Instant::now();
        let result = self.searcher.search(board, player, self.max_depth);
        let SearchStats { nodes, cutoffs, .. } = self.searcher.stats();
        let time_ms = start.elapsed().as_millis() as u64;

        if let Some(pos) = result.best_move {
            info!(%player, %pos, score = result.score, nodes, cutoffs, time_ms, "move chosen");
        }

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth: self.max_depth,
            time_ms,
            nodes,
            cutoffs,
        }
    }

    pub fn set_max_depth(&mut self, depth: i8) {
        self.max_depth = depth.max(1);
    }

    pub fn max_depth(&self) -> i8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
