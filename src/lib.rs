//! Othello rules engine with a minimax/alpha-beta computer opponent
//!
//! Standard 8x8 Othello:
//! - Dark moves first from the four-piece centre opening
//! - A move must outflank at least one run of opponent pieces
//! - Every outflanked run, in all eight directions, is flipped
//! - A side with no legal move passes; when neither side can move the game ends
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Flipping, legal moves, passes and the final result
//! - [`eval`]: Position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer opponent integrating search and difficulty
//! - [`ui`]: egui front end and the game session it drives
//!
//! # Quick Start
//!
//! ```
//! use othello::rules::apply_move;
//! use othello::{AIEngine, Board, Difficulty, Player, Pos};
//!
//! let mut board = Board::new();
//! apply_move(&mut board, Pos::new(2, 3), Player::Dark).unwrap();
//!
//! // Computer answers as Light
//! let mut engine = AIEngine::from_difficulty(Difficulty::Easy);
//! if let Some(pos) = engine.get_move(&board, Player::Light) {
//!     apply_move(&mut board, pos, Player::Light).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, DIRECTIONS, TOTAL_CELLS};
pub use engine::{AIEngine, Difficulty, MoveResult};
pub use error::OthelloError;
