//! Evaluation module for Othello positions
//!
//! The only evaluation is a coarse material count: who has more pieces.
//! Scores are from Light's point of view (Light maximizes).

pub mod heuristic;

pub use heuristic::{evaluate, Score};
