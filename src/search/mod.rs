//! Search module for the Othello AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning.

pub mod alphabeta;

pub use alphabeta::{minimax, Role, SearchResult, SearchStats, Searcher, SCORE_INF};
