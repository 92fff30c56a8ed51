//! GUI module for the Othello game
//!
//! This module provides a native Rust GUI using egui/eframe. Only
//! [`GameState`] talks to the engine; the rest is drawing and input.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::OthelloApp;
pub use game_state::{AiState, GameMode, GameState, TurnClock};
