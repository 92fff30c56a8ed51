//! Command-line interface for the Othello GUI.

use clap::{Parser, ValueEnum};

use crate::ui::GameMode;
use crate::{Difficulty, Player};

/// Othello - play against the computer or a friend
#[derive(Parser, Debug)]
#[command(name = "othello")]
#[command(about = "Othello with a minimax/alpha-beta computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays
    #[arg(long, value_enum, default_value_t = Mode::Pve)]
    pub mode: Mode,

    /// Computer strength (vs computer only)
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Colour played by the human (vs computer only)
    #[arg(long, value_enum, default_value_t = Side::Dark)]
    pub human: Side,
}

/// Game modes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two humans on one screen
    Pvp,
    /// Human against the computer
    Pve,
}

/// Side chosen by the human
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Dark,
    Light,
}

impl From<Side> for Player {
    fn from(side: Side) -> Player {
        match side {
            Side::Dark => Player::Dark,
            Side::Light => Player::Light,
        }
    }
}

impl Cli {
    /// Session mode described by the arguments
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            Mode::Pvp => GameMode::PvP,
            Mode::Pve => GameMode::PvE {
                human: self.human.into(),
                difficulty: self.difficulty,
            },
        }
    }
}
