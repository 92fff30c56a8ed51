//! Othello GUI
//!
//! Play Othello against the computer or another player.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use othello::cli::Cli;
use othello::ui::OthelloApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mode = cli.game_mode();
    info!(?mode, "starting Othello");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(move |cc| Ok(Box::new(OthelloApp::new(cc, mode)))),
    )
}
