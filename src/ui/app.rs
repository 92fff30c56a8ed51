//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::rules::Outcome;
use crate::{Difficulty, Player};

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl OthelloApp {
    /// Create the app for the mode chosen on the command line
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        debug!(?mode, "new game requested");
        self.state = GameState::new(mode);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for difficulty in Difficulty::ALL {
                        for human in [Player::Dark, Player::Light] {
                            let label = format!("New Game (vs Computer, {difficulty}, you play {human})");
                            if ui.button(label).clicked() {
                                self.new_game(GameMode::PvE { human, difficulty });
                                ui.close_menu();
                            }
                        }
                    }
                    if ui.button("New Game (1 vs 1)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human, difficulty } => format!("vs Computer ({difficulty}) - You: {human}"),
                        GameMode::PvP => "1 vs 1".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (fill, name) = match self.state.current_turn {
                Player::Dark => (DARK_PIECE, "DARK"),
                Player::Light => (LIGHT_PIECE, "LIGHT"),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Computer to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 3.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(20.0).strong().color(color));
            } else {
                let elapsed = self.state.clock.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(16.0).color(TEXT_SECONDARY));
            }

            if let Some(took) = self.state.clock.last_human() {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last move: {:.1}s", took.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
            if let Some(ai_time) = self.state.clock.last_ai() {
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    /// Render the piece count card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let (dark, light) = self.state.score();
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").size(22.0).color(DARK_PIECE_HIGHLIGHT));
                ui.label(RichText::new(format!("{dark} - {light}")).size(28.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("○").size(22.0).color(LIGHT_PIECE));
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("↩ Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
                if self.state.mode == GameMode::PvP && ui.button("Hint").clicked() {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.label(RichText::new(format!("Depth {}  Score {}", result.depth, result.score)).size(11.0).color(TIMER_NORMAL));
                ui.label(
                    RichText::new(format!("{} nodes, {} cutoffs, {}ms", result.nodes, result.cutoffs, result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                if let Some(pos) = result.best_move {
                    ui.label(RichText::new(format!("→ {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            } else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &Outcome) {
        let headline = match result.winner {
            Some(Player::Dark) => "DARK WINS!".to_string(),
            Some(Player::Light) => "LIGHT WINS!".to_string(),
            None => "IT'S A TIE!".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("{} - {}", result.dark, result.light))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let legal_moves = if self.state.is_human_turn() {
                self.state.legal_moves()
            } else {
                Vec::new()
            };

            let overlay = BoardOverlay {
                current_turn: self.state.current_turn,
                legal_moves: &legal_moves,
                last_move: self.state.last_move,
                last_flipped: &self.state.last_flipped,
                suggested_move: self.state.suggested_move,
                game_over: self.state.game_over.is_some(),
            };

            let clicked = self.board_view.show(ui, &self.state.board, &overlay);

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Get hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the timer and AI status moving
        if self.state.is_ai_thinking() || self.state.game_over.is_none() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
