//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::{Resolution, Stone};

use super::board_view::BoardView;
use super::session::{GameMode, Session};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            session: Session::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn card() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the top menu bar
    fn menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs engine, play Black)").clicked() {
                        self.session = Session::new(GameMode::PvE {
                            human_color: Stone::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs engine, play White)").clicked() {
                        self.session = Session::new(GameMode::PvE {
                            human_color: Stone::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (two players)").clicked() {
                        self.session = Session::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human_color } => format!(
                            "vs engine - you: {}",
                            if human_color == Stone::Black { "Black" } else { "White" }
                        ),
                        GameMode::PvP => "two players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.turn_card(ui);
                ui.add_space(10.0);
                self.timer_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.engine_card(ui);
                }

                if self.session.game.winner().is_some() || self.session.game.is_draw() {
                    ui.add_space(10.0);
                    self.game_over_card(ui);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.message_card(ui, &msg);
                }
            });
    }

    /// Render turn indicator card
    fn turn_card(&self, ui: &mut egui::Ui) {
        Self::card().show(ui, |ui| {
            let is_black = self.session.game.current_player() == Stone::Black;
            let (stone_char, color_name) = if is_black { ("●", "BLACK") } else { ("○", "WHITE") };

            ui.horizontal(|ui| {
                ui.label(RichText::new(stone_char).size(28.0).color(TEXT_PRIMARY));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));
                    let status = if self.session.engine_busy() {
                        ("engine thinking...", STATUS_BUSY)
                    } else if self.session.game.is_over() {
                        ("game over", WIN_HIGHLIGHT)
                    } else {
                        ("to move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.game.move_counter()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render timer card
    fn timer_card(&self, ui: &mut egui::Ui) {
        Self::card().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.engine_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .strong()
                        .color(STATUS_BUSY),
                );
            } else {
                let elapsed = self.session.clock.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.session.clock.last_engine_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last engine move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render engine diagnostics card
    fn engine_card(&self, ui: &mut egui::Ui) {
        Self::card().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(choice) = &self.session.last_choice {
                let resolution = match choice.resolution {
                    Resolution::CenterOpening => "opening (center)",
                    Resolution::ForcedReply => "forced reply",
                    Resolution::EarlyHeuristic => "early heuristic",
                    Resolution::ImmediateWin => "immediate win",
                    Resolution::Block => "block",
                    Resolution::Minimax => "minimax",
                };
                ui.label(RichText::new(resolution).size(12.0).strong().color(STATUS_OK));
                ui.label(
                    RichText::new(format!("score {}", choice.score))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{}ms", choice.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );

                let col = (b'A' + choice.pos.col) as char;
                let row = crate::BOARD_SIZE as u8 - choice.pos.row;
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> {col}{row}"))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            } else {
                ui.label(RichText::new("no move yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.session.game.winner() {
            Some(Stone::Black) => "● BLACK WINS",
            Some(Stone::White) => "○ WHITE WINS",
            _ => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn board_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                self.session.game.board(),
                self.session.game.current_player(),
                self.session.game.last_move(),
                self.session.game.winning_line(),
                self.session.game.is_over(),
            );

            if let Some(pos) = clicked {
                self.session.try_place(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn shortcuts(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.shortcuts(ctx);

        // Apply a finished engine move, then start thinking if it is the
        // engine's turn
        self.session.poll_engine();
        if self.session.engine_to_move() && !self.session.engine_busy() && !self.session.game.is_over()
        {
            self.session.spawn_engine();
        }

        self.menu_bar(ctx);
        self.side_panel(ctx);
        self.board_panel(ctx);

        if self.session.engine_busy() {
            ctx.request_repaint();
        }
    }
}
