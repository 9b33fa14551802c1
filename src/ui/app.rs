//! Main application for the Fourth Protocol GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Phase;
use crate::{GameConfig, SearchType, Status};

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameMode, GameState};
use super::menu::SetupMenu;
use super::theme::*;

/// Main application
pub struct FourthApp {
    state: GameState,
    board_view: BoardView,
    setup: SetupMenu,
    /// Config loaded at startup; the setup window edits a copy
    base_config: GameConfig,
    show_debug: bool,
    show_hints: bool,
}

impl FourthApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let strategies = [config.strategy; 2];
        Self {
            state: GameState::new(config.clone(), GameMode::default(), strategies),
            board_view: BoardView::default(),
            setup: SetupMenu::new(&config),
            base_config: config,
            show_debug: true,
            show_hints: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game...").clicked() {
                        self.setup.open = true;
                        ui.close_menu();
                    }
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Debug Panel (D)");
                    ui.checkbox(&mut self.show_hints, "Move Hints");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.mode.label());
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

                if self.state.game.phase() == Phase::Placement && !self.state.game.is_over() {
                    self.render_reserve_card(ui);
                    ui.add_space(10.0);
                }

                if self.show_debug {
                    self.render_debug_card(ui);
                    ui.add_space(10.0);
                }

                if self.state.game.is_over() {
                    self.render_game_over_card(ui);
                    ui.add_space(10.0);
                }

                if let Some(msg) = self.state.message.clone() {
                    self.render_message_card(ui, &msg);
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
            ui.label(RichText::new("THE FOURTH PROTOCOL").size(18.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let game = &self.state.game;
            ui.label(
                RichText::new(format!(
                    "{}x{} board, {} in a row",
                    game.board().size(),
                    game.board().size(),
                    game.win_length()
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.game.side_to_move();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                let (fill, rim) = side_colors(side);
                ui.painter().circle_filled(rect.center(), 20.0, fill);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, rim));

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(side.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (text, color) = if self.state.game.is_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Waiting".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(text).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(RichText::new(self.state.status_text()).size(11.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!(
                    "Move #{}  ({:.0}s this turn)",
                    self.state.game.turn_count() + 1,
                    self.state.turn_elapsed().as_secs_f32()
                ))
                .size(11.0)
                .color(TEXT_MUTED),
            );
        });
    }

    /// Unplaced pieces of the side to move; click one to place it next
    fn render_reserve_card(&mut self, ui: &mut egui::Ui) {
        let side = self.state.game.side_to_move();
        let reserve: Vec<(usize, char, &'static str)> = self
            .state
            .game
            .board()
            .unplaced(side)
            .map(|(i, p)| (i, p.kind().glyph(), p.kind().name()))
            .collect();
        let clickable = self.state.is_human_turn();

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(format!("{} RESERVE", side.to_string().to_uppercase())).size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for (index, glyph, name) in reserve {
                    let selected = self.state.selected == Some(index);
                    let (rect, response) = ui.allocate_exact_size(Vec2::splat(40.0), egui::Sense::click());
                    if selected {
                        ui.painter().rect_filled(rect, CornerRadius::same(6), egui::Color32::from_rgb(70, 62, 30));
                    }
                    self.board_view.draw_piece(ui.painter(), rect.center(), side, glyph, 40.0);
                    let response = response.on_hover_text(name);
                    if clickable && response.clicked() {
                        self.state.select_reserve(index);
                    }
                }
            });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some((side, result)) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                let strategy = self.state.strategies[side.index()];
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        let kind = match result.search_type {
                            SearchType::ImmediateWin => "Immediate win",
                            SearchType::AlphaBeta => "Alpha-beta",
                            SearchType::RandomPlacement => "Random placement",
                            SearchType::NoMove => "No move",
                        };
                        ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_OK));
                        ui.label(RichText::new(format!("{side} / {}", strategy.label())).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                            ui.label(RichText::new(format!("{} moves", result.moves_considered)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(mv) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {mv}")).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, detail) = match self.state.game.status() {
            Status::Won { side, .. } => (format!("{} WINS!", side.to_string().to_uppercase()), format!("{} in a row", self.state.game.win_length())),
            Status::Drawn => ("DRAW".to_string(), "Neither side can move".to_string()),
            Status::InProgress => return,
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
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
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
            let hints = if self.show_hints {
                self.state.hint_targets()
            } else {
                Vec::new()
            };
            let winning_line = match self.state.game.status() {
                Status::Won { line, .. } => Some(line.clone()),
                _ => None,
            };
            let overlay = Overlay {
                selected: self.state.selected_pos(),
                hints: &hints,
                last_move: self.state.game.last_move().map(|(_, mv)| mv),
                winning_line: winning_line.as_deref(),
                interactive: self.state.is_human_turn() && !self.state.is_ai_thinking(),
            };

            let clicked = self.board_view.show(ui, self.state.game.board(), &overlay);
            if let Some(pos) = clicked {
                if let Err(msg) = self.state.handle_click(pos) {
                    tracing::debug!(%pos, %msg, "click rejected");
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.clear_selection();
            }
        });
    }

    fn start_new_game(&mut self, ctx: &Context) {
        if let Some(setup) = self.setup.show(ctx, &self.base_config) {
            tracing::info!(mode = ?setup.mode, difficulty = %setup.config.difficulty, "new game");
            self.state = GameState::new(setup.config, setup.mode, setup.strategies);
        }
    }
}

impl eframe::App for FourthApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.state.check_ai_result();

        if !self.setup.open && self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.start_new_game(ctx);

        // Keep polling the worker and the turn clock
        if self.state.is_ai_thinking() || self.state.is_ai_turn() {
            ctx.request_repaint();
        } else if !self.state.game.is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

