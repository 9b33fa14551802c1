//! New-game setup window

use egui::{ComboBox, Context, RichText, Window};

use crate::board::Side;
use crate::{Difficulty, GameConfig, Strategy};

use super::game_state::GameMode;
use super::theme::TEXT_MUTED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModeChoice {
    PvP,
    PvAI,
    AiVsAi,
}

/// Choices made in the setup window
#[derive(Debug, Clone)]
pub struct Setup {
    pub config: GameConfig,
    pub mode: GameMode,
    pub strategies: [Strategy; 2],
}

/// Setup window state
pub struct SetupMenu {
    pub open: bool,
    mode: ModeChoice,
    human: Side,
    difficulty: Difficulty,
    strategies: [Strategy; 2],
}

impl SetupMenu {
    /// Pre-fill the window from the loaded config
    pub fn new(config: &GameConfig) -> Self {
        Self {
            open: true,
            mode: ModeChoice::PvAI,
            human: Side::Red,
            difficulty: config.difficulty,
            strategies: [config.strategy; 2],
        }
    }

    fn mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::PvP => GameMode::PvP,
            ModeChoice::PvAI => GameMode::PvAI { human: self.human },
            ModeChoice::AiVsAi => GameMode::AiVsAi,
        }
    }

    /// Show the window; returns the setup when the user starts a game.
    ///
    /// `base` supplies everything the window does not edit (roster, win
    /// length, explicit overrides).
    pub fn show(&mut self, ctx: &Context, base: &GameConfig) -> Option<Setup> {
        if !self.open {
            return None;
        }
        let mut start = false;
        let mut open = self.open;

        Window::new("New game")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new("MODE").size(10.0).color(TEXT_MUTED));
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.mode, ModeChoice::PvP, "Player vs Player");
                    ui.radio_value(&mut self.mode, ModeChoice::PvAI, "Player vs AI");
                    ui.radio_value(&mut self.mode, ModeChoice::AiVsAi, "AI vs AI");
                });
                if self.mode == ModeChoice::PvAI {
                    ui.horizontal(|ui| {
                        ui.label("Play as");
                        ui.radio_value(&mut self.human, Side::Red, "Red (first)");
                        ui.radio_value(&mut self.human, Side::Blue, "Blue");
                    });
                }
                ui.add_space(8.0);

                ui.label(RichText::new("DIFFICULTY").size(10.0).color(TEXT_MUTED));
                ui.horizontal(|ui| {
                    for difficulty in Difficulty::ALL {
                        let text = format!(
                            "{} ({}x{}, depth {})",
                            difficulty.label(),
                            difficulty.grid_size(),
                            difficulty.grid_size(),
                            difficulty.depth()
                        );
                        ui.radio_value(&mut self.difficulty, difficulty, text);
                    }
                });
                ui.add_space(8.0);

                if self.mode != ModeChoice::PvP {
                    ui.label(RichText::new("AI STRATEGY").size(10.0).color(TEXT_MUTED));
                    for side in Side::ALL {
                        if self.mode().is_ai(side) {
                            strategy_combo(ui, side, &mut self.strategies[side.index()]);
                        }
                    }
                    ui.add_space(8.0);
                }

                ui.vertical_centered(|ui| {
                    if ui.button(RichText::new("Start").strong()).clicked() {
                        start = true;
                    }
                });
            });

        self.open = open && !start;
        if !start {
            return None;
        }

        // A preset size only applies when the config does not pin one
        let config = GameConfig {
            difficulty: self.difficulty,
            ..base.clone()
        };
        Some(Setup {
            config,
            mode: self.mode(),
            strategies: self.strategies,
        })
    }
}

fn strategy_combo(ui: &mut egui::Ui, side: Side, strategy: &mut Strategy) {
    ui.horizontal(|ui| {
        ui.label(format!("{side}:"));
        ComboBox::from_id_salt(("strategy", side.index()))
            .selected_text(strategy.label())
            .show_ui(ui, |ui| {
                for option in Strategy::ALL {
                    ui.selectable_value(strategy, option, option.label());
                }
            });
    });
}
