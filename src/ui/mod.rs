//! GUI for The Fourth Protocol
//!
//! A native egui/eframe front end: setup window, board, reserve and AI debug panel.

mod app;
mod board_view;
mod game_state;
mod menu;
mod theme;

pub use app::FourthApp;
pub use game_state::{GameMode, GameState};
