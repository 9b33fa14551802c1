//! Game rules for The Fourth Protocol
//!
//! - Piece movement (per-kind rule table)
//! - Win condition (K pieces in a row)

pub mod movement;
pub mod win;

// Re-exports for convenient access
pub use movement::{is_legal_destination, valid_moves, Directions, Rule};
pub use win::{has_run_at, has_won, winning_line, winning_line_at};
