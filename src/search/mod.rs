//! Search module for The Fourth Protocol AI
//!
//! Contains:
//! - Move generation for both phases
//! - Minimax with alpha-beta pruning over a shared, backtracked board

pub mod minimax;
pub mod movegen;

pub use minimax::{
    find_immediate_win, SearchConfig, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH,
    WIN_SCORE,
};
pub use movegen::{generate_moves, phase_of};
