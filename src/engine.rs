//! AI engine facade
//!
//! Wraps the [`Searcher`] with the settings a player picks (difficulty depth,
//! strategy weights), times each search and reports how the move was found:
//!
//! 1. **Immediate win**: a move that completes a run right away
//! 2. **Random placement**: optional seeded placement override
//! 3. **Alpha-beta**: regular minimax search
//!
//! # Example
//!
//! ```
//! use fourth::{AIEngine, AiConfig, Board, Phase, Pos, Side, DEFAULT_ROSTER};
//!
//! let mut engine = AIEngine::with_config(&AiConfig { depth: 2, ..AiConfig::default() });
//! let mut board = Board::new(5, &DEFAULT_ROSTER);
//! board.place(Side::Red, 0, Pos::new(2, 2)).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Side::Blue, Phase::Placement);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Move, Phase, Side, DEFAULT_WIN_LENGTH};
use crate::eval::{CenterBonus, Strategy};
use crate::search::{
    find_immediate_win, generate_moves, SearchConfig, SearchResult, Searcher, DEFAULT_DEPTH,
    WIN_SCORE,
};

/// How the engine arrived at its move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// A root move wins on the spot
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Placement drawn at random
    RandomPlacement,
    /// The side has no legal move
    NoMove,
}

/// Result of a move search with statistics for the debug panel.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub search_type: SearchType,
    /// Wall-clock time in milliseconds
    pub time_ms: u64,
    pub nodes: u64,
    /// Root candidates examined
    pub moves_considered: usize,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        let search_type = match (result.best_move, result.immediate_win) {
            (None, _) => SearchType::NoMove,
            (Some(_), true) => SearchType::ImmediateWin,
            (Some(_), false) => SearchType::AlphaBeta,
        };
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.stats.nodes,
            moves_considered: result.moves_considered,
        }
    }
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    /// Search depth in plies
    pub depth: u32,
    pub win_length: usize,
    pub strategy: Strategy,
    pub center_bonus: CenterBonus,
    /// Seed for random placements; `None` searches placements normally
    pub random_placement: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            win_length: DEFAULT_WIN_LENGTH,
            strategy: Strategy::default(),
            center_bonus: CenterBonus::default(),
            random_placement: None,
        }
    }
}

impl AiConfig {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            win_length: self.win_length,
            win_score: WIN_SCORE,
            weights: self.strategy.weights().with_center_bonus(self.center_bonus),
            alpha_beta: true,
        }
    }
}

/// Computer opponent.
pub struct AIEngine {
    searcher: Searcher,
    config: AiConfig,
    rng: Option<StdRng>,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Medium difficulty, balanced strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&AiConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &AiConfig) -> Self {
        Self {
            searcher: Searcher::new(config.search_config()),
            config: *config,
            rng: config.random_placement.map(StdRng::seed_from_u64),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Get the best move for the given position.
    ///
    /// Use [`AIEngine::get_move_with_stats`] if you need search statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side, phase: Phase) -> Option<Move> {
        self.get_move_with_stats(board, side, phase).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// The search runs on a clone of `board`.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side, phase: Phase) -> MoveResult {
        let start = Instant::now();
        let mut work = board.clone();

        let result = match (phase, self.rng.as_mut()) {
            (Phase::Placement, Some(rng)) => {
                random_placement(&mut work, side, self.config.win_length, self.config.depth, rng)
            }
            _ => {
                let result = self
                    .searcher
                    .find_best_move(&mut work, side, phase, self.config.depth);
                MoveResult::from_search(result, 0)
            }
        };
        let result = MoveResult {
            time_ms: start.elapsed().as_millis() as u64,
            ..result
        };

        tracing::debug!(
            side = %side,
            %phase,
            depth = self.config.depth,
            strategy = %self.config.strategy,
            search_type = ?result.search_type,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "search finished"
        );
        result
    }
}

/// Immediate win if there is one, otherwise a uniformly drawn placement.
fn random_placement(
    board: &mut Board,
    side: Side,
    win_length: usize,
    depth: u32,
    rng: &mut StdRng,
) -> MoveResult {
    let moves = generate_moves(board, side, Phase::Placement);
    if moves.is_empty() {
        return MoveResult {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms: 0,
            nodes: 0,
            moves_considered: 0,
        };
    }
    if let Some((index, mv)) = find_immediate_win(board, side, &moves, win_length) {
        return MoveResult {
            best_move: Some(mv),
            score: WIN_SCORE + depth.max(1) as i32,
            search_type: SearchType::ImmediateWin,
            time_ms: 0,
            nodes: 0,
            moves_considered: index + 1,
        };
    }
    let mv = moves[rng.random_range(0..moves.len())];
    MoveResult {
        best_move: Some(mv),
        score: 0,
        search_type: SearchType::RandomPlacement,
        time_ms: 0,
        nodes: 0,
        moves_considered: moves.len(),
    }
}
