//! Minimax search with alpha-beta pruning
//!
//! The searcher owns no board. It borrows the caller's board mutably for one
//! top-level call, applies each candidate in place through
//! [`Board::scoped`](crate::board::Board::scoped) and lets the guard undo it,
//! so the board is unchanged when [`Searcher::find_best_move`] returns.
//!
//! # Example
//!
//! ```
//! use fourth::board::{Board, Phase, Side, DEFAULT_ROSTER};
//! use fourth::search::Searcher;
//!
//! let mut board = Board::new(4, &DEFAULT_ROSTER[..2]);
//! let mut searcher = Searcher::default();
//!
//! let result = searcher.find_best_move(&mut board, Side::Red, Phase::Placement, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Move, Phase, Side, DEFAULT_WIN_LENGTH};
use crate::eval::{evaluate, EvalWeights};
use crate::rules::{has_run_at, has_won};

use super::movegen::{generate_moves, phase_of};

/// Base score of a decided game; remaining depth is added on top
pub const WIN_SCORE: i32 = 10_000;

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Bound for the alpha-beta window, beyond any reachable score
const INF: i32 = i32::MAX / 2;

/// Tunables of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Pieces in a row needed to win
    pub win_length: usize,
    /// Score of a won position before the depth offset
    pub win_score: i32,
    /// Heuristic weights used at the leaves
    pub weights: EvalWeights,
    /// Disable to run a plain full-width minimax
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            win_length: DEFAULT_WIN_LENGTH,
            win_score: WIN_SCORE,
            weights: EvalWeights::default(),
            alpha_beta: true,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root excluded
    pub nodes: u64,
    /// Beta cutoffs (remaining siblings skipped)
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Score of the best move from the searching side's view
    pub score: i32,
    /// Depth searched
    pub depth: u32,
    /// Root candidates examined
    pub moves_considered: usize,
    /// True when a root move wins on the spot
    pub immediate_win: bool,
    pub stats: SearchStats,
}

/// Minimax searcher.
///
/// Scores are always from the point of view of the side passed to
/// [`Searcher::find_best_move`], which is the maximizer; its opponent minimizes.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    /// Maximizing side of the current search
    root_side: Option<Side>,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            root_side: None,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_weights(&mut self, weights: EvalWeights) {
        self.config.weights = weights;
    }

    /// Pick the best move for `side` looking `depth` plies ahead.
    ///
    /// A root move that completes a run is taken immediately with score
    /// `win_score + depth`. Otherwise every root move is searched and the
    /// first one reaching the best score wins ties. The board is restored
    /// before returning.
    pub fn find_best_move(
        &mut self,
        board: &mut Board,
        side: Side,
        phase: Phase,
        depth: u32,
    ) -> SearchResult {
        let depth = depth.max(1);
        self.root_side = Some(side);
        self.stats = SearchStats::default();

        let moves = generate_moves(board, side, phase);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.evaluate(board, side),
                depth,
                moves_considered: 0,
                immediate_win: false,
                stats: self.stats.clone(),
            };
        }

        if let Some((index, mv)) = find_immediate_win(board, side, &moves, self.config.win_length) {
            return SearchResult {
                best_move: Some(mv),
                score: self.config.win_score + depth as i32,
                depth,
                moves_considered: index + 1,
                immediate_win: true,
                stats: self.stats.clone(),
            };
        }

        let mut best_move = moves[0];
        let mut best_score = -INF;
        let mut alpha = -INF;

        for &mv in &moves {
            let score = {
                let mut child = board.scoped(side, mv);
                let child_phase = next_phase(&child, phase);
                self.minimax(&mut child, child_phase, depth - 1, false, alpha, INF)
            };
            tracing::trace!(%mv, score, "root candidate");

            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
            depth,
            moves_considered: moves.len(),
            immediate_win: false,
            stats: self.stats.clone(),
        }
    }

    /// Recursive minimax with an `[alpha, beta]` window.
    fn minimax(
        &mut self,
        board: &mut Board,
        phase: Phase,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        let max_side = self.root_side.unwrap_or(Side::Red);
        let min_side = max_side.opponent();

        if depth == 0 {
            return self.evaluate(board, max_side);
        }
        let remaining = depth as i32;
        if has_won(board, max_side, self.config.win_length) {
            return self.config.win_score + remaining;
        }
        if has_won(board, min_side, self.config.win_length) {
            return -self.config.win_score - remaining;
        }

        let to_move = if maximizing { max_side } else { min_side };
        let moves = generate_moves(board, to_move, phase);
        if moves.is_empty() {
            return self.evaluate(board, max_side);
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            let score = {
                let mut child = board.scoped(to_move, mv);
                let child_phase = next_phase(&child, phase);
                self.minimax(&mut child, child_phase, depth - 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.alpha_beta && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    #[inline]
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        evaluate(board, side, &self.config.weights)
    }
}

/// First move in `moves` that completes a run for `side`, with its index.
///
/// Each move is applied and reverted in turn, so `board` is unchanged on return.
pub fn find_immediate_win(
    board: &mut Board,
    side: Side,
    moves: &[Move],
    win_length: usize,
) -> Option<(usize, Move)> {
    moves.iter().enumerate().find_map(|(index, &mv)| {
        let child = board.scoped(side, mv);
        has_run_at(&child, mv.to, side, win_length).then_some((index, mv))
    })
}

/// Placement ends inside the tree once the last reserve piece is down.
#[inline]
fn next_phase(board: &Board, phase: Phase) -> Phase {
    match phase {
        Phase::Placement => phase_of(board),
        Phase::Movement => Phase::Movement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Pos, DEFAULT_ROSTER};

    fn donkeys(n: usize) -> Vec<PieceKind> {
        vec![PieceKind::Donkey; n]
    }

    #[test]
    fn test_immediate_win_in_placement() {
        // Red has (0,0),(0,1),(0,2); only its last piece at (0,3) completes four
        let roster = donkeys(4);
        let mut board = Board::new(5, &roster);
        board.place(Side::Red, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Red, 1, Pos::new(0, 1)).unwrap();
        board.place(Side::Red, 2, Pos::new(0, 2)).unwrap();
        board.place(Side::Blue, 0, Pos::new(4, 0)).unwrap();
        board.place(Side::Blue, 1, Pos::new(4, 1)).unwrap();
        board.place(Side::Blue, 2, Pos::new(4, 2)).unwrap();

        let moves = generate_moves(&board, Side::Red, Phase::Placement);
        let winners: Vec<_> = moves
            .iter()
            .filter(|&&mv| {
                let child = board.scoped(Side::Red, mv);
                has_won(&child, Side::Red, 4)
            })
            .copied()
            .collect();
        assert_eq!(winners, vec![Move::placement(3, Pos::new(0, 3))]);

        let mut searcher = Searcher::default();
        let result = searcher.find_best_move(&mut board, Side::Red, Phase::Placement, 3);
        assert_eq!(result.best_move, Some(Move::placement(3, Pos::new(0, 3))));
        assert_eq!(result.score, WIN_SCORE + 3);
        assert!(result.immediate_win);
    }

    #[test]
    fn test_blocks_opponent_four() {
        // Blue threatens (0,3); Red's only non-losing placement is to take it
        let roster = donkeys(4);
        let mut board = Board::new(5, &roster);
        board.place(Side::Blue, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Blue, 1, Pos::new(0, 1)).unwrap();
        board.place(Side::Blue, 2, Pos::new(0, 2)).unwrap();
        board.place(Side::Red, 0, Pos::new(4, 0)).unwrap();
        board.place(Side::Red, 1, Pos::new(2, 2)).unwrap();
        board.place(Side::Red, 2, Pos::new(4, 4)).unwrap();

        let mut searcher = Searcher::default();
        let result = searcher.find_best_move(&mut board, Side::Red, Phase::Placement, 3);
        assert_eq!(result.best_move, Some(Move::placement(3, Pos::new(0, 3))));
        assert!(result.score > -WIN_SCORE);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new(5, &DEFAULT_ROSTER);
        board.place(Side::Red, 0, Pos::new(1, 1)).unwrap();
        board.place(Side::Blue, 4, Pos::new(3, 2)).unwrap();
        let before = board.clone();

        let mut searcher = Searcher::default();
        searcher.find_best_move(&mut board, Side::Red, Phase::Placement, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_alpha_beta_matches_full_minimax() {
        let roster = [PieceKind::Snake, PieceKind::Frog, PieceKind::Donkey];
        let mut board = Board::new(4, &roster);
        board.place(Side::Red, 0, Pos::new(1, 1)).unwrap();
        board.place(Side::Blue, 0, Pos::new(2, 2)).unwrap();

        let mut pruned = Searcher::default();
        let mut full = Searcher::new(SearchConfig {
            alpha_beta: false,
            ..SearchConfig::default()
        });

        let a = pruned.find_best_move(&mut board, Side::Red, Phase::Placement, 3);
        let b = full.find_best_move(&mut board, Side::Red, Phase::Placement, 3);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert!(a.stats.nodes < b.stats.nodes);
        assert!(a.stats.cutoffs > 0);
        assert_eq!(b.stats.cutoffs, 0);
    }

    #[test]
    fn test_prefers_faster_win() {
        // Red donkeys on (0,0),(0,1),(0,2) and (2,3): stepping up to (1,3)
        // wins on Red's next turn, every other plan is slower.
        let mut board = Board::with_rosters(5, &donkeys(4), &donkeys(1));
        board.place(Side::Red, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Red, 1, Pos::new(0, 1)).unwrap();
        board.place(Side::Red, 2, Pos::new(0, 2)).unwrap();
        board.place(Side::Red, 3, Pos::new(2, 3)).unwrap();
        board.place(Side::Blue, 0, Pos::new(4, 0)).unwrap();

        let mut searcher = Searcher::default();
        let result = searcher.find_best_move(&mut board, Side::Red, Phase::Movement, 6);
        assert_eq!(
            result.best_move,
            Some(Move::movement(3, Pos::new(2, 3), Pos::new(1, 3)))
        );
        // Won with three plies still to go
        assert_eq!(result.score, WIN_SCORE + 3);
        assert!(!result.immediate_win);
    }

    #[test]
    fn test_deterministic() {
        let mut board = Board::new(5, &DEFAULT_ROSTER);
        board.place(Side::Red, 2, Pos::new(2, 2)).unwrap();
        board.place(Side::Blue, 1, Pos::new(1, 2)).unwrap();

        let mut s1 = Searcher::default();
        let mut s2 = Searcher::default();
        let a = s1.find_best_move(&mut board, Side::Red, Phase::Placement, 2);
        let b = s2.find_best_move(&mut board, Side::Red, Phase::Placement, 2);
        let c = s1.find_best_move(&mut board, Side::Red, Phase::Placement, 2);
        assert_eq!(a.best_move, b.best_move);
        assert_eq!(a.score, b.score);
        assert_eq!(a.best_move, c.best_move);
        assert_eq!(a.stats, c.stats);
    }

    #[test]
    fn test_no_moves_returns_none() {
        // Single Donkey boxed into the corner by Blue
        let mut board = Board::with_rosters(4, &donkeys(1), &donkeys(2));
        board.place(Side::Red, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Blue, 0, Pos::new(0, 1)).unwrap();
        board.place(Side::Blue, 1, Pos::new(1, 0)).unwrap();

        let mut searcher = Searcher::default();
        let result = searcher.find_best_move(&mut board, Side::Red, Phase::Movement, 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.moves_considered, 0);
        assert_eq!(result.score, evaluate(&board, Side::Red, &EvalWeights::default()));
    }

    #[test]
    fn test_tie_goes_to_first_move() {
        // Empty board, depth 1: all placements of the first piece score the same
        // under the balanced heuristic, so the first generated move is kept.
        let roster = [PieceKind::Snake];
        let mut board = Board::new(4, &roster);
        let mut searcher = Searcher::default();
        let result = searcher.find_best_move(&mut board, Side::Red, Phase::Placement, 1);
        assert_eq!(result.best_move, Some(Move::placement(0, Pos::new(0, 0))));
        assert_eq!(result.moves_considered, 16);
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        let roster = [PieceKind::Snake];
        let mut board = Board::new(4, &roster);
        let mut searcher = Searcher::default();
        let result = searcher.find_best_move(&mut board, Side::Blue, Phase::Placement, 0);
        assert_eq!(result.depth, 1);
        assert!(result.best_move.is_some());
    }
}
