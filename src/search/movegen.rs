//! Move generation
//!
//! Moves come out in roster order, then in row-major destination order. The
//! search relies on this order for deterministic tie-breaking.

use crate::board::{Board, Move, Phase, Side};
use crate::rules::valid_moves;

/// All legal moves for `side` in `phase`.
///
/// - Placement: every unplaced piece paired with every empty cell
/// - Movement: every placed piece paired with each destination its rules allow
#[must_use]
pub fn generate_moves(board: &Board, side: Side, phase: Phase) -> Vec<Move> {
    match phase {
        Phase::Placement => {
            let empty = board.empty_cells();
            board
                .unplaced(side)
                .flat_map(|(index, _)| empty.iter().map(move |&to| Move::placement(index, to)))
                .collect()
        }
        Phase::Movement => board
            .pieces(side)
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| piece.pos().map(|from| (index, piece.kind(), from)))
            .flat_map(|(index, kind, from)| {
                valid_moves(kind, from, board)
                    .into_iter()
                    .map(move |to| Move::movement(index, from, to))
            })
            .collect(),
    }
}

/// Phase implied by the board: placement until every piece of both sides is down.
#[inline]
pub fn phase_of(board: &Board) -> Phase {
    if board.all_placed() {
        Phase::Movement
    } else {
        Phase::Placement
    }
}
