//! Static evaluation of a position
//!
//! Every piece on the board scores, for each of the four line axes, the square
//! of the same-side run passing through it, multiplied by a line weight. The
//! evaluating side's total minus the opponent's total is the result, so a
//! positive score favours `side`.

use crate::board::{Board, Pos, Side, LINE_DIRECTIONS};

use super::weights::{CenterBonus, EvalWeights, Position};

/// Evaluate the board from the perspective of `side`.
#[must_use]
pub fn evaluate(board: &Board, side: Side, weights: &EvalWeights) -> i32 {
    let own = side_score(board, side, weights.own_line, weights);
    let opp = side_score(board, side.opponent(), weights.opponent_line, weights);
    own - opp
}

/// Length of the contiguous same-side run through `pos` along `(dr, dc)`,
/// counting outwards in both directions. Zero for an empty cell.
pub fn count_in_line(board: &Board, pos: Pos, dr: i32, dc: i32) -> i32 {
    let Some(side) = board.side_at(pos) else {
        return 0;
    };
    let size = board.size();
    let mut count = 1;

    for sign in [1, -1] {
        let mut cur = pos;
        while let Some(next) = cur.offset(dr * sign, dc * sign, size) {
            if board.side_at(next) != Some(side) {
                break;
            }
            count += 1;
            cur = next;
        }
    }
    count
}

/// Total for one side's pieces with the given line weight
fn side_score(board: &Board, side: Side, line_weight: i32, weights: &EvalWeights) -> i32 {
    let size = board.size();
    let mut score = 0;

    for pos in board.pieces(side).iter().filter_map(|p| p.pos()) {
        for &(dr, dc) in &LINE_DIRECTIONS {
            let run = count_in_line(board, pos, dr, dc);
            let weight = if dr != 0 && dc != 0 {
                line_weight + weights.diagonal_bonus
            } else {
                line_weight
            };
            score += run * run * weight;
        }
        score += position_bonus(pos, size, weights.position);
        if weights.center_bonus == CenterBonus::Modulo {
            score += modulo_bonus(pos, size);
        }
    }
    score
}

/// Positional bonus for a piece on `pos`
#[inline]
fn position_bonus(pos: Pos, size: usize, position: Position) -> i32 {
    let n = size as i32;
    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    match position {
        Position::None => 0,
        Position::Center(w) => {
            // Doubled coordinates keep the centre exact on even boards
            let dist2 = (2 * row - (n - 1)).abs() + (2 * col - (n - 1)).abs();
            w * (2 * (n - 1) - dist2).max(0) / 2
        }
        Position::Edges(w) => {
            if row == 0 || col == 0 || row == n - 1 || col == n - 1 {
                w
            } else {
                0
            }
        }
    }
}

#[inline]
fn modulo_bonus(pos: Pos, size: usize) -> i32 {
    let n = size as i32;
    n % (i32::from(pos.row) + 1) + n % (i32::from(pos.col) + 1)
}
