//! Win condition checking
//!
//! A side wins with `win_length` of its pieces on consecutive cells of a row,
//! column or diagonal. Longer runs contain a winning window and also count.

use crate::board::{Board, Pos, Side, LINE_DIRECTIONS};

/// Check if `side` has `win_length` pieces in a row anywhere on the board.
///
/// Stops at the first run found.
#[inline]
pub fn has_won(board: &Board, side: Side, win_length: usize) -> bool {
    find_run(board, side, win_length).is_some()
}

/// Cells of the first winning run for `side`, if there is one.
pub fn winning_line(board: &Board, side: Side, win_length: usize) -> Option<Vec<Pos>> {
    let (start, (dr, dc)) = find_run(board, side, win_length)?;
    Some(line_from(board, start, dr, dc, win_length))
}

/// Fast check through a specific cell, used after a move lands on `pos`.
///
/// Only the four lines through `pos` are examined.
pub fn has_run_at(board: &Board, pos: Pos, side: Side, win_length: usize) -> bool {
    run_through(board, pos, side, win_length).is_some()
}

/// Winning run through `pos`, if the piece there completes one.
pub fn winning_line_at(board: &Board, pos: Pos, side: Side, win_length: usize) -> Option<Vec<Pos>> {
    let (start, (dr, dc)) = run_through(board, pos, side, win_length)?;
    Some(line_from(board, start, dr, dc, win_length))
}

/// Scan from every cell of `side` in each direction for `win_length`
/// consecutive cells of the same side. Returns the run's first cell and
/// direction.
fn find_run(board: &Board, side: Side, win_length: usize) -> Option<(Pos, (i32, i32))> {
    if win_length == 0 {
        return None;
    }
    for pos in board.positions() {
        if board.side_at(pos) != Some(side) {
            continue;
        }
        for &(dr, dc) in &LINE_DIRECTIONS {
            if window_holds(board, pos, dr, dc, side, win_length) {
                return Some((pos, (dr, dc)));
            }
        }
    }
    None
}

/// True if `win_length` cells starting at `start` along `(dr, dc)` are all
/// in bounds and owned by `side`.
#[inline]
fn window_holds(board: &Board, start: Pos, dr: i32, dc: i32, side: Side, win_length: usize) -> bool {
    let size = board.size();
    (0..win_length as i32).all(|i| {
        start
            .offset(dr * i, dc * i, size)
            .is_some_and(|p| board.side_at(p) == Some(side))
    })
}

fn run_through(board: &Board, pos: Pos, side: Side, win_length: usize) -> Option<(Pos, (i32, i32))> {
    if win_length == 0 || board.side_at(pos) != Some(side) {
        return None;
    }
    let size = board.size();
    for &(dr, dc) in &LINE_DIRECTIONS {
        // Walk back to the start of the run containing pos
        let mut start = pos;
        while let Some(prev) = start.offset(-dr, -dc, size) {
            if board.side_at(prev) != Some(side) {
                break;
            }
            start = prev;
        }
        if window_holds(board, start, dr, dc, side, win_length) {
            return Some((start, (dr, dc)));
        }
    }
    None
}

fn line_from(board: &Board, start: Pos, dr: i32, dc: i32, win_length: usize) -> Vec<Pos> {
    (0..win_length as i32)
        .filter_map(|i| start.offset(dr * i, dc * i, board.size()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, DEFAULT_ROSTER};

    const K: usize = 4;

    /// Board with enough Snakes per side to build any test pattern.
    fn board_with(size: usize, red: &[(u8, u8)], blue: &[(u8, u8)]) -> Board {
        let roster = vec![PieceKind::Snake; 8];
        let mut board = Board::new(size, &roster);
        for (i, &(r, c)) in red.iter().enumerate() {
            board.place(Side::Red, i, Pos::new(r, c)).unwrap();
        }
        for (i, &(r, c)) in blue.iter().enumerate() {
            board.place(Side::Blue, i, Pos::new(r, c)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_no_winner() {
        let board = Board::new(5, &DEFAULT_ROSTER);
        assert!(!has_won(&board, Side::Red, K));
        assert!(!has_won(&board, Side::Blue, K));
        assert!(winning_line(&board, Side::Red, K).is_none());
    }

    #[test]
    fn test_horizontal_at_every_offset() {
        for row in 0..5u8 {
            for start in 0..2u8 {
                let red: Vec<_> = (0..4).map(|i| (row, start + i)).collect();
                let board = board_with(5, &red, &[]);
                assert!(has_won(&board, Side::Red, K), "row {row} start {start}");
                assert!(!has_won(&board, Side::Blue, K));
            }
        }
    }

    #[test]
    fn test_vertical() {
        let board = board_with(5, &[(1, 4), (2, 4), (3, 4), (4, 4)], &[]);
        assert!(has_won(&board, Side::Red, K));
        let board = board_with(5, &[], &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert!(has_won(&board, Side::Blue, K));
        assert!(!has_won(&board, Side::Red, K));
    }

    #[test]
    fn test_diagonal_se() {
        let board = board_with(5, &[(0, 0), (1, 1), (2, 2), (3, 3)], &[]);
        assert!(has_won(&board, Side::Red, K));
        let board = board_with(5, &[(1, 1), (2, 2), (3, 3), (4, 4)], &[]);
        assert!(has_won(&board, Side::Red, K));
        let board = board_with(5, &[(0, 1), (1, 2), (2, 3), (3, 4)], &[]);
        assert!(has_won(&board, Side::Red, K));
    }

    #[test]
    fn test_diagonal_sw() {
        let board = board_with(5, &[(0, 3), (1, 2), (2, 1), (3, 0)], &[]);
        assert!(has_won(&board, Side::Red, K));
        let board = board_with(5, &[], &[(1, 4), (2, 3), (3, 2), (4, 1)]);
        assert!(has_won(&board, Side::Blue, K));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = board_with(5, &[(0, 0), (0, 1), (0, 2)], &[]);
        assert!(!has_won(&board, Side::Red, K));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        // Opponent piece in the middle
        let board = board_with(5, &[(2, 0), (2, 1), (2, 3), (2, 4)], &[(2, 2)]);
        assert!(!has_won(&board, Side::Red, K));
        // Gap in the middle
        let board = board_with(5, &[(0, 0), (1, 1), (3, 3), (4, 4)], &[]);
        assert!(!has_won(&board, Side::Red, K));
    }

    #[test]
    fn test_mixed_sides_not_a_win() {
        let board = board_with(5, &[(0, 0), (0, 1)], &[(0, 2), (0, 3)]);
        assert!(!has_won(&board, Side::Red, K));
        assert!(!has_won(&board, Side::Blue, K));
    }

    #[test]
    fn test_longer_run_wins() {
        let board = board_with(5, &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4)], &[]);
        assert!(has_won(&board, Side::Red, K));
    }

    #[test]
    fn test_win_length_configurable() {
        let board = board_with(7, &[(6, 2), (6, 3), (6, 4)], &[]);
        assert!(has_won(&board, Side::Red, 3));
        assert!(!has_won(&board, Side::Red, 4));
    }

    #[test]
    fn test_winning_line_cells() {
        let board = board_with(5, &[(1, 4), (2, 3), (3, 2), (4, 1)], &[]);
        let line = winning_line(&board, Side::Red, K).unwrap();
        assert_eq!(
            line,
            vec![Pos::new(1, 4), Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 1)]
        );
    }

    #[test]
    fn test_run_at_position() {
        let board = board_with(5, &[(0, 1), (1, 1), (2, 1), (3, 1)], &[(4, 1)]);
        assert!(has_run_at(&board, Pos::new(2, 1), Side::Red, K));
        assert!(!has_run_at(&board, Pos::new(4, 1), Side::Blue, K));
        assert!(!has_run_at(&board, Pos::new(2, 2), Side::Red, K));
        let line = winning_line_at(&board, Pos::new(3, 1), Side::Red, K).unwrap();
        assert_eq!(line.first(), Some(&Pos::new(0, 1)));
        assert_eq!(line.len(), K);
    }
}
