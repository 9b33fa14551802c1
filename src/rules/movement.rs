//! Piece movement rules
//!
//! Each kind maps to a fixed list of [`Rule`]s. A destination is legal when it
//! is on the board, empty, not the source cell, and at least one of the kind's
//! rules accepts it:
//!
//! | Kind     | Rules                                   |
//! |----------|-----------------------------------------|
//! | Donkey   | one step, orthogonal                    |
//! | Snake    | one step, any of 8 directions           |
//! | Frog     | one step (8 directions) or a jump       |
//! | Antelope | knight's move                           |
//! | Lion     | two cells in any of 8 directions, or knight's move |
//!
//! A Frog jump follows a straight line and lands on an empty cell directly
//! behind an occupied one; the cells before that obstruction may hold anything.

use crate::board::{Board, PieceKind, Pos};

/// Which line directions a rule may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directions {
    /// Rows and columns only
    Orthogonal,
    /// Rows, columns and both diagonals
    All,
}

impl Directions {
    /// Whether `(dr, dc)` lies on a straight line this set allows.
    #[inline]
    fn contains(self, dr: i32, dc: i32) -> bool {
        let straight = dr == 0 || dc == 0;
        let diagonal = dr.abs() == dc.abs();
        match self {
            Directions::Orthogonal => straight,
            Directions::All => straight || diagonal,
        }
    }
}

/// One movement pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exactly one cell away
    Step(Directions),
    /// Any distance along a line, landing right behind an occupied cell
    Jump(Directions),
    /// Exactly `n` cells along a line; intermediate cells are ignored
    Leap(u8),
    /// (±2, ±1) or (±1, ±2)
    Knight,
}

const DONKEY: &[Rule] = &[Rule::Step(Directions::Orthogonal)];
const SNAKE: &[Rule] = &[Rule::Step(Directions::All)];
const FROG: &[Rule] = &[Rule::Step(Directions::All), Rule::Jump(Directions::All)];
const ANTELOPE: &[Rule] = &[Rule::Knight];
const LION: &[Rule] = &[Rule::Leap(2), Rule::Knight];

impl PieceKind {
    /// Movement rules for this kind
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            PieceKind::Donkey => DONKEY,
            PieceKind::Snake => SNAKE,
            PieceKind::Frog => FROG,
            PieceKind::Antelope => ANTELOPE,
            PieceKind::Lion => LION,
        }
    }
}

impl Rule {
    /// Does this rule allow `from -> to`? Bounds and emptiness of `to` are
    /// checked by the caller.
    fn allows(self, from: Pos, to: Pos, board: &Board) -> bool {
        let dr = i32::from(to.row) - i32::from(from.row);
        let dc = i32::from(to.col) - i32::from(from.col);
        let distance = dr.abs().max(dc.abs());

        match self {
            Rule::Step(dirs) => distance == 1 && dirs.contains(dr, dc),
            Rule::Knight => matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2)),
            Rule::Leap(n) => distance == i32::from(n) && Directions::All.contains(dr, dc),
            Rule::Jump(dirs) => {
                if distance < 2 || !dirs.contains(dr, dc) {
                    return false;
                }
                // Cell immediately before the landing square, on the frog's side
                to.offset(-dr.signum(), -dc.signum(), board.size())
                    .is_some_and(|behind| !board.is_empty(behind))
            }
        }
    }
}

/// Check whether a piece of `kind` standing on `from` may move to `to`.
pub fn is_legal_destination(kind: PieceKind, from: Pos, to: Pos, board: &Board) -> bool {
    if from == to || !board.in_bounds(to) || !board.is_empty(to) {
        return false;
    }
    kind.rules().iter().any(|rule| rule.allows(from, to, board))
}

/// Every legal destination for a piece of `kind` on `from`, in row-major order.
///
/// Scans the whole board rather than the neighbourhood because jumps can
/// reach any distance.
pub fn valid_moves(kind: PieceKind, from: Pos, board: &Board) -> Vec<Pos> {
    board
        .positions()
        .filter(|&to| is_legal_destination(kind, from, to, board))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Side, DEFAULT_ROSTER};

    fn empty5() -> Board {
        Board::new(5, &DEFAULT_ROSTER)
    }

    fn sorted(mut cells: Vec<Pos>) -> Vec<Pos> {
        cells.sort_by_key(|p| (p.row, p.col));
        cells
    }

    fn cells(list: &[(u8, u8)]) -> Vec<Pos> {
        sorted(list.iter().map(|&(r, c)| Pos::new(r, c)).collect())
    }

    #[test]
    fn test_donkey_orthogonal_only() {
        let board = empty5();
        let moves = valid_moves(PieceKind::Donkey, Pos::new(2, 2), &board);
        assert_eq!(sorted(moves), cells(&[(1, 2), (2, 1), (2, 3), (3, 2)]));
    }

    #[test]
    fn test_donkey_in_corner() {
        let board = empty5();
        let moves = valid_moves(PieceKind::Donkey, Pos::new(0, 0), &board);
        assert_eq!(sorted(moves), cells(&[(0, 1), (1, 0)]));
    }

    #[test]
    fn test_snake_eight_neighbours() {
        let board = empty5();
        let moves = valid_moves(PieceKind::Snake, Pos::new(2, 2), &board);
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&Pos::new(1, 1)));
        assert!(moves.contains(&Pos::new(3, 1)));
        assert!(!moves.contains(&Pos::new(0, 2)));
    }

    #[test]
    fn test_blocked_targets_excluded() {
        let mut board = empty5();
        board.place(Side::Red, 1, Pos::new(2, 2)).unwrap();
        board.place(Side::Blue, 0, Pos::new(1, 2)).unwrap();
        board.place(Side::Red, 0, Pos::new(3, 3)).unwrap();

        let moves = valid_moves(PieceKind::Snake, Pos::new(2, 2), &board);
        assert_eq!(moves.len(), 6);
        assert!(!moves.contains(&Pos::new(1, 2)));
        assert!(!moves.contains(&Pos::new(3, 3)));
    }

    #[test]
    fn test_frog_on_empty_board_only_steps() {
        let board = empty5();
        let moves = valid_moves(PieceKind::Frog, Pos::new(2, 2), &board);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_frog_jumps_behind_obstruction() {
        let mut board = empty5();
        board.place(Side::Red, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Blue, 2, Pos::new(0, 1)).unwrap();

        // Right along row 0: (0,1) occupied, so (0,2) is the landing cell
        assert!(is_legal_destination(PieceKind::Frog, Pos::new(0, 0), Pos::new(0, 2), &board));
        // Nothing directly behind (0,3)
        assert!(!is_legal_destination(PieceKind::Frog, Pos::new(0, 0), Pos::new(0, 3), &board));
        // No obstruction down the column
        assert!(!is_legal_destination(PieceKind::Frog, Pos::new(0, 0), Pos::new(2, 0), &board));
    }

    #[test]
    fn test_frog_jump_over_gap_and_diagonal() {
        let mut board = empty5();
        board.place(Side::Red, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Blue, 0, Pos::new(2, 2)).unwrap();
        board.place(Side::Blue, 1, Pos::new(0, 3)).unwrap();

        // Diagonal: (1,1) empty, (2,2) occupied, land on (3,3)
        assert!(is_legal_destination(PieceKind::Frog, Pos::new(0, 0), Pos::new(3, 3), &board));
        assert!(!is_legal_destination(PieceKind::Frog, Pos::new(0, 0), Pos::new(4, 4), &board));
        // Row: gap at (0,1),(0,2) then (0,3) occupied, land on (0,4)
        assert!(is_legal_destination(PieceKind::Frog, Pos::new(0, 0), Pos::new(0, 4), &board));
    }

    #[test]
    fn test_frog_jump_not_off_line() {
        let mut board = empty5();
        board.place(Side::Red, 0, Pos::new(2, 2)).unwrap();
        board.place(Side::Blue, 0, Pos::new(3, 2)).unwrap();
        // (4,3) is not on a line through (2,2)
        assert!(!is_legal_destination(PieceKind::Frog, Pos::new(2, 2), Pos::new(4, 3), &board));
        assert!(is_legal_destination(PieceKind::Frog, Pos::new(2, 2), Pos::new(4, 2), &board));
    }

    #[test]
    fn test_antelope_knight_pattern() {
        let board = empty5();
        let moves = valid_moves(PieceKind::Antelope, Pos::new(2, 2), &board);
        assert_eq!(
            sorted(moves),
            cells(&[(0, 1), (0, 3), (1, 0), (1, 4), (3, 0), (3, 4), (4, 1), (4, 3)])
        );

        let corner = valid_moves(PieceKind::Antelope, Pos::new(0, 0), &board);
        assert_eq!(sorted(corner), cells(&[(1, 2), (2, 1)]));
    }

    #[test]
    fn test_lion_leaps_and_knight() {
        let mut board = empty5();
        // A piece in between does not stop a leap
        board.place(Side::Blue, 0, Pos::new(1, 1)).unwrap();

        let moves = valid_moves(PieceKind::Lion, Pos::new(2, 2), &board);
        // 8 leaps + 8 knight moves
        assert_eq!(moves.len(), 16);
        assert!(moves.contains(&Pos::new(0, 0)));
        assert!(moves.contains(&Pos::new(4, 2)));
        assert!(moves.contains(&Pos::new(0, 1)));
        assert!(!moves.contains(&Pos::new(1, 2)));
    }

    #[test]
    fn test_source_is_never_a_destination() {
        let board = empty5();
        for kind in PieceKind::ALL {
            assert!(!is_legal_destination(kind, Pos::new(2, 2), Pos::new(2, 2), &board));
        }
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(PieceKind::Donkey.rules(), &[Rule::Step(Directions::Orthogonal)]);
        assert_eq!(PieceKind::Lion.rules().len(), 2);
        assert!(PieceKind::Frog.rules().contains(&Rule::Jump(Directions::All)));
    }
}
