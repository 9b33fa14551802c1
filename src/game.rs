//! Turn and phase bookkeeping for one game
//!
//! [`Game`] owns the board, checks every move before it is applied, and
//! decides wins, passes and draws. Red always moves first.

use crate::board::{Board, Move, Phase, Pos, Side};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::rules::winning_line_at;
use crate::search::{generate_moves, phase_of};

/// Where the game stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won { side: Side, line: Vec<Pos> },
    /// Neither side has a legal move
    Drawn,
}

impl Status {
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Status::Won { side, .. } => Some(*side),
            _ => None,
        }
    }
}

/// Outcome of one accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The opponent moves next
    Next(Side),
    /// The opponent has no legal move; the given side moves again
    Passed(Side),
    Won(Side),
    Drawn,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    win_length: usize,
    side_to_move: Side,
    status: Status,
    turn_count: u32,
    last_move: Option<(Side, Move)>,
}

impl Game {
    /// Start a game from a (validated) config.
    pub fn new(config: &GameConfig) -> Self {
        let board = Board::new(config.grid_size(), &config.roster);
        Self::from_board(board, config.win_length)
    }

    /// Start from an arbitrary position with Red to move.
    pub fn from_board(board: Board, win_length: usize) -> Self {
        Self {
            board,
            win_length,
            side_to_move: Side::Red,
            status: Status::InProgress,
            turn_count: 0,
            last_move: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Placement while any piece of either side is off the board
    #[inline]
    pub fn phase(&self) -> Phase {
        phase_of(&self.board)
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Moves played so far
    #[inline]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[inline]
    pub fn last_move(&self) -> Option<(Side, Move)> {
        self.last_move
    }

    /// Legal moves for the side to move (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        generate_moves(&self.board, self.side_to_move, self.phase())
    }

    /// Play a move for the side to move.
    ///
    /// The move is fully checked first; on error nothing changes.
    pub fn play(&mut self, mv: Move) -> Result<Turn, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let phase = self.phase();
        if mv.is_placement() != (phase == Phase::Placement) {
            return Err(MoveError::WrongPhase(phase));
        }

        let side = self.side_to_move;
        self.board.try_apply(side, &mv)?;
        self.turn_count += 1;
        self.last_move = Some((side, mv));

        if let Some(line) = winning_line_at(&self.board, mv.to, side, self.win_length) {
            tracing::info!(%side, turns = self.turn_count, "game won");
            self.status = Status::Won { side, line };
            return Ok(Turn::Won(side));
        }

        let next = side.opponent();
        let phase = self.phase();
        if !generate_moves(&self.board, next, phase).is_empty() {
            self.side_to_move = next;
            Ok(Turn::Next(next))
        } else if !generate_moves(&self.board, side, phase).is_empty() {
            tracing::debug!(passed = %next, "no legal move, turn passes");
            Ok(Turn::Passed(side))
        } else {
            tracing::info!(turns = self.turn_count, "game drawn, both sides blocked");
            self.status = Status::Drawn;
            Ok(Turn::Drawn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, DEFAULT_ROSTER};

    #[test]
    fn test_new_game() {
        let game = Game::new(&GameConfig::default());
        assert_eq!(game.board().size(), 5);
        assert_eq!(game.side_to_move(), Side::Red);
        assert_eq!(game.phase(), Phase::Placement);
        assert_eq!(game.status(), &Status::InProgress);
        assert_eq!(game.legal_moves().len(), DEFAULT_ROSTER.len() * 25);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(&GameConfig::default());
        let turn = game.play(Move::placement(0, Pos::new(2, 2))).unwrap();
        assert_eq!(turn, Turn::Next(Side::Blue));
        assert_eq!(game.side_to_move(), Side::Blue);
        assert_eq!(game.turn_count(), 1);
        assert_eq!(game.last_move(), Some((Side::Red, Move::placement(0, Pos::new(2, 2)))));

        // Blue's piece 0 is a different piece from Red's piece 0
        game.play(Move::placement(0, Pos::new(0, 0))).unwrap();
        assert_eq!(game.side_to_move(), Side::Red);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new(&GameConfig::default());
        game.play(Move::placement(0, Pos::new(2, 2))).unwrap();
        let board = game.board().clone();

        let err = game.play(Move::placement(1, Pos::new(2, 2))).unwrap_err();
        assert_eq!(err, MoveError::Occupied(Pos::new(2, 2)));
        let err = game
            .play(Move::movement(0, Pos::new(2, 2), Pos::new(2, 3)))
            .unwrap_err();
        assert_eq!(err, MoveError::WrongPhase(Phase::Placement));

        assert_eq!(game.board(), &board);
        assert_eq!(game.side_to_move(), Side::Blue);
        assert_eq!(game.turn_count(), 1);
    }

    #[test]
    fn test_phase_switches_to_movement() {
        let roster = [PieceKind::Snake, PieceKind::Donkey];
        let mut game = Game::from_board(Board::new(4, &roster), 3);
        game.play(Move::placement(0, Pos::new(0, 0))).unwrap();
        game.play(Move::placement(0, Pos::new(3, 3))).unwrap();
        game.play(Move::placement(1, Pos::new(0, 3))).unwrap();
        assert_eq!(game.phase(), Phase::Placement);
        game.play(Move::placement(1, Pos::new(3, 0))).unwrap();
        assert_eq!(game.phase(), Phase::Movement);

        let err = game.play(Move::placement(0, Pos::new(1, 1))).unwrap_err();
        assert_eq!(err, MoveError::WrongPhase(Phase::Movement));
        let turn = game
            .play(Move::movement(0, Pos::new(0, 0), Pos::new(1, 1)))
            .unwrap();
        assert_eq!(turn, Turn::Next(Side::Blue));
    }

    #[test]
    fn test_win_detected() {
        let mut game = Game::new(&GameConfig::default());
        for col in 0..3u8 {
            game.play(Move::placement(col as usize, Pos::new(0, col))).unwrap();
            game.play(Move::placement(col as usize, Pos::new(4, col))).unwrap();
        }
        let turn = game.play(Move::placement(3, Pos::new(0, 3))).unwrap();
        assert_eq!(turn, Turn::Won(Side::Red));
        assert_eq!(game.status().winner(), Some(Side::Red));
        match game.status() {
            Status::Won { line, .. } => assert_eq!(line.len(), 4),
            other => panic!("unexpected status {other:?}"),
        }
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.play(Move::placement(3, Pos::new(4, 3))),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_blocked_side_passes() {
        // Blue's only piece is boxed in; Red keeps moving
        let mut board = Board::with_rosters(
            4,
            &[PieceKind::Donkey, PieceKind::Donkey, PieceKind::Snake],
            &[PieceKind::Donkey],
        );
        board.place(Side::Blue, 0, Pos::new(0, 0)).unwrap();
        board.place(Side::Red, 0, Pos::new(0, 1)).unwrap();
        board.place(Side::Red, 1, Pos::new(1, 0)).unwrap();
        board.place(Side::Red, 2, Pos::new(3, 3)).unwrap();
        let mut game = Game::from_board(board, 4);
        assert_eq!(game.phase(), Phase::Movement);

        let turn = game
            .play(Move::movement(2, Pos::new(3, 3), Pos::new(2, 2)))
            .unwrap();
        assert_eq!(turn, Turn::Passed(Side::Red));
        assert_eq!(game.side_to_move(), Side::Red);
    }

    #[test]
    fn test_both_blocked_is_draw() {
        // Pairs of columns alternate owner row by row, so no line of four
        // forms; the last placement fills the board and nobody can move.
        let roster = [PieceKind::Donkey; 8];
        let mut board = Board::new(4, &roster);
        let (mut red, mut blue) = (0, 0);
        for pos in board.positions().collect::<Vec<_>>() {
            if pos == Pos::new(3, 3) {
                continue;
            }
            if (pos.col / 2 + pos.row) % 2 == 0 {
                board.place(Side::Red, red, pos).unwrap();
                red += 1;
            } else {
                board.place(Side::Blue, blue, pos).unwrap();
                blue += 1;
            }
        }
        let mut game = Game::from_board(board, 4);
        assert_eq!(game.phase(), Phase::Placement);

        let turn = game.play(Move::placement(7, Pos::new(3, 3))).unwrap();
        assert_eq!(turn, Turn::Drawn);
        assert_eq!(game.status(), &Status::Drawn);
        assert!(game.is_over());
    }
}
