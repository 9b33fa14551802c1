//! Game state management for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Move, Phase, Pos, Side};
use crate::rules::valid_moves;
use crate::{AIEngine, Game, GameConfig, MoveResult, Status, Strategy, Turn};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Hotseat
    PvP,
    /// Human plays `human`, the AI plays the other side
    PvAI { human: Side },
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvAI { human: Side::Red }
    }
}

impl GameMode {
    pub fn is_ai(self, side: Side) -> bool {
        match self {
            GameMode::PvP => false,
            GameMode::PvAI { human } => side != human,
            GameMode::AiVsAi => true,
        }
    }

    pub fn label(self) -> String {
        match self {
            GameMode::PvP => "PvP - Hotseat".to_string(),
            GameMode::PvAI { human } => format!("PvAI - You: {human}"),
            GameMode::AiVsAi => "AI vs AI".to_string(),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub mode: GameMode,
    /// Strategy per side, indexed by `Side::index`
    pub strategies: [Strategy; 2],
    /// Roster index of the piece the human picked
    pub selected: Option<usize>,
    pub last_ai_result: Option<(Side, MoveResult)>,
    pub ai_state: AiState,
    pub message: Option<String>,
    turn_started: Instant,
}

impl GameState {
    pub fn new(config: GameConfig, mode: GameMode, strategies: [Strategy; 2]) -> Self {
        Self {
            game: Game::new(&config),
            config,
            mode,
            strategies,
            selected: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            turn_started: Instant::now(),
        }
    }

    /// Restart with the same settings
    pub fn reset(&mut self) {
        self.game = Game::new(&self.config);
        self.selected = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
        self.turn_started = Instant::now();
    }

    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && !self.mode.is_ai(self.game.side_to_move())
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_over() && self.mode.is_ai(self.game.side_to_move())
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn turn_elapsed(&self) -> Duration {
        self.turn_started.elapsed()
    }

    /// Cell of the selected piece, if it is on the board
    pub fn selected_pos(&self) -> Option<Pos> {
        let side = self.game.side_to_move();
        self.selected
            .and_then(|index| self.game.board().pieces(side).get(index))
            .and_then(|piece| piece.pos())
    }

    /// Destinations to highlight for the current selection
    pub fn hint_targets(&self) -> Vec<Pos> {
        if !self.is_human_turn() {
            return Vec::new();
        }
        let board = self.game.board();
        match self.game.phase() {
            Phase::Placement => {
                if self.selected.is_some() {
                    board.empty_cells()
                } else {
                    Vec::new()
                }
            }
            Phase::Movement => {
                let side = self.game.side_to_move();
                match self.selected.and_then(|i| board.pieces(side).get(i)) {
                    Some(piece) => piece
                        .pos()
                        .map(|from| valid_moves(piece.kind(), from, board))
                        .unwrap_or_default(),
                    None => Vec::new(),
                }
            }
        }
    }

    /// Pick a reserve piece to place next
    pub fn select_reserve(&mut self, index: usize) {
        if !self.is_human_turn() || self.game.phase() != Phase::Placement {
            return;
        }
        let side = self.game.side_to_move();
        if self
            .game
            .board()
            .pieces(side)
            .get(index)
            .is_some_and(|p| !p.is_placed())
        {
            self.selected = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Handle a click on a board cell.
    ///
    /// Placement: puts the selected reserve piece (or the first unplaced one)
    /// on an empty cell. Movement: the first click selects one of the mover's
    /// pieces, the second moves it.
    pub fn handle_click(&mut self, pos: Pos) -> Result<(), String> {
        if self.game.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let side = self.game.side_to_move();
        let board = self.game.board();

        // Clicking one of your own pieces (re)selects it
        if let Some(id) = board.get(pos) {
            if id.side == side && self.game.phase() == Phase::Movement {
                self.selected = Some(id.index);
                self.message = None;
                return Ok(());
            }
        }

        let mv = match self.game.phase() {
            Phase::Placement => {
                let index = self
                    .selected
                    .filter(|&i| board.pieces(side).get(i).is_some_and(|p| !p.is_placed()))
                    .or_else(|| board.unplaced(side).map(|(i, _)| i).next())
                    .ok_or_else(|| "No piece left to place".to_string())?;
                Move::placement(index, pos)
            }
            Phase::Movement => {
                let from = self
                    .selected_pos()
                    .ok_or_else(|| "Select one of your pieces first".to_string())?;
                let index = self.selected.unwrap_or_default();
                Move::movement(index, from, pos)
            }
        };

        self.apply_move(mv).map_err(|e| {
            let msg = e.to_string();
            self.message = Some(msg.clone());
            msg
        })
    }

    /// Play a move for the side to move and update the bookkeeping
    fn apply_move(&mut self, mv: Move) -> Result<(), crate::MoveError> {
        let turn = self.game.play(mv)?;
        self.selected = None;
        self.message = None;
        self.turn_started = Instant::now();

        match turn {
            Turn::Passed(side) => {
                self.message = Some(format!("{} cannot move, {side} plays again", side.opponent()));
            }
            Turn::Next(_) | Turn::Won(_) | Turn::Drawn => {}
        }
        Ok(())
    }

    /// Start the AI on a worker thread if it is its turn
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.game.board().clone();
        let side = self.game.side_to_move();
        let phase = self.game.phase();
        let mut ai = self.config.ai_config_with(self.strategies[side.index()]);
        // A fresh engine per turn; vary the seed so placements differ
        ai.random_placement = ai
            .random_placement
            .map(|seed| seed.wrapping_add(u64::from(self.game.turn_count())));

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut engine = AIEngine::with_config(&ai);
            let result = engine.get_move_with_stats(&board, side, phase);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;
            let side = self.game.side_to_move();
            let best = move_result.best_move;
            self.last_ai_result = Some((side, move_result));

            match best {
                Some(mv) => {
                    if let Err(e) = self.apply_move(mv) {
                        tracing::warn!(%side, %mv, error = %e, "AI produced a rejected move");
                        self.message = Some(format!("AI move rejected: {e}"));
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Short description of the game status for the side panel
    pub fn status_text(&self) -> String {
        match self.game.status() {
            Status::InProgress => format!("{} to move ({})", self.game.side_to_move(), self.game.phase()),
            Status::Won { side, .. } => format!("{side} wins"),
            Status::Drawn => "Draw - no side can move".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn pvp() -> GameState {
        GameState::new(GameConfig::default(), GameMode::PvP, [Strategy::Balanced; 2])
    }

    #[test]
    fn test_mode_controls_sides() {
        assert!(!GameMode::PvP.is_ai(Side::Red));
        assert!(GameMode::AiVsAi.is_ai(Side::Blue));
        let mode = GameMode::PvAI { human: Side::Blue };
        assert!(mode.is_ai(Side::Red));
        assert!(!mode.is_ai(Side::Blue));
    }

    #[test]
    fn test_click_places_first_unplaced_piece() {
        let mut state = pvp();
        state.handle_click(Pos::new(2, 2)).unwrap();
        let board = state.game.board();
        assert_eq!(board.pieces(Side::Red)[0].pos(), Some(Pos::new(2, 2)));
        assert_eq!(state.game.side_to_move(), Side::Blue);
    }

    #[test]
    fn test_click_places_selected_reserve_piece() {
        let mut state = pvp();
        state.select_reserve(4);
        assert_eq!(state.selected, Some(4));
        assert_eq!(state.hint_targets().len(), 25);
        state.handle_click(Pos::new(0, 0)).unwrap();
        assert_eq!(
            state.game.board().piece_at(Pos::new(0, 0)).map(|p| p.kind()),
            Some(PieceKind::Lion)
        );
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_click_on_occupied_cell_reports_error() {
        let mut state = pvp();
        state.handle_click(Pos::new(1, 1)).unwrap();
        let err = state.handle_click(Pos::new(1, 1)).unwrap_err();
        assert_eq!(err, "cell (1, 1) is occupied");
        assert_eq!(state.message.as_deref(), Some("cell (1, 1) is occupied"));
        assert_eq!(state.game.side_to_move(), Side::Blue);
    }

    #[test]
    fn test_select_then_move() {
        let config = GameConfig {
            grid_size: Some(4),
            win_length: 2,
            roster: vec![PieceKind::Donkey, PieceKind::Donkey],
            ..GameConfig::default()
        };
        let mut state = GameState::new(config, GameMode::PvP, [Strategy::Balanced; 2]);
        state.handle_click(Pos::new(0, 0)).unwrap(); // Red
        state.handle_click(Pos::new(3, 3)).unwrap(); // Blue
        state.handle_click(Pos::new(2, 0)).unwrap(); // Red
        state.handle_click(Pos::new(1, 3)).unwrap(); // Blue
        assert_eq!(state.game.phase(), Phase::Movement);

        // Clicking an empty cell without a selection does nothing
        assert!(state.handle_click(Pos::new(0, 1)).is_err());

        state.handle_click(Pos::new(0, 0)).unwrap();
        assert_eq!(state.selected_pos(), Some(Pos::new(0, 0)));
        let hints = state.hint_targets();
        assert_eq!(hints, vec![Pos::new(0, 1), Pos::new(1, 0)]);

        // Diagonal is not a Donkey move
        assert!(state.handle_click(Pos::new(1, 1)).is_err());
        // Red wins with two in a column
        state.handle_click(Pos::new(1, 0)).unwrap();
        assert_eq!(state.game.status().winner(), Some(Side::Red));
    }

    #[test]
    fn test_ai_turn_detection() {
        let state = GameState::new(
            GameConfig::default(),
            GameMode::PvAI { human: Side::Blue },
            [Strategy::Balanced; 2],
        );
        assert!(state.is_ai_turn());
        assert!(!state.is_human_turn());
    }

    #[test]
    fn test_ai_worker_round_trip() {
        let config = GameConfig {
            depth: Some(1),
            ..GameConfig::default()
        };
        let mut state = GameState::new(config, GameMode::AiVsAi, [Strategy::Aggressive; 2]);
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!state.is_ai_thinking());
        assert_eq!(state.game.turn_count(), 1);
        assert!(matches!(state.last_ai_result, Some((Side::Red, _))));
    }
}
