//! The Fourth Protocol: a four-in-a-row board game with a minimax AI
//!
//! Two sides each own a roster of pieces. During the placement phase pieces
//! enter an N×N board one per turn; once every piece is down they move
//! according to their kind:
//! - Donkey: one step orthogonally
//! - Snake: one step in any direction
//! - Frog: one step, or a jump landing right behind an occupied cell
//! - Antelope: knight's move
//! - Lion: two cells in any direction, or knight's move
//!
//! The first side with four pieces in a row (configurable) wins.
//!
//! # Architecture
//!
//! - [`board`]: Board, pieces and moves (arena + index, apply/undo)
//! - [`rules`]: Movement rules and win detection
//! - [`eval`]: Line heuristic and strategy weights
//! - [`search`]: Move generation and minimax with alpha-beta pruning
//! - [`engine`]: AI facade (difficulty, strategy, statistics)
//! - [`game`]: Turn and phase bookkeeping
//! - [`config`]: TOML configuration
//! - [`ui`]: egui frontend
//!
//! # Quick Start
//!
//! ```
//! use fourth::{AIEngine, AiConfig, Game, GameConfig, Turn};
//!
//! let mut game = Game::new(&GameConfig::default());
//! // Shallow search keeps the example fast
//! let mut engine = AIEngine::with_config(&AiConfig { depth: 2, ..AiConfig::default() });
//!
//! // Red's opening placement
//! let mv = engine
//!     .get_move(game.board(), game.side_to_move(), game.phase())
//!     .unwrap();
//! assert_eq!(game.play(mv), Ok(Turn::Next(fourth::Side::Blue)));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Phase, PieceKind, Pos, Side, DEFAULT_ROSTER};
pub use config::{Difficulty, GameConfig};
pub use engine::{AIEngine, AiConfig, MoveResult, SearchType};
pub use error::{ConfigError, MoveError};
pub use eval::Strategy;
pub use game::{Game, Status, Turn};
