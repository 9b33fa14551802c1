//! Board representation for The Fourth Protocol
//!
//! The board is an N×N grid whose cells hold handles into two fixed rosters of
//! pieces (one per side). Pieces enter the board during the placement phase and
//! relocate during the movement phase.

pub mod board;
pub mod piece;


use std::fmt;

// Re-exports
pub use board::{AppliedMove, Board};
pub use piece::{Piece, PieceId, PieceKind, DEFAULT_ROSTER};

/// Default grid size (5x5)
pub const DEFAULT_GRID_SIZE: usize = 5;
/// Smallest supported grid
pub const MIN_GRID_SIZE: usize = 4;
/// Largest supported grid
pub const MAX_GRID_SIZE: usize = 10;
/// Pieces in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Line directions for run scanning: each axis once, the reverse is scanned
/// by walking the negated vector.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// The two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Index into per-side arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => f.pad("Red"),
            Side::Blue => f.pad("Blue"),
        }
    }
}

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pieces enter the board from the side's reserve
    Placement,
    /// Pieces already on the board relocate
    Movement,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placement => write!(f, "placement"),
            Phase::Movement => write!(f, "movement"),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_GRID_SIZE && (col as usize) < MAX_GRID_SIZE);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Step `(dr, dc)` away from this position, if the result is on a board of `size`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One ply: a piece of the moving side, where it comes from and where it goes.
///
/// `piece` indexes the mover's roster. `from` is `None` for a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: usize,
    pub from: Option<Pos>,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn placement(piece: usize, to: Pos) -> Self {
        Self { piece, from: None, to }
    }

    #[inline]
    pub fn movement(piece: usize, from: Pos, to: Pos) -> Self {
        Self {
            piece,
            from: Some(from),
            to,
        }
    }

    #[inline]
    pub fn is_placement(&self) -> bool {
        self.from.is_none()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "#{} {} -> {}", self.piece, from, self.to),
            None => write!(f, "#{} enters {}", self.piece, self.to),
        }
    }
}
