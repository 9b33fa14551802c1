//! Pieces and their kinds

use serde::{Deserialize, Serialize};

use super::{Pos, Side};

/// Movement-rule category of a piece, fixed at creation.
///
/// The rule table for each kind lives in [`crate::rules::movement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Frog,
    Snake,
    Donkey,
    Antelope,
    Lion,
}

/// Roster each side starts with when no other is configured
pub const DEFAULT_ROSTER: [PieceKind; 5] = [
    PieceKind::Frog,
    PieceKind::Snake,
    PieceKind::Donkey,
    PieceKind::Antelope,
    PieceKind::Lion,
];

impl PieceKind {
    pub const ALL: [PieceKind; 5] = DEFAULT_ROSTER;

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Frog => "Frog",
            PieceKind::Snake => "Snake",
            PieceKind::Donkey => "Donkey",
            PieceKind::Antelope => "Antelope",
            PieceKind::Lion => "Lion",
        }
    }

    /// Single-letter symbol used by text renderings
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Frog => 'F',
            PieceKind::Snake => 'S',
            PieceKind::Donkey => 'D',
            PieceKind::Antelope => 'A',
            PieceKind::Lion => 'L',
        }
    }
}

/// Handle to a piece: its side and its index in that side's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub side: Side,
    pub index: usize,
}

/// A piece owned by a side's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    pos: Option<Pos>,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self {
            kind,
            side,
            pos: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Current cell, or `None` while the piece is still in reserve
    #[inline]
    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.pos.is_some()
    }

    /// Only the board may move pieces, so the cell/coordinate pair stays consistent.
    #[inline]
    pub(super) fn set_pos(&mut self, pos: Option<Pos>) {
        self.pos = pos;
    }
}
