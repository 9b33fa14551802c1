//! Board structure: the grid plus both rosters

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::{Move, Piece, PieceId, PieceKind, Pos, Side, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::MoveError;
use crate::rules::movement::is_legal_destination;

/// Game board.
///
/// Cells store [`PieceId`] handles into the rosters instead of the pieces
/// themselves. Rosters are created once and never resized, so a handle stays
/// valid for the board's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Option<PieceId>>,
    /// Rosters indexed by `Side::index`
    pieces: [Vec<Piece>; 2],
}

impl Board {
    /// Create an empty board where both sides get the same roster.
    pub fn new(size: usize, roster: &[PieceKind]) -> Self {
        Self::with_rosters(size, roster, roster)
    }

    pub fn with_rosters(size: usize, red: &[PieceKind], blue: &[PieceKind]) -> Self {
        debug_assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size));
        let roster = |kinds: &[PieceKind], side: Side| -> Vec<Piece> {
            kinds.iter().map(|&k| Piece::new(k, side)).collect()
        };
        Self {
            size,
            cells: vec![None; size * size],
            pieces: [roster(red, Side::Red), roster(blue, Side::Blue)],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Handle of the piece at `pos`
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<PieceId> {
        self.cells[pos.to_index(self.size)]
    }

    /// Side owning the piece at `pos`
    #[inline]
    pub fn side_at(&self, pos: Pos) -> Option<Side> {
        self.get(pos).map(|id| id.side)
    }

    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.get(pos).and_then(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces[id.side.index()].get(id.index)
    }

    /// Roster of a side, in creation order
    #[inline]
    pub fn pieces(&self, side: Side) -> &[Piece] {
        &self.pieces[side.index()]
    }

    /// Roster entries still waiting to enter the board
    pub fn unplaced(&self, side: Side) -> impl Iterator<Item = (usize, &Piece)> + '_ {
        self.pieces(side).iter().enumerate().filter(|(_, p)| !p.is_placed())
    }

    pub fn has_unplaced(&self, side: Side) -> bool {
        self.unplaced(side).next().is_some()
    }

    /// True once every piece of both sides is on the board
    pub fn all_placed(&self) -> bool {
        Side::ALL.iter().all(|&side| !self.has_unplaced(side))
    }

    /// All cells in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    pub fn empty_cells(&self) -> Vec<Pos> {
        self.positions().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of pieces currently on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Apply a move without validation.
    ///
    /// The move must come from the move generator (or have passed
    /// [`Board::validate`]); use [`Board::try_apply`] for anything else.
    #[inline]
    pub fn apply(&mut self, side: Side, mv: &Move) {
        debug_assert!(mv.piece < self.pieces[side.index()].len(), "piece index out of range");
        debug_assert!(self.is_empty(mv.to), "destination {} occupied", mv.to);
        if let Some(from) = mv.from {
            self.cells[from.to_index(self.size)] = None;
        }
        self.cells[mv.to.to_index(self.size)] = Some(PieceId {
            side,
            index: mv.piece,
        });
        self.pieces[side.index()][mv.piece].set_pos(Some(mv.to));
    }

    /// Exact inverse of [`Board::apply`] with the same arguments.
    #[inline]
    pub fn undo(&mut self, side: Side, mv: &Move) {
        self.cells[mv.to.to_index(self.size)] = None;
        if let Some(from) = mv.from {
            self.cells[from.to_index(self.size)] = Some(PieceId {
                side,
                index: mv.piece,
            });
        }
        self.pieces[side.index()][mv.piece].set_pos(mv.from);
    }

    /// Apply a move and undo it when the returned guard is dropped.
    #[inline]
    pub fn scoped(&mut self, side: Side, mv: Move) -> AppliedMove<'_> {
        self.apply(side, &mv);
        AppliedMove {
            board: self,
            side,
            mv,
        }
    }

    /// Check an externally supplied move without touching the board.
    pub fn validate(&self, side: Side, mv: &Move) -> Result<(), MoveError> {
        let roster = self.pieces(side);
        let piece = roster.get(mv.piece).ok_or(MoveError::NoSuchPiece {
            index: mv.piece,
            roster: roster.len(),
        })?;

        if !self.in_bounds(mv.to) {
            return Err(MoveError::OutOfBounds {
                row: mv.to.row,
                col: mv.to.col,
                size: self.size,
            });
        }
        if !self.is_empty(mv.to) {
            return Err(MoveError::Occupied(mv.to));
        }

        match (mv.from, piece.pos()) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(MoveError::AlreadyPlaced(mv.piece)),
            (Some(_), None) => Err(MoveError::NotPlaced(mv.piece)),
            (Some(claimed), Some(actual)) if claimed != actual => Err(MoveError::WrongSource {
                index: mv.piece,
                claimed,
            }),
            (Some(from), Some(_)) => {
                if is_legal_destination(piece.kind(), from, mv.to, self) {
                    Ok(())
                } else {
                    Err(MoveError::IllegalDestination {
                        index: mv.piece,
                        from,
                        to: mv.to,
                    })
                }
            }
        }
    }

    /// Validate, then apply. The board is untouched on error.
    pub fn try_apply(&mut self, side: Side, mv: &Move) -> Result<(), MoveError> {
        self.validate(side, mv)?;
        self.apply(side, mv);
        Ok(())
    }

    /// Put a reserve piece on the board (setup helper).
    pub fn place(&mut self, side: Side, piece: usize, pos: Pos) -> Result<(), MoveError> {
        self.try_apply(side, &Move::placement(piece, pos))
    }
}

impl fmt::Display for Board {
    /// Red pieces in upper case, Blue in lower case, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row as u8, col as u8);
                let ch = match self.piece_at(pos) {
                    Some(p) if p.side() == Side::Red => p.kind().glyph(),
                    Some(p) => p.kind().glyph().to_ascii_lowercase(),
                    None => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A move applied to a board, reverted on drop.
///
/// Dereferences to the board so the search can recurse through it.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    side: Side,
    mv: Move,
}

impl AppliedMove<'_> {
    #[inline]
    pub fn mv(&self) -> &Move {
        &self.mv
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.side, &self.mv);
    }
}
