//! Immutable board snapshot

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone};
use crate::error::{GameError, Result};

/// One full board state.
///
/// Snapshots are never modified after construction: [`Snapshot::with_move`]
/// copies the board and returns the copy, so history entries can hold on to
/// them freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Snapshot {
    /// Empty `size` x `size` board.
    ///
    /// Any positive size is accepted as long as `size * size` fits in a
    /// `usize`.
    pub fn empty(size: usize) -> Result<Self> {
        let cells = match size.checked_mul(size) {
            Some(cells) if cells > 0 => cells,
            _ => return Err(GameError::InvalidDimension { size }),
        };
        Ok(Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        })
    }

    /// Copy of this snapshot with `player`'s stone added at `pos`
    pub fn with_move(&self, pos: Pos, player: Player) -> Result<Snapshot> {
        if !self.cell_at(pos)?.is_empty() {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let mut next = self.clone();
        let idx = pos.to_index(self.size);
        match player {
            Player::Black => next.black.set(idx),
            Player::White => next.white.set(idx),
        }
        Ok(next)
    }

    /// Get stone at position
    #[inline]
    pub fn cell_at(&self, pos: Pos) -> Result<Stone> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            });
        }
        Ok(self.stone_at_index(pos.to_index(self.size)))
    }

    #[inline]
    pub(crate) fn stone_at_index(&self, idx: usize) -> Stone {
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Board dimension `N`
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.is_within(self.size)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.total_cells()
    }

    /// Occupied cells in row-major order
    pub fn stones(&self) -> Vec<(Pos, Player)> {
        let occupied = &self.black | &self.white;
        occupied
            .iter_ones()
            .filter_map(|idx| {
                self.stone_at_index(idx)
                    .player()
                    .map(|player| (Pos::from_index(idx, self.size), player))
            })
            .collect()
    }

    /// Every cell in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        (0..self.total_cells())
            .map(move |idx| (Pos::from_index(idx, self.size), self.stone_at_index(idx)))
    }
}
