//! Error types for board and game operations

use thiserror::Error;

use crate::board::Player;

/// Every way a board or game operation can be rejected.
///
/// All variants are recoverable: the value the operation was called on is
/// left exactly as it was.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board dimension {size}")]
    InvalidDimension { size: usize },
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("position ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("game already won by {winner:?}, no new moves are accepted")]
    IllegalMove { winner: Player },
    #[error("history index {index} out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
