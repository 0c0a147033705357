//! Game rules for Gomoku
//!
//! Standard freestyle rules: five or more in a row wins, no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{
    find_winner, find_winning_line, has_five_at_pos, Direction, WinningLine, WIN_LENGTH,
};
