//! Two-player Gomoku with time travel
//!
//! Freestyle gomoku on a configurable `N` x `N` board (15x15 by default):
//! - Black moves first, players alternate
//! - 5-in-a-row to win (overlines allowed)
//! - Every position of the game is kept and can be revisited
//!
//! # Architecture
//!
//! - [`board`]: Immutable board snapshots backed by bitboards
//! - [`rules`]: Five-in-a-row detection
//! - [`game`]: Game state, move validation and history navigation
//! - [`config`]: Board configuration loaded from TOML
//! - [`ui`]: Desktop front end built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameState, Player, Pos};
//!
//! let mut game = GameState::new(15).unwrap();
//! for col in 3..7 {
//!     game.apply_move(Pos::new(7, col)).unwrap(); // Black
//!     game.apply_move(Pos::new(8, col)).unwrap(); // White
//! }
//! game.apply_move(Pos::new(7, 7)).unwrap();
//! assert_eq!(game.winner(), Some(Player::Black));
//!
//! // Go back before the winning move and play elsewhere
//! game.jump_to(8).unwrap();
//! game.apply_move(Pos::new(0, 0)).unwrap();
//! assert_eq!(game.winner(), None);
//! assert_eq!(game.history().len(), 10);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Player, Pos, Snapshot, Stone, DEFAULT_BOARD_SIZE};
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, Result};
pub use game::{GameState, GameStatus, HistoryEntry};
pub use rules::{find_winner, find_winning_line, WinningLine};
