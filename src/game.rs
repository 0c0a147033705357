//! Game state with navigable history
//!
//! [`GameState`] keeps every snapshot produced so far plus a cursor into that
//! list. Jumping moves only the cursor; placing a stone while the cursor is
//! behind the latest entry drops the entries after it before appending.

use tracing::{debug, info};

use crate::board::{Player, Pos, Snapshot};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::rules::{find_winner, find_winning_line, has_five_at_pos, WinningLine};

/// One recorded board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub snapshot: Snapshot,
    /// Number of moves played to reach this snapshot (0 = empty board)
    pub move_index: usize,
    /// Move that produced this snapshot, `None` for the initial board
    pub placed: Option<(Pos, Player)>,
}

/// Game status as seen from the snapshot under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Player },
    Won(Player),
    /// Board filled without a five
    Draw,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Main game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    cursor: usize,
}

impl GameState {
    /// Fresh game on an empty `size` x `size` board, Black to move
    pub fn new(size: usize) -> Result<Self> {
        let empty = Snapshot::empty(size)?;
        Ok(Self {
            history: vec![HistoryEntry {
                snapshot: empty,
                move_index: 0,
                placed: None,
            }],
            cursor: 0,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        Self::new(config.board_size)
    }

    /// Start over with the same board size
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.cursor = 0;
        debug!(size = self.board_size(), "game reset");
    }

    /// Place the next stone at `pos` on the snapshot under the cursor.
    ///
    /// On failure the state is left untouched.
    pub fn apply_move(&mut self, pos: Pos) -> Result<()> {
        let result = self.try_apply_move(pos);
        if let Err(err) = &result {
            debug!(row = pos.row, col = pos.col, %err, "move rejected");
        }
        result
    }

    fn try_apply_move(&mut self, pos: Pos) -> Result<()> {
        if let Some(winner) = self.winner() {
            return Err(GameError::IllegalMove { winner });
        }

        let player = self.player_to_move();
        let snapshot = self.current().with_move(pos, player)?;

        if has_five_at_pos(&snapshot, pos, player) {
            info!(?player, row = pos.row, col = pos.col, "five in a row completed");
        }

        let discarded = self.history.len() - self.cursor - 1;
        self.history.truncate(self.cursor + 1);
        self.history.push(HistoryEntry {
            snapshot,
            move_index: self.cursor + 1,
            placed: Some((pos, player)),
        });
        self.cursor = self.history.len() - 1;

        debug!(
            ?player,
            row = pos.row,
            col = pos.col,
            move_index = self.cursor,
            discarded,
            "move applied"
        );
        Ok(())
    }

    /// Move the cursor to history entry `index` without touching history
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.history.len() {
            return Err(GameError::IndexOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.cursor = index;
        debug!(index, len = self.history.len(), "jumped");
        Ok(())
    }

    /// Step the cursor back one entry
    pub fn undo(&mut self) -> Result<()> {
        let index = self.cursor.checked_sub(1).ok_or(GameError::IndexOutOfRange {
            index: 0,
            len: self.history.len(),
        })?;
        self.jump_to(index)
    }

    /// Step the cursor forward one entry, if a later entry is still recorded
    pub fn redo(&mut self) -> Result<()> {
        self.jump_to(self.cursor + 1)
    }

    /// Snapshot under the cursor
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor].snapshot
    }

    /// Derived from cursor parity: Black on even entries, White on odd
    #[inline]
    pub fn player_to_move(&self) -> Player {
        Player::for_ply(self.cursor)
    }

    /// Winner on the current snapshot, recomputed on every call
    pub fn winner(&self) -> Option<Player> {
        find_winner(self.current())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(self.current())
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.current().is_full() => GameStatus::Draw,
            None => GameStatus::InProgress {
                to_move: self.player_to_move(),
            },
        }
    }

    /// All recorded entries, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the cursor sits on the newest entry
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    pub fn board_size(&self) -> usize {
        self.current().size()
    }

    /// Move that produced the current snapshot
    pub fn last_move(&self) -> Option<(Pos, Player)> {
        self.history[self.cursor].placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn play(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.apply_move(Pos::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(15).unwrap();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.player_to_move(), Player::Black);
        assert_eq!(state.winner(), None);
        assert!(state.current().is_board_empty());
        assert_eq!(state.last_move(), None);
        assert_eq!(
            state.status(),
            GameStatus::InProgress {
                to_move: Player::Black
            }
        );
    }

    #[test]
    fn test_new_game_invalid_dimension() {
        assert_eq!(
            GameState::new(0),
            Err(GameError::InvalidDimension { size: 0 })
        );
        let state = GameState::new(100).unwrap();
        assert_eq!(state.board_size(), 100);
    }

    #[test]
    fn test_moves_alternate() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7), (7, 8)]);
        assert_eq!(state.current().cell_at(Pos::new(7, 7)), Ok(Stone::Black));
        assert_eq!(state.current().cell_at(Pos::new(7, 8)), Ok(Stone::White));
        assert_eq!(state.player_to_move(), Player::Black);
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.history()[2].move_index, 2);
        assert_eq!(state.last_move(), Some((Pos::new(7, 8), Player::White)));
    }

    #[test]
    fn test_occupied_leaves_state_unchanged() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7)]);
        let before = state.clone();
        assert_eq!(
            state.apply_move(Pos::new(7, 7)),
            Err(GameError::CellOccupied { row: 7, col: 7 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_leaves_state_unchanged() {
        let mut state = GameState::new(9).unwrap();
        let before = state.clone();
        assert!(matches!(
            state.apply_move(Pos::new(0, 9)),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut state = GameState::new(15).unwrap();
        play(
            &mut state,
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)],
        );
        assert_eq!(state.winner(), Some(Player::Black));
        assert_eq!(state.status(), GameStatus::Won(Player::Black));

        let before = state.clone();
        assert_eq!(
            state.apply_move(Pos::new(1, 4)),
            Err(GameError::IllegalMove {
                winner: Player::Black
            })
        );
        // Winner check comes before the occupancy check
        assert_eq!(
            state.apply_move(Pos::new(0, 0)),
            Err(GameError::IllegalMove {
                winner: Player::Black
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7), (7, 8), (8, 8)]);
        state.jump_to(1).unwrap();
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.player_to_move(), Player::White);
        assert!(!state.is_at_latest());
        assert_eq!(state.current().stone_count(), 1);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7)]);
        let before = state.clone();
        assert_eq!(
            state.jump_to(2),
            Err(GameError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_jump_to_start() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7), (7, 8), (8, 8), (3, 3)]);
        state.jump_to(0).unwrap();
        assert!(state.current().is_board_empty());
        assert_eq!(state.player_to_move(), Player::Black);
    }

    #[test]
    fn test_move_after_rewind_truncates() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7), (7, 8), (8, 8), (3, 3)]);
        assert_eq!(state.history().len(), 5);

        state.jump_to(1).unwrap();
        state.apply_move(Pos::new(0, 0)).unwrap();

        assert_eq!(state.history().len(), 3);
        assert_eq!(state.cursor(), 2);
        assert!(state.is_at_latest());
        assert_eq!(state.current().cell_at(Pos::new(0, 0)), Ok(Stone::White));
        assert_eq!(state.current().cell_at(Pos::new(7, 8)), Ok(Stone::Empty));
        assert_eq!(state.redo(), Err(GameError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn test_undo_redo() {
        let mut state = GameState::new(15).unwrap();
        assert_eq!(
            state.undo(),
            Err(GameError::IndexOutOfRange { index: 0, len: 1 })
        );

        play(&mut state, &[(7, 7), (7, 8)]);
        state.undo().unwrap();
        assert_eq!(state.cursor(), 1);
        state.undo().unwrap();
        assert_eq!(state.cursor(), 0);
        state.redo().unwrap();
        state.redo().unwrap();
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_rewind_unfreezes_won_game() {
        let mut state = GameState::new(15).unwrap();
        play(
            &mut state,
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)],
        );
        state.jump_to(8).unwrap();
        assert_eq!(state.winner(), None);
        assert_eq!(
            state.status(),
            GameStatus::InProgress {
                to_move: Player::Black
            }
        );
        state.apply_move(Pos::new(5, 5)).unwrap();
        assert_eq!(state.history().len(), 10);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_winner_is_stable() {
        let mut state = GameState::new(15).unwrap();
        play(&mut state, &[(7, 7), (0, 0)]);
        assert_eq!(state.winner(), state.winner());
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut state = GameState::new(2).unwrap();
        play(&mut state, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.status().is_finished());
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::new(11).unwrap();
        play(&mut state, &[(5, 5), (5, 6)]);
        state.reset();
        assert_eq!(state, GameState::new(11).unwrap());
    }
}
