//! Whole-game scenarios: win detection through play, rewinding and branching

use gomoku::{find_winner, GameError, GameState, GameStatus, Player, Pos, Snapshot, Stone};

/// Plays `black` and `white` alternately, starting with Black.
fn play_alternating(state: &mut GameState, black: &[(usize, usize)], white: &[(usize, usize)]) {
    let mut white = white.iter();
    for &(row, col) in black {
        state.apply_move(Pos::new(row, col)).unwrap();
        if let Some(&(row, col)) = white.next() {
            state.apply_move(Pos::new(row, col)).unwrap();
        }
    }
}

#[test]
fn horizontal_win_on_fifth_stone() {
    let mut state = GameState::new(15).unwrap();
    let black = [(7, 3), (7, 4), (7, 5), (7, 6)];
    let white = [(0, 0), (0, 2), (0, 4), (0, 6)];
    play_alternating(&mut state, &black, &white);
    assert_eq!(state.winner(), None);

    state.apply_move(Pos::new(7, 7)).unwrap();
    assert_eq!(state.winner(), Some(Player::Black));
    assert_eq!(state.status(), GameStatus::Won(Player::Black));
}

#[test]
fn vertical_win_on_fifth_stone() {
    let mut state = GameState::new(15).unwrap();
    let black = [(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)];
    let white = [(0, 0), (0, 2), (0, 4), (0, 6)];
    play_alternating(&mut state, &black, &white);
    let line = state.winning_line().unwrap();
    assert_eq!(line.player, Player::Black);
    assert_eq!(line.start, Pos::new(3, 7));
}

#[test]
fn diagonal_win_on_fifth_stone() {
    let mut state = GameState::new(15).unwrap();
    let black = [(7, 3), (8, 4), (9, 5), (10, 6), (11, 7)];
    let white = [(0, 0), (0, 2), (0, 4), (0, 6)];
    play_alternating(&mut state, &black, &white);
    assert_eq!(state.winner(), Some(Player::Black));
}

#[test]
fn white_can_win() {
    let mut state = GameState::new(15).unwrap();
    let black = [(0, 0), (0, 2), (0, 4), (0, 6), (14, 14)];
    let white = [(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)];
    play_alternating(&mut state, &black, &white);
    assert_eq!(state.winner(), Some(Player::White));
    assert!(matches!(
        state.apply_move(Pos::new(10, 10)),
        Err(GameError::IllegalMove {
            winner: Player::White
        })
    ));
}

#[test]
fn overline_wins() {
    let board = (0..6).fold(Snapshot::empty(15).unwrap(), |board, col| {
        board.with_move(Pos::new(2, col), Player::White).unwrap()
    });
    assert_eq!(find_winner(&board), Some(Player::White));
}

#[test]
fn rewind_then_move_discards_future() {
    let mut state = GameState::new(15).unwrap();
    let black = [(7, 7), (8, 8), (9, 9)];
    let white = [(7, 8), (8, 9), (9, 10)];
    play_alternating(&mut state, &black, &white);
    let k = state.history().len();
    assert_eq!(k, 7);
    assert_eq!(state.cursor(), k - 1);

    let j = 2;
    let kept: Vec<_> = state.history()[..=j].to_vec();
    state.jump_to(j).unwrap();
    assert_eq!(state.history().len(), k);

    state.apply_move(Pos::new(1, 1)).unwrap();
    assert_eq!(state.history().len(), j + 2);
    assert_eq!(&state.history()[..=j], kept.as_slice());
    assert_eq!(state.current().cell_at(Pos::new(1, 1)), Ok(Stone::Black));
    assert_eq!(state.current().cell_at(Pos::new(8, 8)), Ok(Stone::Empty));
}

#[test]
fn jump_after_win_reopens_play() {
    let mut state = GameState::new(15).unwrap();
    let black = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)];
    let white = [(0, 0), (0, 2), (0, 4), (0, 6)];
    play_alternating(&mut state, &black, &white);
    assert!(state.status().is_finished());

    state.jump_to(4).unwrap();
    assert_eq!(state.winner(), None);
    assert_eq!(state.player_to_move(), Player::Black);
    assert_eq!(state.history().len(), 10);

    // Back to the end: frozen again
    state.jump_to(9).unwrap();
    assert_eq!(state.winner(), Some(Player::Black));
    assert_eq!(state.player_to_move(), Player::White);
}

#[test]
fn jump_to_zero_is_always_empty_board() {
    let mut state = GameState::new(13).unwrap();
    play_alternating(&mut state, &[(1, 1), (2, 2), (3, 3)], &[(4, 4), (5, 5)]);
    state.jump_to(0).unwrap();
    assert!(state.current().is_board_empty());
    assert_eq!(state.current().size(), 13);
    assert_eq!(state.player_to_move(), Player::Black);
}

#[test]
fn player_to_move_follows_cursor_parity() {
    let mut state = GameState::new(15).unwrap();
    play_alternating(&mut state, &[(1, 1), (2, 2), (3, 3)], &[(4, 4), (5, 5)]);
    for index in 0..state.history().len() {
        state.jump_to(index).unwrap();
        let expected = if index % 2 == 0 {
            Player::Black
        } else {
            Player::White
        };
        assert_eq!(state.player_to_move(), expected);
    }
}

#[test]
fn rejected_operations_leave_state_unchanged() {
    let mut state = GameState::new(15).unwrap();
    play_alternating(&mut state, &[(7, 7)], &[(7, 8)]);
    let before = state.clone();

    assert!(state.apply_move(Pos::new(7, 8)).is_err());
    assert!(state.apply_move(Pos::new(15, 15)).is_err());
    assert!(state.jump_to(99).is_err());
    assert!(state.redo().is_err());
    assert_eq!(state, before);
}
