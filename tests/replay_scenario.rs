//! End-to-end game and replay scenarios through the public API.

use tictactoe::{Board, GameState, Mark, Status};

fn play_all(state: GameState, moves: &[usize]) -> GameState {
    moves.iter().fold(state, |s, &idx| s.click(idx))
}

#[test]
fn top_row_win_then_branch_from_move_two() {
    let won = play_all(GameState::new(), &[0, 4, 1, 7, 2]);
    assert_eq!(won.current_move(), 5);
    assert_eq!(won.status(), Status::Winner(Mark::X));
    assert_eq!(won.status().to_string(), "Winner: X");
    let win = won.winner_info().expect("x should have won");
    assert_eq!(win.line, [0, 1, 2]);
    let marked: Vec<usize> = (0..9).filter(|&i| won.is_winning_cell(i)).collect();
    assert_eq!(marked, [0, 1, 2]);

    // Jump back to the position after the second move
    let back = won.jump_to(2);
    let expected = Board::new().with_mark(0, Mark::X).with_mark(4, Mark::O);
    assert_eq!(*back.board(), expected);
    assert_eq!(back.status().to_string(), "Next player: X");
    assert_eq!(back.history().len(), 6, "jumping never changes history");

    // A new move from there drops moves 3 to 5
    let branched = back.click(6);
    assert_eq!(branched.history().len(), 4);
    assert_eq!(branched.current_move(), 3);
    assert_eq!(branched.history()[3].location, Some(6));
    assert_eq!(branched.status().to_string(), "Next player: O");
}

#[test]
fn full_board_without_line_keeps_next_player_status() {
    // X O X
    // X O O
    // O X X
    let state = play_all(GameState::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(state.board().is_full());
    assert_eq!(state.winner_info(), None);
    assert_eq!(state.status(), Status::NextPlayer(Mark::O));
    // Nothing left to play
    for idx in 0..9 {
        assert_eq!(state.click(idx), state);
    }
}

#[test]
fn browsing_a_won_game_is_always_allowed() {
    let won = play_all(GameState::new(), &[0, 4, 1, 7, 2]);
    for move_index in (0..won.history().len()).rev() {
        let state = won.jump_to(move_index);
        assert_eq!(state.current_move(), move_index);
        assert_eq!(state.board().mark_count(), move_index);
    }
}

#[test]
fn descending_list_pairs_label_with_its_location() {
    let state = play_all(GameState::with_order(false), &[4, 0, 8]);
    let rows: Vec<(String, Option<usize>)> = state
        .move_list()
        .into_iter()
        .map(|item| (item.label, item.location))
        .collect();
    assert_eq!(
        rows,
        [
            ("Go to move #3".to_string(), Some(8)),
            ("Go to move #2".to_string(), Some(0)),
            ("Go to move #1".to_string(), Some(4)),
            ("Go to game start".to_string(), None),
        ]
    );
}
