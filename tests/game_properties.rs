//! Property-based tests for the game state controller.

use proptest::prelude::*;
use tictactoe::{GameState, WINNING_LINES};

/// Sequence of clicks, legal or not
fn arb_clicks() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..9, 0..20)
}

fn play_all(moves: &[usize]) -> GameState {
    moves.iter().fold(GameState::new(), |s, &idx| s.click(idx))
}

proptest! {
    #[test]
    fn occupied_cell_click_is_noop(clicks in arb_clicks()) {
        let state = play_all(&clicks);
        for idx in 0..9 {
            if !state.board().is_empty(idx) {
                prop_assert_eq!(&state.click(idx), &state);
            }
        }
    }

    #[test]
    fn click_after_win_is_noop(clicks in arb_clicks(), idx in 0usize..9) {
        let state = play_all(&clicks);
        if state.winner_info().is_some() {
            prop_assert_eq!(&state.click(idx), &state);
        }
    }

    #[test]
    fn branch_discards_future(clicks in arb_clicks(), back in 0usize..10, idx in 0usize..9) {
        let state = play_all(&clicks);
        let target = back % state.history().len();
        let rewound = state.jump_to(target);
        let next = rewound.click(idx);
        if next != rewound {
            prop_assert_eq!(next.history().len(), target + 2);
            prop_assert_eq!(next.current_move(), target + 1);
            for i in 0..=target {
                prop_assert_eq!(next.history()[i], state.history()[i]);
            }
        }
    }

    #[test]
    fn history_invariants_hold(clicks in arb_clicks()) {
        let state = play_all(&clicks);
        let start = state.history()[0];
        prop_assert!(start.board.is_board_empty());
        prop_assert_eq!(start.location, None);
        prop_assert!(state.current_move() < state.history().len());
        for (i, entry) in state.history().iter().enumerate() {
            prop_assert_eq!(entry.board.mark_count(), i);
        }
    }

    #[test]
    fn reported_line_is_uniform(clicks in arb_clicks()) {
        let state = play_all(&clicks);
        if let Some(win) = state.winner_info() {
            prop_assert!(WINNING_LINES.contains(&win.line));
            for idx in win.line {
                prop_assert_eq!(state.board().get(idx), Some(Some(win.winner)));
            }
        }
    }
}
