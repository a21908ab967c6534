//! Property tests over random move sequences.

use persisted_tictactoe::{
    Board, GameController, GameStatus, HistoryEntry, HistoryMode, MemoryStore, Player, Square,
    apply_move, rules,
};
use proptest::prelude::*;

/// Plays `picks` against a fresh board, drawing each move from the squares
/// still empty. Stops once the game is over.
fn legal_boards(picks: &[usize]) -> Vec<Board> {
    let mut boards = vec![Board::new()];
    let mut board = Board::new();
    for &pick in picks {
        if rules::status(&board).is_over() {
            break;
        }
        let free: Vec<usize> = (0..9).filter(|&i| board.is_empty(i)).collect();
        board = apply_move(&board, free[pick % free.len()]).unwrap();
        boards.push(board);
    }
    boards
}

fn has_uniform_line(board: &Board, player: Player) -> bool {
    rules::LINES.iter().any(|line| {
        line.iter()
            .all(|pos| board.get(pos.to_index()) == Some(Square::Occupied(player)))
    })
}

proptest! {
    #[test]
    fn prop_turns_alternate(picks in prop::collection::vec(0usize..9, 0..9)) {
        for board in legal_boards(&picks) {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            prop_assert!(x == o || x == o + 1);
            let expected = if x == o { Player::X } else { Player::O };
            prop_assert_eq!(rules::next_player(&board), expected);
        }
    }

    #[test]
    fn prop_apply_move_leaves_input_untouched(
        picks in prop::collection::vec(0usize..9, 0..9),
        index in 0usize..12,
    ) {
        let board = *legal_boards(&picks).last().unwrap();
        let before = board;
        match apply_move(&board, index) {
            Ok(after) => {
                prop_assert_eq!(after.occupied_count(), board.occupied_count() + 1);
                prop_assert_eq!(after.get(index), Some(Square::Occupied(rules::next_player(&board))));
            }
            Err(_) => {}
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_winner_means_uniform_line(picks in prop::collection::vec(0usize..9, 0..9)) {
        for board in legal_boards(&picks) {
            match rules::winner(&board) {
                Some(player) => prop_assert!(has_uniform_line(&board, player)),
                None => {
                    prop_assert!(!has_uniform_line(&board, Player::X));
                    prop_assert!(!has_uniform_line(&board, Player::O));
                }
            }
            if rules::status(&board) == GameStatus::Draw {
                prop_assert!(rules::is_full(&board));
                prop_assert_eq!(rules::winner(&board), None);
            }
        }
    }

    #[test]
    fn prop_history_tracks_marks(picks in prop::collection::vec(0usize..9, 0..12)) {
        let store = MemoryStore::new();
        let mut game = GameController::open(&store, HistoryMode::Snapshots).unwrap();
        for pick in picks {
            game.select_square(pick).unwrap();
        }

        prop_assert_eq!(game.history().len(), game.board().occupied_count());
        if let Some(last) = game.history().last() {
            prop_assert_eq!(last, &HistoryEntry::Snapshot(*game.board()));
        }
        prop_assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn prop_stored_state_reopens_identically(picks in prop::collection::vec(0usize..9, 0..12)) {
        let store = MemoryStore::new();
        let mut game = GameController::open(&store, HistoryMode::Snapshots).unwrap();
        for pick in picks {
            game.select_square(pick).unwrap();
        }

        let reopened = GameController::open(&store, HistoryMode::Snapshots).unwrap();
        prop_assert_eq!(reopened.board(), game.board());
        prop_assert_eq!(reopened.history(), game.history());
    }
}
