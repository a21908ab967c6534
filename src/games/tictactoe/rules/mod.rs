//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here is stored: turn order,
//! winner and status are recomputed from the squares on every call.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use turn::next_player;
pub use win::{LINES, winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the status of the game from the board.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(next_player(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_in_progress_for_x() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X X O / O O X / X O X
        let board = Board::from_squares([X, X, O, O, O, X, X, O, X]);
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        // X O X / O X O / O X X  (X completes the main diagonal)
        let board = Board::from_squares([X, O, X, O, X, O, O, X, X]);
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_partial_board_reports_next_player() {
        let board = Board::from_squares([X, E, E, E, O, E, E, E, X]);
        assert_eq!(status(&board), GameStatus::InProgress(Player::O));
    }
}
