//! Turn order, derived from the board alone.

use super::super::{Board, Player};

/// Returns the player to move: X when an even number of squares is taken,
/// O otherwise.
pub fn next_player(board: &Board) -> Player {
    if board.occupied_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
