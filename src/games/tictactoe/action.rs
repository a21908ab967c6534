//! Applying a move to a board.
//!
//! Moves are copy-on-write: [`apply_move`] returns a new board and never
//! touches its input, so an observer holding the previous board keeps
//! seeing the previous board.

use super::{Board, Square, rules};
use tracing::{debug, instrument};

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),
}

impl std::error::Error for MoveError {}

/// Places the next player's mark at `index`, returning the new board.
///
/// # Errors
///
/// Checked in order: [`MoveError::GameOver`] if the board already has a
/// winner, [`MoveError::OutOfRange`] if `index >= 9`, and
/// [`MoveError::SquareOccupied`] if the square is taken.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize) -> Result<Board, MoveError> {
    if rules::winner(board).is_some() {
        return Err(MoveError::GameOver);
    }

    match board.get(index) {
        None => return Err(MoveError::OutOfRange(index)),
        Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(index)),
        Some(Square::Empty) => {}
    }

    let player = rules::next_player(board);
    let mut next = *board;
    next.set(index, Square::Occupied(player))?;
    debug!(index, player = %player, "Move applied");
    Ok(next)
}
