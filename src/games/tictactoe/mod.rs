//! Tic-tac-toe: board types, pure rules and the persisted controller.

mod action;
mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{MoveError, apply_move};
pub use controller::{BOARD_KEY, GameController, GameError, HISTORY_KEY};
pub use history::{HistoryEntry, HistoryMode};
pub use position::Position;
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};

/// Alias for clarity when talking about what a square holds.
pub type Mark = Player;
