//! Persisted game controller.
//!
//! Board and history each live in their own [`PersistedCell`], so every
//! accepted move, restart or rewind is written through to the store as it
//! happens. Derived values (status, next player, winner) are recomputed
//! from the board on every call.

use super::invariants::{GameView, InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::{Board, GameStatus, HistoryEntry, HistoryMode, Player, apply_move, rules};
use crate::persist::{CellError, KeyValueStore, PersistedCell};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Store key holding the current board.
pub const BOARD_KEY: &str = "squares";

/// Store key holding the move history.
pub const HISTORY_KEY: &str = "history";

/// Error returned by controller operations.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// Reading or writing persisted state failed.
    #[display("{}", _0)]
    Cell(CellError),

    /// `jump_to` was given an index past the end of history.
    #[display("History index {} out of range (history has {} entries)", index, len)]
    #[from(ignore)]
    HistoryIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the call.
        len: usize,
    },

    /// `jump_to` was called on a controller that does not record snapshots.
    #[display("History entry {} holds no board snapshot", index)]
    #[from(ignore)]
    SnapshotRequired {
        /// Requested index.
        index: usize,
    },

    /// The stored history was recorded under a different mode.
    #[display(
        "Stored history entry {} was recorded as {}, but the game was opened with {}",
        index,
        found,
        expected
    )]
    #[from(ignore)]
    HistoryModeMismatch {
        /// Mode the controller was opened with.
        expected: HistoryMode,
        /// Mode implied by the first mismatching entry.
        found: HistoryMode,
        /// Index of that entry.
        index: usize,
    },
}

/// A tic-tac-toe game whose board and history are persisted in `S`.
///
/// `S` is usually a shared handle such as `&MemoryStore` or `Rc<FileStore>`,
/// since both cells keep their own copy of it.
#[derive(Debug)]
pub struct GameController<S> {
    mode: HistoryMode,
    board: PersistedCell<Board, S>,
    history: PersistedCell<Vec<HistoryEntry>, S>,
}

impl<S> GameController<S>
where
    S: KeyValueStore + Clone,
{
    /// Opens the game stored in `store`, or a fresh one if nothing is stored.
    ///
    /// The board is read first, then the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Cell`] if either stored value is corrupt or the
    /// store cannot be read, and [`GameError::HistoryModeMismatch`] if the
    /// stored history holds entries of the other mode.
    #[instrument(skip(store))]
    pub fn open(store: S, mode: HistoryMode) -> Result<Self, GameError> {
        let board = PersistedCell::open(store.clone(), BOARD_KEY, Board::new())?;
        let history = PersistedCell::open(store, HISTORY_KEY, Vec::<HistoryEntry>::new())?;

        if let Some((index, entry)) = history
            .get()
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.mode() != mode)
        {
            warn!(index, expected = %mode, found = %entry.mode(), "Stored history mode differs");
            return Err(GameError::HistoryModeMismatch {
                expected: mode,
                found: entry.mode(),
                index,
            });
        }

        let controller = Self {
            mode,
            board,
            history,
        };
        info!(
            moves = controller.history().len(),
            status = %controller.status(),
            "Game opened"
        );
        if let Err(violations) = controller.check_invariants() {
            warn_violations(&violations, "Stored game violates invariants");
        }
        Ok(controller)
    }

    /// Plays the next player's mark at `index`.
    ///
    /// Rejected moves (occupied square, finished game, index off the board)
    /// change nothing and return `Ok(())`. An accepted move writes the board,
    /// then appends to and writes the history.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn select_square(&mut self, index: usize) -> Result<(), GameError> {
        let current = *self.board.get();
        let next = match apply_move(&current, index) {
            Ok(next) => next,
            Err(reason) => {
                debug!(%reason, "Move ignored");
                return Ok(());
            }
        };
        let player = rules::next_player(&current);

        self.board.set(next)?;
        let entry = HistoryEntry::record(self.mode, player, next);
        self.history.update(|history| {
            let mut history = history.clone();
            history.push(entry);
            history
        })?;

        debug!(player = %player, status = %self.status(), "Move recorded");
        if let Err(violations) = self.check_invariants() {
            warn_violations(&violations, "Invariant violated after move");
        }
        Ok(())
    }

    /// Clears the board and the history, persisting both.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.board.set(Board::new())?;
        self.history.set(Vec::new())?;
        info!("Game restarted");
        Ok(())
    }

    /// Rewinds to the board recorded at history entry `index`.
    ///
    /// History is truncated to entries `0..=index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SnapshotRequired`] unless the controller records
    /// snapshots, and [`GameError::HistoryIndexOutOfRange`] for an index
    /// past the end. Neither changes any state.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        if self.mode != HistoryMode::Snapshots {
            return Err(GameError::SnapshotRequired { index });
        }

        let len = self.history().len();
        let entry = self
            .history()
            .get(index)
            .ok_or(GameError::HistoryIndexOutOfRange { index, len })?;
        let snapshot = *entry
            .snapshot()
            .ok_or(GameError::SnapshotRequired { index })?;

        self.board.set(snapshot)?;
        self.history
            .update(|history| history[..=index].to_vec())?;
        info!(index, remaining = index + 1, "Jumped to history entry");
        Ok(())
    }
}

impl<S> GameController<S> {
    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.board.get()
    }

    /// Returns the recorded history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.get()
    }

    /// Returns the history mode chosen when the controller was opened.
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Derives the game status from the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Derives the player to move from the current board.
    pub fn next_player(&self) -> Player {
        rules::next_player(self.board())
    }

    /// Derives the winner from the current board.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.board())
    }

    /// Borrowed view of board and history.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: self.board(),
            history: self.history(),
        }
    }

    /// Checks all game invariants against the current state.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(&self.view())
    }
}

fn warn_violations(violations: &[InvariantViolation], message: &str) {
    for violation in violations {
        warn!(invariant = %violation.description, "{}", message);
    }
}
