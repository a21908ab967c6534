//! Persisted Tic-Tac-Toe library - game state that survives restarts
//!
//! Values live in [`PersistedCell`]s: each cell mirrors one key of a
//! [`KeyValueStore`], reading it once when opened and writing through on
//! every update. The tic-tac-toe [`GameController`] keeps its board and
//! move history in two such cells.
//!
//! # Architecture
//!
//! - **Persist**: store capability, codecs and the persisted cell
//! - **Games**: pure tic-tac-toe rules plus the persisted controller
//! - **Greeting**: a persisted name field
//! - **Fetch**: request lifecycle for remote lookups
//! - **Config**: TOML settings for the terminal front end
//!
//! # Example
//!
//! ```
//! use persisted_tictactoe::{GameController, GameStatus, HistoryMode, MemoryStore, Player};
//!
//! # fn example() -> Result<(), persisted_tictactoe::GameError> {
//! let store = MemoryStore::new();
//! let mut game = GameController::open(&store, HistoryMode::Snapshots)?;
//! game.select_square(4)?;
//! assert_eq!(game.status(), GameStatus::InProgress(Player::O));
//!
//! // A second controller on the same store picks up where the first left off.
//! let resumed = GameController::open(&store, HistoryMode::Snapshots)?;
//! assert_eq!(resumed.history().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod fetch;
mod games;
mod greeting;
mod persist;

// Crate-level exports - Persistence
pub use persist::{
    CellError, Codec, CodecError, FileStore, FnCodec, JsonCodec, KeyValueStore, MemoryStore,
    PersistedCell, RawStringCodec, StoreError,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_KEY, BOARD_SIZE, Board, GameController, GameError, GameStatus, HISTORY_KEY,
    HistoryEntry, HistoryMode, Mark, MoveError, Player, Position, Square, apply_move,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants;
pub use games::tictactoe::rules;

// Crate-level exports - Greeting
pub use greeting::{Greeting, NAME_KEY};

// Crate-level exports - Fetch lifecycle
pub use fetch::{FetchRequest, FetchState, Fetcher};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
