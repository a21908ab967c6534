//! Move history entries.

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// What each history entry records. Chosen once when a controller is opened.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HistoryMode {
    /// Record the mark placed on each move.
    Marks,
    /// Record the whole board after each move. Required for time travel.
    #[default]
    Snapshots,
}

/// One recorded move.
///
/// Serialized untagged: a mark is `"X"`, a snapshot is a nine-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HistoryEntry {
    /// The mark placed by the move.
    Mark(Player),
    /// The board right after the move.
    Snapshot(Board),
}

impl HistoryEntry {
    /// Builds the entry for a move under `mode`.
    pub fn record(mode: HistoryMode, player: Player, after: Board) -> Self {
        match mode {
            HistoryMode::Marks => HistoryEntry::Mark(player),
            HistoryMode::Snapshots => HistoryEntry::Snapshot(after),
        }
    }

    /// Returns the board snapshot, if this entry holds one.
    pub fn snapshot(&self) -> Option<&Board> {
        match self {
            HistoryEntry::Snapshot(board) => Some(board),
            HistoryEntry::Mark(_) => None,
        }
    }

    /// The history mode that records entries of this shape.
    pub fn mode(&self) -> HistoryMode {
        match self {
            HistoryEntry::Mark(_) => HistoryMode::Marks,
            HistoryEntry::Snapshot(_) => HistoryMode::Snapshots,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryEntry::Mark(player) => write!(f, "{}", player),
            HistoryEntry::Snapshot(board) => {
                let cells: Vec<String> = board
                    .squares()
                    .iter()
                    .map(|s| s.player().map_or("_".to_string(), |p| p.to_string()))
                    .collect();
                write!(f, "{}", cells.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::apply_move;
    use std::str::FromStr;

    #[test]
    fn test_mode_parses_lowercase() {
        assert_eq!(HistoryMode::from_str("marks").unwrap(), HistoryMode::Marks);
        assert_eq!(HistoryMode::from_str("snapshots").unwrap(), HistoryMode::Snapshots);
        assert!(HistoryMode::from_str("boards").is_err());
        assert_eq!(HistoryMode::Snapshots.to_string(), "snapshots");
    }

    #[test]
    fn test_untagged_entries_distinguish_shape() {
        let board = apply_move(&Board::new(), 0).unwrap();
        let entries = vec![HistoryEntry::Mark(Player::O), HistoryEntry::Snapshot(board)];
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"["O",["X",null,null,null,null,null,null,null,null]]"#);

        let back: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_entry_mode_follows_record() {
        let board = apply_move(&Board::new(), 0).unwrap();
        for mode in [HistoryMode::Marks, HistoryMode::Snapshots] {
            assert_eq!(HistoryEntry::record(mode, Player::X, board).mode(), mode);
        }
    }

    #[test]
    fn test_snapshot_display() {
        let board = apply_move(&Board::new(), 4).unwrap();
        assert_eq!(HistoryEntry::Snapshot(board).to_string(), "_,_,_,_,X,_,_,_,_");
        assert_eq!(HistoryEntry::Mark(Player::X).to_string(), "X");
    }
}
