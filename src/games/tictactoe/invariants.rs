//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that hold for any game reached by
//! sequential play from an empty board. Stored games are not guaranteed to
//! satisfy them, so violations are reported, never asserted.

use super::{Board, HistoryEntry, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S: ?Sized> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S: ?Sized, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Borrowed board and history, the state the game invariants inspect.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    /// Current board.
    pub board: &'a Board,
    /// Recorded history.
    pub history: &'a [HistoryEntry],
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

impl Invariant<GameView<'_>> for BalancedMarksInvariant {
    fn holds(view: &GameView<'_>) -> bool {
        <Self as Invariant<Board>>::holds(view.board)
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Invariant: history length equals the number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameView<'_>> for HistoryConsistentInvariant {
    fn holds(view: &GameView<'_>) -> bool {
        view.history.len() == view.board.occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

/// Invariant: when the newest entry is a snapshot, it equals the board.
pub struct LatestSnapshotInvariant;

impl Invariant<GameView<'_>> for LatestSnapshotInvariant {
    fn holds(view: &GameView<'_>) -> bool {
        match view.history.last() {
            Some(HistoryEntry::Snapshot(board)) => board == view.board,
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Latest history snapshot matches the board"
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    BalancedMarksInvariant,
    HistoryConsistentInvariant,
    LatestSnapshotInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Square, apply_move};

    fn play(moves: &[usize]) -> (Board, Vec<HistoryEntry>) {
        let mut board = Board::new();
        let mut history = Vec::new();
        for &m in moves {
            board = apply_move(&board, m).unwrap();
            history.push(HistoryEntry::Snapshot(board));
        }
        (board, history)
    }

    #[test]
    fn test_invariants_hold_for_empty_game() {
        let board = Board::new();
        let view = GameView { board: &board, history: &[] };
        assert!(TicTacToeInvariants::check_all(&view).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let (board, history) = play(&[0, 4, 8]);
        let view = GameView { board: &board, history: &history };
        assert!(TicTacToeInvariants::check_all(&view).is_ok());
    }

    #[test]
    fn test_corrupted_board_violates() {
        let (mut board, history) = play(&[4]);
        board.set(0, Square::Occupied(Player::O)).unwrap();
        board.set(1, Square::Occupied(Player::O)).unwrap();

        let view = GameView { board: &board, history: &history };
        let violations = TicTacToeInvariants::check_all(&view).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let (board, _) = play(&[4, 0]);
        let view = GameView { board: &board, history: &[] };
        type TwoInvariants = (BalancedMarksInvariant, HistoryConsistentInvariant);
        let violations = TwoInvariants::check_all(&view).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                "History length matches number of occupied squares"
            )]
        );
    }
}
