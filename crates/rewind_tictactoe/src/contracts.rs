//! Contract-based validation for the history manager.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`.

use super::error::MoveError;
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Value the precondition hands to the transition once it has passed.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index addresses a board square.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Resolves `cell` to a position.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::CellOutOfRange(cell))
    }
}

/// Precondition: the game at the cursor is still in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the current board is won or drawn.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        if history.current_outcome().is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto marked squares.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &GameHistory) -> Result<(), MoveError> {
        if history.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: on board, in progress, empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and returns its position.
    #[instrument(skip(history))]
    pub fn check(cell: usize, history: &GameHistory) -> Result<Position, MoveError> {
        let pos = CellOnBoard::check(cell)?;
        GameNotOver::check(history)?;
        SquareIsEmpty::check(pos, history)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a cell.
///
/// Preconditions:
/// - Cell is on the board
/// - Game at the cursor is in progress
/// - Square is empty
///
/// Postconditions:
/// - History starts empty
/// - Every step adds one mark for the player on turn
/// - Cursor is in bounds
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    type Checked = Position;

    fn pre(history: &GameHistory, cell: &usize) -> Result<Position, MoveError> {
        LegalMove::check(*cell, history)
    }

    fn post(_before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        HistoryConsistent::check(after)
    }
}

/// Every history invariant holds.
///
/// Guards both committed moves and histories read back from JSON.
pub struct HistoryConsistent;

impl HistoryConsistent {
    /// Runs [`HistoryInvariants`], folding all violations into one error.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        HistoryInvariants::check_all(history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preconditions_checked_in_order() {
        // Won game: out-of-range beats game-over, game-over beats occupied.
        let history = GameHistory::replay(&[0, 3, 1, 4, 2]).expect("legal moves");
        assert_eq!(LegalMove::check(9, &history), Err(MoveError::CellOutOfRange(9)));
        assert_eq!(LegalMove::check(0, &history), Err(MoveError::GameAlreadyOver));
        assert_eq!(LegalMove::check(8, &history), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let history = GameHistory::replay(&[4]).expect("legal move");
        assert_eq!(
            MoveContract::pre(&history, &4),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(MoveContract::pre(&history, &0), Ok(Position::TopLeft));
    }

    #[test]
    fn test_post_detects_corruption() {
        let before = GameHistory::new();
        let mut after = GameHistory::new();
        after.corrupt_for_test(|_, cursor| *cursor = 5);

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(matches!(err, MoveError::InvariantViolation(_)));
    }
}
