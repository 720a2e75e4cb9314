//! Errors raised by the history manager.

use super::Position;

/// Error that can occur when playing a move or moving through history.
///
/// Every variant is recoverable: the game is left exactly as it was
/// before the rejected call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// The game at the cursor is already won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// A history index past the recorded moves.
    #[display("History index {} is out of range (history has {} entries)", index, len)]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of recorded snapshots.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
