//! Game history manager: snapshots, cursor and time travel.
//!
//! The history is a linear log of immutable [`Snapshot`]s. Playing a
//! move from the cursor discards every snapshot after it and appends the
//! new one; jumping only moves the cursor. Turn and outcome are derived
//! from the cursor and its board, never stored.

use super::contracts::{Contract, HistoryConsistent, MoveContract};
use super::error::MoveError;
use super::position::{Coordinate, Position};
use super::rules::Outcome;
use super::snapshot::Snapshot;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owns the move history and the cursor into it.
///
/// Deserialization goes through [`HistoryConsistent`], so a history read
/// back from JSON satisfies the same invariants as one built by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordedHistory")]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RecordedHistory {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl TryFrom<RecordedHistory> for GameHistory {
    type Error = MoveError;

    fn try_from(recorded: RecordedHistory) -> Result<Self, MoveError> {
        let history = Self {
            snapshots: recorded.snapshots,
            cursor: recorded.cursor,
        };
        HistoryConsistent::check(&history)?;
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a new game: one empty snapshot, cursor at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            cursor: 0,
        }
    }

    /// Builds a history by playing `cells` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] raised by [`GameHistory::play_move`].
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for &cell in cells {
            history.play_move(cell)?;
        }
        Ok(history)
    }

    /// Discards everything and starts over from the empty board.
    #[instrument(skip(self), fields(history_len = self.snapshots.len()))]
    pub fn reset(&mut self) {
        debug!("Resetting game history");
        *self = Self::new();
    }

    /// Number of recorded snapshots (moves played + 1).
    pub fn history_len(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the snapshot being viewed and played from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true when the cursor sits on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// All recorded snapshots in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot at `index`, if recorded.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// The board at the cursor.
    pub fn current_board(&self) -> Board {
        *self.current_snapshot().board()
    }

    /// Player to move at history index `index`: X on even, O on odd.
    pub fn turn_at(index: usize) -> Player {
        Player::for_move_count(index)
    }

    /// Player to move at the cursor.
    pub fn current_turn(&self) -> Player {
        Self::turn_at(self.cursor)
    }

    /// Outcome of the board at the cursor.
    pub fn current_outcome(&self) -> Outcome {
        self.current_snapshot().outcome()
    }

    /// Coordinate of the move that produced snapshot `index`.
    ///
    /// Snapshot 0 has no move and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IndexOutOfRange`] past the end of the history.
    pub fn move_descriptor(&self, index: usize) -> Result<Option<Coordinate>, MoveError> {
        self.snapshot(index)
            .map(Snapshot::coordinate)
            .ok_or(MoveError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            })
    }

    /// Marks `cell` (0-8) for the player on turn.
    ///
    /// Preconditions are checked in order: cell on the board, game at the
    /// cursor still in progress, square empty. On success every snapshot
    /// after the cursor is discarded, the new snapshot is appended and the
    /// cursor moves onto it. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::CellOutOfRange`] if `cell > 8`
    /// - [`MoveError::GameAlreadyOver`] if the current board is won or drawn
    /// - [`MoveError::CellOccupied`] if the square is taken
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.current_turn()))]
    pub fn play_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let pos = MoveContract::pre(self, &cell).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        let next = self.current_snapshot().successor(pos, self.current_turn());
        let mut snapshots = self.snapshots[..=self.cursor].to_vec();
        snapshots.push(next);
        let candidate = Self {
            cursor: snapshots.len() - 1,
            snapshots,
        };

        MoveContract::post(self, &candidate)?;

        let discarded = self.snapshots.len() - 1 - self.cursor;
        *self = candidate;
        debug!(
            position = %pos,
            discarded,
            history_len = self.snapshots.len(),
            outcome = %self.current_outcome(),
            "Move played"
        );
        Ok(())
    }

    /// Typed twin of [`GameHistory::play_move`].
    ///
    /// # Errors
    ///
    /// Same as [`GameHistory::play_move`], minus the range check.
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        self.play_move(pos.to_index())
    }

    /// Moves the cursor to `index` without touching the history.
    ///
    /// Jumping into a finished position is allowed; later snapshots stay
    /// reachable until a move is played from the new cursor.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IndexOutOfRange`] if `index >= history_len()`.
    #[instrument(skip(self), fields(cursor = self.cursor, history_len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.snapshots.len() {
            return Err(MoveError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.cursor = index;
        debug!(index, "Cursor moved");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, f: impl FnOnce(&mut Vec<Snapshot>, &mut usize)) {
        f(&mut self.snapshots, &mut self.cursor);
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
