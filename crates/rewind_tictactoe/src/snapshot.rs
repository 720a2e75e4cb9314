//! Immutable history entries.

use super::position::{Coordinate, Position};
use super::rules::{Outcome, evaluate};
use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// A recorded board state plus the move that produced it.
///
/// Snapshots are created once and never modified. The starting snapshot
/// has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting snapshot.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds the successor of `self` in which `player` marks `pos`.
    ///
    /// Legality is the caller's concern; see [`crate::MoveContract`].
    pub(crate) fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with(pos, Square::Occupied(player)),
            last_move: Some(pos),
        }
    }

    /// The board at this point in history.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position marked to produce this snapshot, `None` at game start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Row/column of the move that produced this snapshot.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.last_move.map(Position::coordinate)
    }

    /// Row/column pair with `(-1, -1)` standing in for game start.
    pub fn row_col(&self) -> (i8, i8) {
        match self.coordinate() {
            Some(c) => (c.row as i8, c.col as i8),
            None => (-1, -1),
        }
    }

    /// Evaluates this snapshot's board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
