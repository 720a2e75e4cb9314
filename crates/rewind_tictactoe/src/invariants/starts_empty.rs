//! History starts from the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: snapshot 0 exists, holds the empty board and records no move.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .first()
            .is_some_and(|start| *start.board() == Board::new() && start.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
