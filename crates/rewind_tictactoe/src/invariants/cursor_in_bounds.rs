//! Cursor always addresses a recorded snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `cursor < history_len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.cursor() < history.history_len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
