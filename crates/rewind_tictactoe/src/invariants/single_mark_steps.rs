//! Each history step adds exactly one mark for the player on turn.

use super::super::{GameHistory, Player, Snapshot, Square};
use super::Invariant;

/// Invariant: snapshot `i` is snapshot `i - 1` plus one mark.
///
/// The new mark lands on a previously empty square, belongs to the
/// player whose turn it was at `i - 1`, and sits at the recorded move.
/// Existing marks never change.
pub struct SingleMarkStepsInvariant;

fn is_single_step(prev: &Snapshot, next: &Snapshot, player: Player) -> bool {
    let Some(pos) = next.last_move() else {
        return false;
    };

    let changed: Vec<usize> = prev
        .board()
        .squares()
        .iter()
        .zip(next.board().squares())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(i, _)| i)
        .collect();

    changed == [pos.to_index()]
        && prev.board().get(pos) == Square::Empty
        && next.board().get(pos) == Square::Occupied(player)
}

impl Invariant<GameHistory> for SingleMarkStepsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| is_single_step(&pair[0], &pair[1], Player::for_move_count(i)))
    }

    fn description() -> &'static str {
        "Each step adds one mark for the player on turn"
    }
}
