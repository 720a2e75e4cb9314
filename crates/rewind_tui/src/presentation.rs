//! Presentation model derived from the game history.
//!
//! Everything here is recomputed from a [`GameHistory`] on every frame.
//! The only state of its own is the [`SortOrder`] toggle, which never
//! reaches the core.

use rewind_tictactoe::{Coordinate, GameHistory, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is rendered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    #[strum(serialize = "Asc")]
    #[value(name = "asc")]
    #[serde(rename = "asc")]
    Ascending,
    /// Newest move first.
    #[strum(serialize = "Desc")]
    #[value(name = "desc")]
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Reorders chronologically sorted items for display.
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            items.reverse();
        }
        items
    }
}

/// One row of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Button text.
    pub label: String,
    /// Coordinate of the move that produced the snapshot.
    pub coordinate: Option<Coordinate>,
    /// True for the entry under the cursor.
    pub is_current: bool,
    /// False for the newest entry, which only reports where the game is.
    pub is_jump_target: bool,
}

impl MoveEntry {
    /// Label plus the `(col, row)` of the move, when requested and present.
    ///
    /// The newest entry never shows a coordinate.
    pub fn text(&self, show_coordinates: bool) -> String {
        match self.coordinate {
            Some(Coordinate { row, col }) if show_coordinates && self.is_jump_target => {
                format!("{} ({}, {})", self.label, col, row)
            }
            _ => self.label.clone(),
        }
    }
}

/// One square as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Board position.
    pub position: Position,
    /// Occupying player.
    pub mark: Option<Player>,
    /// True when the square belongs to the winning line.
    pub highlighted: bool,
}

/// Status line for the board at the cursor.
#[instrument(skip(history), fields(cursor = history.cursor()))]
pub fn status_line(history: &GameHistory) -> String {
    match history.current_outcome() {
        Outcome::InProgress => format!("Next player: {}", history.current_turn()),
        Outcome::Win { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "Draw".to_string(),
    }
}

/// Cells of the board at the cursor, winning line highlighted.
pub fn cell_views(history: &GameHistory) -> [CellView; 9] {
    let board = history.current_board();
    let outcome = history.current_outcome();
    Position::ALL.map(|position| CellView {
        position,
        mark: board.get(position).player(),
        highlighted: outcome.highlights(position),
    })
}

fn entry_label(index: usize, is_latest: bool) -> String {
    match (index, is_latest) {
        (k, true) => format!("You are at move #{}", k),
        (0, false) => "Go to game start".to_string(),
        (k, false) => format!("Go to move #{}", k),
    }
}

/// Move list entries in the requested display order.
#[instrument(skip(history), fields(history_len = history.history_len()))]
pub fn move_entries(history: &GameHistory, order: SortOrder) -> Vec<MoveEntry> {
    let entries = history
        .snapshots()
        .iter()
        .enumerate()
        .map(|(index, snapshot)| {
            let is_latest = index + 1 == history.history_len();
            MoveEntry {
                index,
                label: entry_label(index, is_latest),
                coordinate: snapshot.coordinate(),
                is_current: index == history.cursor(),
                is_jump_target: !is_latest,
            }
        })
        .collect();
    order.apply(entries)
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Status line.
    pub status: String,
    /// Board cells in index order.
    pub cells: [CellView; 9],
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Display order of `moves`.
    pub sort_order: SortOrder,
}

impl GameView {
    /// Derives the view of `history`.
    pub fn new(history: &GameHistory, sort_order: SortOrder) -> Self {
        Self {
            status: status_line(history),
            cells: cell_views(history),
            moves: move_entries(history, sort_order),
            sort_order,
        }
    }

    /// Position in `moves` of the entry for history index `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.moves.iter().position(|entry| entry.index == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_tracks_outcome() {
        let mut history = GameHistory::new();
        assert_eq!(status_line(&history), "Next player: X");

        for cell in [0, 1, 4, 2, 8] {
            history.play_move(cell).expect("legal move");
        }
        assert_eq!(status_line(&history), "Winner: X");

        history.jump_to(3).expect("in range");
        assert_eq!(status_line(&history), "Next player: O");
    }

    #[test]
    fn test_draw_status() {
        let history = GameHistory::replay(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).expect("legal moves");
        assert_eq!(status_line(&history), "Draw");
    }

    #[test]
    fn test_winning_line_highlighted() {
        let history = GameHistory::replay(&[0, 1, 4, 2, 8]).expect("legal moves");
        let highlighted: Vec<usize> = cell_views(&history)
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.position.to_index())
            .collect();
        assert_eq!(highlighted, vec![0, 4, 8]);
    }

    #[test]
    fn test_move_entries_labels() {
        // Cell 5 is row 1, column 2.
        let mut history = GameHistory::replay(&[5, 0]).expect("legal moves");
        history.jump_to(1).expect("in range");

        let entries = move_entries(&history, SortOrder::Ascending);
        let labels: Vec<String> = entries.iter().map(|e| e.text(true)).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (2, 1)".to_string(),
                "You are at move #2".to_string(),
            ]
        );

        let targets: Vec<bool> = entries.iter().map(|e| e.is_jump_target).collect();
        assert_eq!(targets, vec![true, true, false]);
        let current: Vec<bool> = entries.iter().map(|e| e.is_current).collect();
        assert_eq!(current, vec![false, true, false]);
    }

    #[test]
    fn test_new_game_has_single_latest_entry() {
        let entries = move_entries(&GameHistory::new(), SortOrder::Ascending);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text(true), "You are at move #0");
        assert!(!entries[0].is_jump_target);
    }

    #[test]
    fn test_coordinates_can_be_hidden() {
        let history = GameHistory::replay(&[5, 0]).expect("legal moves");
        let entries = move_entries(&history, SortOrder::Ascending);
        assert_eq!(entries[1].text(false), "Go to move #1");
    }

    #[test]
    fn test_descending_order_is_cosmetic() {
        let history = GameHistory::replay(&[4, 0, 8]).expect("legal moves");
        let before = history.clone();

        let indices: Vec<usize> = move_entries(&history, SortOrder::Descending)
            .iter()
            .map(|e| e.index)
            .collect();
        assert_eq!(indices, vec![3, 2, 1, 0]);
        assert_eq!(history, before);
    }

    #[test]
    fn test_sort_order_toggle_and_label() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.to_string(), "Asc");
        assert_eq!(SortOrder::Descending.to_string(), "Desc");
    }

    #[test]
    fn test_row_of_follows_order() {
        let history = GameHistory::replay(&[4, 0]).expect("legal moves");
        let view = GameView::new(&history, SortOrder::Descending);
        assert_eq!(view.row_of(2), Some(0));
        assert_eq!(view.row_of(0), Some(2));
        assert_eq!(view.row_of(7), None);
    }
}
