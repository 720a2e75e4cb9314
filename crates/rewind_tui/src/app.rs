//! Application state and logic.
//!
//! The app owns the [`GameHistory`] and a few bits of frontend state. It
//! never second-guesses the core: rejected moves are dropped on the floor.

use crate::config::RewindConfig;
use crate::input::{Action, Direction, move_cursor};
use crate::presentation::{GameView, SortOrder};
use crate::ui::ScreenLayout;
use ratatui::layout::Rect;
use rewind_tictactoe::{GameHistory, Position};
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Board cells.
    #[default]
    Board,
    /// Move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    sort_order: SortOrder,
    show_coordinates: bool,
    focus: Focus,
    board_cursor: Position,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &RewindConfig) -> Self {
        Self {
            history: GameHistory::new(),
            sort_order: *config.sort_order(),
            show_coordinates: *config.show_coordinates(),
            focus: Focus::Board,
            board_cursor: Position::Center,
            selected: 0,
            should_quit: false,
        }
    }

    /// The authoritative game.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// View of the game for rendering.
    pub fn view(&self) -> GameView {
        GameView::new(&self.history, self.sort_order)
    }

    /// Current move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether move entries show coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board cell under the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// History index selected in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move list row kept on screen: the selection with history focus,
    /// otherwise the entry under the game cursor.
    pub fn anchor_row(&self, view: &GameView) -> usize {
        let index = match self.focus {
            Focus::History => self.selected,
            Focus::Board => self.history.cursor(),
        };
        view.row_of(index).unwrap_or(0)
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one action. `area` is the frame the last draw used.
    #[instrument(skip(self), fields(focus = ?self.focus, cursor = self.history.cursor()))]
    pub fn apply(&mut self, action: Action, area: Rect) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::NewGame => self.new_game(),
            Action::ToggleSort => {
                self.sort_order = self.sort_order.toggle();
                debug!(sort_order = %self.sort_order, "Move list order changed");
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.history.cursor();
            }
            Action::PlayCell(pos) => self.play(pos),
            Action::Move(direction) => match self.focus {
                Focus::Board => self.board_cursor = move_cursor(self.board_cursor, direction),
                Focus::History => self.step_selection(direction),
            },
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.board_cursor),
                Focus::History => self.jump_from_list(self.selected),
            },
            Action::Click { column, row } => self.click(column, row, area),
        }
    }

    /// Plays `pos` for the player on turn; illegal moves are ignored.
    pub fn play(&mut self, pos: Position) {
        match self.history.place(pos) {
            Ok(()) => {
                self.board_cursor = pos;
                self.selected = self.history.cursor();
            }
            Err(e) => debug!(error = %e, position = %pos, "Ignoring rejected move"),
        }
    }

    /// Moves the game cursor to history index `index`.
    pub fn jump(&mut self, index: usize) {
        match self.history.jump_to(index) {
            Ok(()) => self.selected = index,
            Err(e) => debug!(error = %e, "Ignoring jump outside history"),
        }
    }

    /// Jumps to `index` if the move list offers it as a target.
    ///
    /// The newest entry only reports the game's length and is not one.
    fn jump_from_list(&mut self, index: usize) {
        let is_target = self
            .view()
            .moves
            .iter()
            .any(|entry| entry.index == index && entry.is_jump_target);
        if is_target {
            self.jump(index);
        } else {
            debug!(index, "Ignoring jump to newest entry");
        }
    }

    /// Starts a fresh game; the sort order survives.
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.history.reset();
        self.board_cursor = Position::Center;
        self.selected = 0;
    }

    fn step_selection(&mut self, direction: Direction) {
        let view = self.view();
        let Some(row) = view.row_of(self.selected) else {
            return;
        };
        let row = match direction {
            Direction::Up => row.saturating_sub(1),
            Direction::Down => (row + 1).min(view.moves.len().saturating_sub(1)),
            Direction::Left | Direction::Right => row,
        };
        if let Some(entry) = view.moves.get(row) {
            self.selected = entry.index;
        }
    }

    fn click(&mut self, column: u16, row: u16, area: Rect) {
        let layout = ScreenLayout::new(area);
        if let Some(cell) = layout.cell_at(column, row) {
            self.focus = Focus::Board;
            if let Some(pos) = Position::from_index(cell) {
                self.play(pos);
            }
        } else {
            let view = self.view();
            let offset = layout.move_list_offset(self.anchor_row(&view));
            let target = layout
                .move_row_at(column, row, offset)
                .and_then(|list_row| view.moves.get(list_row))
                .map(|entry| entry.index);
            if let Some(index) = target {
                self.focus = Focus::History;
                self.selected = index;
                self.jump_from_list(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, Square};

    fn app() -> App {
        App::new(&RewindConfig::default())
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_keyboard_play_and_reject() {
        let mut app = app();
        app.apply(Action::PlayCell(Position::Center), AREA);
        app.apply(Action::PlayCell(Position::Center), AREA);

        assert_eq!(app.history().history_len(), 2);
        assert_eq!(app.history().current_turn(), Player::O);
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = app();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            app.apply(Action::PlayCell(pos), AREA);
        }
        app.apply(Action::ToggleFocus, AREA);
        app.apply(Action::Move(Direction::Up), AREA);
        app.apply(Action::Move(Direction::Up), AREA);
        app.apply(Action::Activate, AREA);

        assert_eq!(app.history().cursor(), 1);
        assert_eq!(app.history().history_len(), 4);
    }

    #[test]
    fn test_selection_follows_descending_order() {
        let mut app = app();
        app.apply(Action::PlayCell(Position::TopLeft), AREA);
        app.apply(Action::ToggleSort, AREA);
        app.apply(Action::ToggleFocus, AREA);

        // Newest first: Down walks back in time.
        app.apply(Action::Move(Direction::Down), AREA);
        assert_eq!(app.selected(), 0);
        app.apply(Action::Move(Direction::Down), AREA);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_click_on_cell_plays() {
        let mut app = app();
        let cell = ScreenLayout::new(AREA).cells[2];
        app.apply(
            Action::Click {
                column: cell.x + 1,
                row: cell.y + 1,
            },
            AREA,
        );

        assert_eq!(
            app.history().current_board().get(Position::TopRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_click_on_move_list_jumps() {
        let mut app = app();
        app.apply(Action::PlayCell(Position::TopLeft), AREA);
        app.apply(Action::PlayCell(Position::Center), AREA);

        let moves = ScreenLayout::new(AREA).moves;
        app.apply(
            Action::Click {
                column: moves.x + 2,
                row: moves.y + 1,
            },
            AREA,
        );

        assert_eq!(app.history().cursor(), 0);
        assert_eq!(app.focus(), Focus::History);
    }

    #[test]
    fn test_newest_entry_is_not_a_jump_target() {
        let mut app = app();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            app.apply(Action::PlayCell(pos), AREA);
        }
        app.jump(1);
        app.apply(Action::ToggleFocus, AREA);
        app.apply(Action::Move(Direction::Down), AREA);
        app.apply(Action::Move(Direction::Down), AREA);
        assert_eq!(app.selected(), 3);

        app.apply(Action::Activate, AREA);
        assert_eq!(app.history().cursor(), 1);

        let moves = ScreenLayout::new(AREA).moves;
        app.apply(
            Action::Click {
                column: moves.x + 2,
                row: moves.y + 4,
            },
            AREA,
        );
        assert_eq!(app.history().cursor(), 1);
    }

    #[test]
    fn test_click_on_scrolled_move_list() {
        const SHORT: Rect = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 10,
        };
        let mut app = app();
        for cell in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
            app.apply(Action::PlayCell(Position::ALL[cell]), SHORT);
        }

        let layout = ScreenLayout::new(SHORT);
        let offset = layout.move_list_offset(app.anchor_row(&app.view()));
        app.apply(
            Action::Click {
                column: layout.moves.x + 2,
                row: layout.moves.y + 1,
            },
            SHORT,
        );

        // Ascending order: the top visible row is history index `offset`.
        let visible_rows = layout.moves.height.saturating_sub(2);
        if visible_rows > 0 && offset < 9 {
            assert_eq!(app.history().cursor(), offset);
        }
    }

    #[test]
    fn test_new_game_keeps_sort_order() {
        let mut app = app();
        app.apply(Action::PlayCell(Position::TopLeft), AREA);
        app.apply(Action::ToggleSort, AREA);
        app.apply(Action::NewGame, AREA);

        assert_eq!(app.history().history_len(), 1);
        assert_eq!(app.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.apply(Action::Quit, AREA);
        assert!(app.should_quit());
    }
}
