//! Stateless UI rendering.
//!
//! [`ScreenLayout`] is the single source of geometry: drawing and mouse
//! hit-testing both go through it, so a click always lands on what was
//! drawn.

use crate::app::{App, Focus};
use crate::presentation::{CellView, GameView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPoint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::Player;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;
const MOVES_WIDTH: u16 = 34;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Board cells in index order.
    pub cells: [Rect; 9],
    /// Move list, including its border.
    pub moves: Rect,
    /// Status line, including its border.
    pub status: Rect,
    /// Key hints.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let [title, body, status, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(BOARD_HEIGHT + 3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(area);

        let [board_area, moves] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(MOVES_WIDTH)])
            .areas(body);

        let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(
                board.x + col * CELL_WIDTH,
                board.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            title,
            cells,
            moves,
            status,
            help,
        }
    }

    /// Board index of the cell under a screen point.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = ScreenPoint::new(column, row);
        self.cells.iter().position(|cell| cell.contains(point))
    }

    fn move_rows(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.moves)
    }

    /// First move list row on screen when row `anchor` must stay visible.
    ///
    /// The list is drawn with this offset, so hit-testing with it lands on
    /// the drawn entry even when the list does not fit.
    pub fn move_list_offset(&self, anchor: usize) -> usize {
        match self.move_rows().height as usize {
            0 => 0,
            height => anchor.saturating_sub(height - 1),
        }
    }

    /// Move list row under a screen point for a list scrolled by `offset`.
    pub fn move_row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        let inner = self.move_rows();
        inner
            .contains(ScreenPoint::new(column, row))
            .then(|| offset + (row - inner.y) as usize)
    }
}

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let view = app.view();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    for (cell, area) in view.cells.iter().zip(layout.cells) {
        let under_cursor = app.focus() == Focus::Board && app.board_cursor() == cell.position;
        draw_cell(frame, area, cell, under_cursor);
    }

    draw_moves(frame, &layout, app, &view);

    let status = Paragraph::new(view.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(
        "1-9/Enter: play  Tab: board/history  s: sort  n: new game  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let (symbol, base_style) = match cell.mark {
        None => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if cell.highlighted {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let border_style = if cell.highlighted {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &App, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(entry.text(app.show_coordinates()), style))
        })
        .collect();

    let (border_style, highlight_style) = if app.focus() == Focus::History {
        (
            Style::default().fg(Color::Cyan),
            Style::default().bg(Color::White).fg(Color::Black),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Moves ({})", view.sort_order)),
        )
        .highlight_style(highlight_style);

    // Selecting the anchor keeps ratatui on the same offset as hit-testing.
    let anchor = app.anchor_row(view);
    let mut state = ListState::default()
        .with_offset(layout.move_list_offset(anchor))
        .with_selected(Some(anchor));
    frame.render_stateful_widget(list, layout.moves, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
