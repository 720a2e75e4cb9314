//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend};
use rewind_tui::input::Action;
use rewind_tui::ui::{self, ScreenLayout};
use rewind_tui::{App, RewindConfig};
use rewind_tictactoe::Position;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|frame| ui::draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn area() -> ratatui::layout::Rect {
    ratatui::layout::Rect::new(0, 0, 80, 24)
}

#[test]
fn test_new_game_screen() {
    let app = App::new(&RewindConfig::default());
    let text = screen_text(&app);

    assert!(text.contains("Rewind - Tic Tac Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Moves (Asc)"));
    assert!(text.contains("You are at move #0"));
}

#[test]
fn test_won_game_screen() {
    let mut app = App::new(&RewindConfig::default());
    for cell in [0, 1, 4, 2, 8] {
        app.apply(Action::PlayCell(Position::ALL[cell]), area());
    }
    let text = screen_text(&app);

    assert!(text.contains("Winner: X"));
    assert!(text.contains("You are at move #5"));
    assert!(text.contains("Go to move #1 (0, 0)"));
    assert!(text.contains("Go to move #2 (1, 0)"));
}

#[test]
fn test_winning_cells_are_highlighted() {
    let mut app = App::new(&RewindConfig::default());
    for cell in [0, 1, 4, 2, 8] {
        app.apply(Action::PlayCell(Position::ALL[cell]), area());
    }
    // Move the keyboard cursor off the line so it does not mask the highlight.
    app.apply(Action::ToggleFocus, area());

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    terminal.draw(|frame| ui::draw(frame, &app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let layout = ScreenLayout::new(area());

    let center_bg = |index: usize| {
        let cell = layout.cells[index];
        buffer[(cell.x + cell.width / 2, cell.y + 1)].bg
    };
    assert_eq!(center_bg(0), ratatui::style::Color::Green);
    assert_eq!(center_bg(4), ratatui::style::Color::Green);
    assert_eq!(center_bg(8), ratatui::style::Color::Green);
    assert_ne!(center_bg(1), ratatui::style::Color::Green);
}

#[test]
fn test_click_hits_the_row_drawn_on_a_short_screen() {
    let short = ratatui::layout::Rect::new(0, 0, 80, 10);
    let mut app = App::new(&RewindConfig::default());
    for cell in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        app.apply(Action::PlayCell(Position::ALL[cell]), short);
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 10)).expect("test terminal");
    terminal.draw(|frame| ui::draw(frame, &app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let moves = ScreenLayout::new(short).moves;
    if moves.height < 3 {
        return;
    }
    let top_row: String = (moves.x + 1..moves.x + moves.width.saturating_sub(1))
        .map(|x| buffer[(x, moves.y + 1)].symbol().to_string())
        .collect();

    app.apply(
        Action::Click {
            column: moves.x + 2,
            row: moves.y + 1,
        },
        short,
    );

    let cursor = app.history().cursor();
    if cursor != 9 {
        let expected = if cursor == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{} ", cursor)
        };
        assert!(
            top_row.trim_start().starts_with(&expected),
            "drew {:?} but jumped to {}",
            top_row,
            cursor
        );
    }
}

#[test]
fn test_descending_list_renders_newest_first() {
    let mut app = App::new(&RewindConfig::default());
    app.apply(Action::PlayCell(Position::Center), area());
    app.apply(Action::ToggleSort, area());
    let text = screen_text(&app);

    let newest = text.find("You are at move #1").expect("current entry drawn");
    let oldest = text.find("Go to game start").expect("start entry drawn");
    assert!(newest < oldest);
    assert!(text.contains("Moves (Desc)"));
}
