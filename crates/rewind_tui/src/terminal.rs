//! Interactive terminal session.

use crate::app::App;
use crate::config::RewindConfig;
use crate::{input, logging, ui};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs `restore` when dropped.
///
/// Armed right after raw mode is enabled, so every later exit path
/// (failed setup, loop error, panic) hands the terminal back.
struct RestoreOnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs the TUI until the user quits.
///
/// # Errors
///
/// Fails if the log file or the terminal cannot be set up.
#[instrument(skip(config))]
pub fn run(config: &RewindConfig) -> Result<()> {
    logging::init_file_logging(config.log_file(), config.log_filter())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(|| {
        if let Err(err) = restore_terminal() {
            error!(error = %err, "Failed to restore terminal");
        }
    });

    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Rewind TUI stopped");
    res
}

/// Draw, then block for exactly one event and apply it.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut area = Rect::default();
    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, app);
        })?;

        if let Some(action) = input::action_for_event(&event::read()?) {
            app.apply(action, area);
        }
    }
    Ok(())
}
