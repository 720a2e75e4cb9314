//! Non-interactive replay: play a fixed move list and print the result.

use crate::cli::OutputFormat;
use crate::config::RewindConfig;
use crate::presentation::GameView;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameHistory, MoveError, Outcome};
use serde::Serialize;
use tracing::{info, instrument};

/// JSON document printed by `replay --format json`.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Outcome at the cursor.
    pub outcome: Outcome,
    /// Derived view at the cursor.
    pub view: GameView,
    /// Full history and cursor.
    pub history: &'a GameHistory,
}

/// Plays `moves` from an empty board, then optionally jumps to `jump`.
///
/// # Errors
///
/// Returns the first rejected move or an out-of-range jump.
#[instrument]
pub fn build_history(moves: &[usize], jump: Option<usize>) -> Result<GameHistory, MoveError> {
    let mut history = GameHistory::replay(moves)?;
    if let Some(index) = jump {
        history.jump_to(index)?;
    }
    info!(
        history_len = history.history_len(),
        cursor = history.cursor(),
        "Replay built"
    );
    Ok(history)
}

/// Renders the game as plain text: status, board, move list.
pub fn render_text(history: &GameHistory, config: &RewindConfig) -> String {
    let view = GameView::new(history, *config.sort_order());
    let mut out = String::new();
    out.push_str(&view.status);
    out.push_str("\n\n");
    out.push_str(&history.current_board().display());
    out.push_str(&format!("\n\nMoves ({}):\n", view.sort_order));
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.text(*config.show_coordinates())));
    }
    out
}

/// Renders the game as pretty JSON.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json(history: &GameHistory, config: &RewindConfig) -> Result<String> {
    let report = ReplayReport {
        outcome: history.current_outcome(),
        view: GameView::new(history, *config.sort_order()),
        history,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize replay report")
}

/// Runs the `replay` command and returns what to print.
///
/// # Errors
///
/// Fails when a move is rejected or the jump target is not recorded.
#[instrument(skip(config))]
pub fn run(
    moves: &[usize],
    jump: Option<usize>,
    format: OutputFormat,
    config: &RewindConfig,
) -> Result<String> {
    let history = build_history(moves, jump).context("Replay rejected")?;
    match format {
        OutputFormat::Text => Ok(render_text(&history, config)),
        OutputFormat::Json => render_json(&history, config),
    }
}
