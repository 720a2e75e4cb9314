//! Tests for the non-interactive replay command.

use rewind_tictactoe::MoveError;
use rewind_tui::replay::{build_history, render_text, run};
use rewind_tui::{OutputFormat, RewindConfig, SortOrder};

#[test]
fn test_text_output_after_jump() {
    let history = build_history(&[0, 1, 4], Some(1)).expect("legal replay");
    let text = render_text(&history, &RewindConfig::default());

    assert!(text.starts_with("Next player: O\n\nX|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9"));
    // Cell 1 is row 0, column 1; coordinates print as (col, row).
    assert!(text.contains("> Go to move #1 (0, 0)"));
    assert!(text.contains("  Go to move #2 (1, 0)"));
    assert!(text.contains("  You are at move #3"));
    assert!(!text.contains("You are at move #3 ("));
}

#[test]
fn test_text_output_descending() {
    let config = RewindConfig::default().with_sort_order(SortOrder::Descending);
    let output = run(&[4], None, OutputFormat::Text, &config).expect("legal replay");

    let lines: Vec<&str> = output.lines().collect();
    let header = lines
        .iter()
        .position(|l| *l == "Moves (Desc):")
        .expect("move list header");
    assert_eq!(lines[header + 1], "> You are at move #1");
    assert_eq!(lines[header + 2], "  Go to game start");
}

#[test]
fn test_json_output() {
    let output = run(&[0, 1, 4, 2, 8], None, OutputFormat::Json, &RewindConfig::default())
        .expect("legal replay");
    let json: serde_json::Value = serde_json::from_str(&output).expect("valid json");

    assert_eq!(json["view"]["status"], "Winner: X");
    assert_eq!(json["outcome"]["Win"]["player"], "X");
    assert_eq!(json["history"]["cursor"], 5);
    assert_eq!(json["view"]["moves"].as_array().map(Vec::len), Some(6));
}

#[test]
fn test_rejected_moves_surface_as_errors() {
    assert_eq!(
        build_history(&[4, 4], None),
        Err(MoveError::CellOccupied(rewind_tictactoe::Position::Center))
    );
    assert_eq!(
        build_history(&[4], Some(5)),
        Err(MoveError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert!(run(&[9], None, OutputFormat::Text, &RewindConfig::default()).is_err());
}
