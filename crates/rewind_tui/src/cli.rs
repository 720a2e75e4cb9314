//! Command-line interface for rewind.

use crate::presentation::SortOrder;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Move list order, overriding the config file
    #[arg(long, value_enum, global = true)]
    pub sort: Option<SortOrder>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a fixed list of moves and print the resulting game
    Replay {
        /// Cells to play in order (0-8, comma separated)
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History index to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as text
    #[default]
    Text,
    /// Game view and history as JSON
    Json,
}
