//! Terminal frontend for rewind_tictactoe.
//!
//! The frontend is a thin collaborator of the core: it turns key presses
//! and clicks into [`rewind_tictactoe::GameHistory`] calls and renders the
//! state derived from it.
//!
//! # Architecture
//!
//! - **cli / config / logging**: process setup
//! - **presentation**: pure view model (status, move list, highlights)
//! - **ui**: ratatui rendering and the shared screen layout
//! - **input / app**: event mapping and frontend state
//! - **terminal / replay**: interactive and non-interactive runners

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, RewindConfig};
pub use presentation::{GameView, MoveEntry, SortOrder};
