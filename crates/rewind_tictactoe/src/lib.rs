//! Rewind Tic-Tac-Toe - pure game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`evaluate`] returns an [`Outcome`])
//! - **History**: [`GameHistory`] owns immutable [`Snapshot`]s and a cursor;
//!   moves truncate the future, jumps only move the cursor
//! - **Contracts**: ordered preconditions and invariant postconditions
//!   guarding every move
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Outcome, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.play_move(cell)?;
//! }
//! assert_eq!(game.current_outcome().winner(), Some(Player::X));
//!
//! game.jump_to(1)?;
//! assert_eq!(game.current_turn(), Player::O);
//! assert_eq!(game.current_outcome(), Outcome::InProgress);
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use contracts::{
    CellOnBoard, Contract, GameNotOver, HistoryConsistent, LegalMove, MoveContract, SquareIsEmpty,
};
pub use error::MoveError;
pub use history::GameHistory;
pub use position::{Coordinate, Position};
pub use rules::{LINES, Line, Outcome, evaluate};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};

/// Alias for clarity: a mark is the player who placed it.
pub type Mark = Player;
