//! Board evaluation: the single source of truth for game outcome.

use super::super::{Board, Player, Position};
use super::draw::is_full;
use super::win::{Line, check_winner};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Terminal or non-terminal classification of a board.
///
/// Outcomes are never stored; they are recomputed from a board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still possible.
    InProgress,
    /// `player` completed `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(pos))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// Lines are checked before fullness, so a full board that contains a
/// completed line is a win rather than a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some((player, line)) = check_winner(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    trace!(%outcome, "Board evaluated");
    outcome
}
