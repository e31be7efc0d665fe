//! Game status derived from a board snapshot.

use super::rules;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of a game.
///
/// `Won` and `Drawn` are terminal: no further moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winner.
    Drawn,
}

impl GameStatus {
    /// Derives the status of a board.
    #[instrument]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = rules::evaluate(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the game is decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Status line as shown above the board.
    ///
    /// `next` is only used while the game is in progress.
    pub fn line(&self, next: Player) -> String {
        match self {
            GameStatus::Won(player) => format!("Winner: {}", player),
            GameStatus::Drawn => "Draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", next),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "won by {}", player),
            GameStatus::Drawn => write!(f, "drawn"),
        }
    }
}
