//! Snapshot history of one game session.

use super::action::{Move, MoveError};
use super::status::GameStatus;
use super::types::{Board, Player};
use serde::Serialize;
use tracing::{instrument, warn};

/// Complete game state: every board snapshot since the start.
///
/// The history is never empty; it always begins with the empty board.
/// There are no mutating methods. [`crate::MoveController`] builds the
/// next state and the host replaces the value it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
}

impl GameState {
    /// Creates a new game: history holds only the empty board.
    #[instrument]
    pub fn initial() -> Self {
        Self {
            history: vec![Board::new()],
        }
    }

    /// Returns the latest snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.history.len() - 1]
    }

    /// Read-only view of every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of moves played (snapshots after the initial board).
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// X moves when an even number of moves have been played.
    pub fn x_is_next(&self) -> bool {
        self.move_count().is_multiple_of(2)
    }

    /// Player whose mark the next accepted move places.
    pub fn turn(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Status of the latest snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board())
    }

    /// "Winner: X", "Next player: O" or "Draw".
    pub fn status_line(&self) -> String {
        self.status().line(self.turn())
    }

    /// The moves that produced this history, derived from snapshot diffs.
    ///
    /// Pairs that do not differ in exactly one newly occupied cell are
    /// skipped; [`crate::invariants::MonotonicBoardInvariant`] rejects such
    /// histories.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| match pair[0].diff(&pair[1]).as_slice() {
                [pos] => pair[1].get(*pos).player().map(|player| Move::new(player, *pos)),
                _ => None,
            })
            .collect()
    }

    /// Returns the state as it was after `step` moves.
    ///
    /// Step 0 is the initial board. The history is truncated to
    /// `history[..=step]`; playing from the result discards the
    /// abandoned future. `self` is left untouched.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, MoveError> {
        if step >= self.history.len() {
            warn!(step, "Jump past the latest snapshot");
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        Ok(GameState {
            history: self.history[..=step].to_vec(),
        })
    }

    /// One description per snapshot: "Go to game start", "Go to move #1", ...
    pub fn move_descriptions(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|step| {
                if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                }
            })
            .collect()
    }

    /// Returns a new state with `board` appended.
    pub(crate) fn push(&self, board: Board) -> GameState {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(board);
        GameState { history }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
