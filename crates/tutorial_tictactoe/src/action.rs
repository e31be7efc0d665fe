//! Moves and move errors.
//!
//! Moves are domain events, not side effects. They record who placed a
//! mark where, and are what the controller logs.

use super::status::GameStatus;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move or navigating history.
///
/// Two kinds: rejections are expected outcomes a host ignores (the click
/// has no effect); contract violations mean the caller is broken.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already decided.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// Cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// History step past the latest snapshot.
    #[display("Step {} out of bounds (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for the expected, silently ignored outcomes.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MoveError::SquareOccupied(_) | MoveError::GameOver(_))
    }

    /// True when the caller broke the controller's contract.
    pub fn is_contract_violation(&self) -> bool {
        !self.is_rejection()
    }
}

impl std::error::Error for MoveError {}
