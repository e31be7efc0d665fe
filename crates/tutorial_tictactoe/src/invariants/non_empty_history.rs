//! Non-empty history invariant: every game starts from the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history is never empty and begins with the empty board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<GameState> for NonEmptyHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_initial_holds() {
        assert!(NonEmptyHistoryInvariant::holds(&GameState::initial()));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState {
            history: Vec::new(),
        };
        assert!(!NonEmptyHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let state = GameState {
            history: vec![Board::new().with_mark(Position::Center, Player::X)],
        };
        assert!(!NonEmptyHistoryInvariant::holds(&state));
    }
}
