//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: each snapshot adds exactly one mark to its predecessor.
///
/// The single differing cell must go from Empty to Occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.diff(after).as_slice() {
                [pos] => before.get(*pos) == Cell::Empty && after.get(*pos) != Cell::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot places exactly one mark on an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, MoveController, Player, Position};

    #[test]
    fn test_initial_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::initial()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let state = MoveController::replay(&[0, 4, 2, 6]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut state = MoveController::replay(&[4, 0]).unwrap();
        // Replace O's move with an overwrite of X's cell.
        state.history[2] = Board::new().with_mark(Position::Center, Player::O);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let state = MoveController::replay(&[4]).unwrap();
        let board = *state.current_board();
        let state = state.push(board);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_two_marks_at_once_violates() {
        let state = GameState::initial().push(
            Board::new()
                .with_mark(Position::Center, Player::X)
                .with_mark(Position::TopLeft, Player::O),
        );
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
