//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, GameStatus, Player};

/// Invariant: marks alternate starting with X, and nothing follows a
/// decided board.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        // No snapshot after the game was decided.
        let decided_early = history
            .iter()
            .take(history.len().saturating_sub(1))
            .any(|board| GameStatus::of(board).is_terminal());
        if decided_early {
            return false;
        }

        let moves = state.moves();
        if moves.len() != state.move_count() {
            return false;
        }

        moves.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, MoveController, Position};

    #[test]
    fn test_initial_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::initial()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = MoveController::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.turn(), Player::O);
    }

    #[test]
    fn test_o_first_violates() {
        let state = GameState::initial().push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Player::X);
        let state = GameState::initial()
            .push(first)
            .push(first.with_mark(Position::Center, Player::X));
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        // X wins the top row, then O plays anyway.
        let won = MoveController::replay(&[0, 3, 1, 4, 2]).unwrap();
        let board = won
            .current_board()
            .with_mark(Position::BottomRight, Player::O);
        let state = won.push(board);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
