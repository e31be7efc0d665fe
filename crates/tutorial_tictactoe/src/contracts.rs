//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}.

use crate::invariants::check_state;
use crate::{GameState, GameStatus, Move, MoveError, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the target cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: the game must not be decided (won or drawn).
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects moves once the current board is terminal.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.status() {
            GameStatus::InProgress => Ok(()),
            decided => Err(MoveError::GameOver(decided)),
        }
    }
}

/// Precondition: the mark belongs to the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Flags a move whose player disagrees with the derived turn.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        let expected: Player = state.turn();
        if mov.player == expected {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "{} moved on {}'s turn",
                mov.player, expected
            )))
        }
    }
}

/// Composite precondition: game undecided, cell empty, right player.
///
/// The decided check runs first so a finished game reports `GameOver`
/// even when the clicked cell is also occupied.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameUndecided::check(state)?;
        SquareIsEmpty::check(mov, state)?;
        PlayersTurn::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not decided
/// - Cell must be empty
/// - Mark belongs to the player on turn
///
/// Postconditions:
/// - Exactly one snapshot appended, older snapshots unchanged
/// - All [`crate::invariants::TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let appended_one = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !appended_one {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History was not extended by exactly one snapshot"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history not extended by exactly one snapshot".to_string(),
            ));
        }

        check_state(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, MoveController, Position};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::initial();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = MoveController::replay(&[4]).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_player() {
        let state = GameState::initial();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&state, &action),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_precondition_game_over_takes_priority() {
        // X wins the top row; clicking an occupied cell still reports GameOver.
        let state = MoveController::replay(&[0, 3, 1, 4, 2]).unwrap();
        let action = Move::new(Player::O, Position::TopLeft);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::GameOver(GameStatus::Won(Player::X)))
        );
    }

    #[test]
    fn test_postcondition_holds_for_controller_move() {
        let before = GameState::initial();
        let after = MoveController::attempt_move(&before, 0).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_rewritten_past() {
        let before = MoveController::replay(&[0]).unwrap();
        let rewritten = GameState::initial()
            .push(Board::new().with_mark(Position::Center, Player::X))
            .push(
                Board::new()
                    .with_mark(Position::Center, Player::X)
                    .with_mark(Position::TopLeft, Player::O),
            );
        assert!(MoveContract::post(&before, &rewritten).is_err());
    }

    #[test]
    fn test_postcondition_detects_invariant_failure() {
        let before = GameState::initial();
        let after = before.push(Board::new().with_mark(Position::Center, Player::O));
        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.to_string().contains("alternate"));
    }
}
